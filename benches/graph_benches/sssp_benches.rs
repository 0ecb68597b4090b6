use criterion::{Criterion, criterion_group};
use spatial_core::{Graph3D, Vec3};
use std::hint::black_box;

/// A chain plus a few long-range chords, so the wavefront needs more than
/// one round to converge.
fn create_chain_graph(num_nodes: usize) -> Graph3D {
    let points = (0..num_nodes)
        .map(|i| Vec3::new(i as f32, 0.0, 0.0))
        .collect();
    let mut edges: Vec<(usize, usize)> = (0..num_nodes - 1).map(|i| (i, i + 1)).collect();
    for i in (0..num_nodes).step_by(97) {
        if i + 50 < num_nodes {
            edges.push((i, i + 50));
        }
    }
    let mut graph = Graph3D::from_points_and_edges(points, edges, None, true);
    graph.construct_graph().unwrap();
    graph
}

pub fn bench_sssp(c: &mut Criterion) {
    let mut group = c.benchmark_group("Graph3D SSSP");

    let small_graph = create_chain_graph(1_000);
    group.bench_function("dijkstra_paths (1k nodes, full sweep)", |b| {
        b.iter(|| black_box(small_graph.dijkstra_paths(0, None).unwrap()))
    });

    group.bench_function("dijkstra_path (1k nodes, end-pruned)", |b| {
        b.iter(|| black_box(small_graph.dijkstra_path(0, 999).unwrap()))
    });

    let large_graph = create_chain_graph(100_000);
    group.bench_function("dijkstra_paths (100k nodes, full sweep)", |b| {
        b.iter(|| black_box(large_graph.dijkstra_paths(0, None).unwrap()))
    });

    group.finish();
}

criterion_group!(sssp_benches, bench_sssp);
