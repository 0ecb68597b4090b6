use criterion::{Criterion, criterion_group};
use spatial_core::{Graph3D, Vec3};
use std::hint::black_box;

/// A chain graph `0 -> 1 -> ... -> n-1` with unit-spaced collinear points,
/// unsorted in insertion order so `construct_graph` always has real
/// permutation work to do.
fn chain_edges(num_nodes: usize) -> (Vec<Vec3>, Vec<(usize, usize)>) {
    let points = (0..num_nodes)
        .map(|i| Vec3::new(i as f32, 0.0, 0.0))
        .collect();
    let mut edges: Vec<(usize, usize)> = (0..num_nodes.saturating_sub(1))
        .map(|i| (i, i + 1))
        .collect();
    edges.reverse();
    (points, edges)
}

pub fn bench_graph_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("Graph3D Construction");

    group.bench_function("construct_graph (1k nodes, 999 edges)", |b| {
        b.iter_with_setup(
            || {
                let (points, edges) = chain_edges(1_000);
                Graph3D::from_points_and_edges(points, edges, None, true)
            },
            |mut graph| {
                black_box(graph.construct_graph().unwrap());
            },
        );
    });

    group.bench_function("construct_graph (100k nodes, 99_999 edges)", |b| {
        b.iter_with_setup(
            || {
                let (points, edges) = chain_edges(100_000);
                Graph3D::from_points_and_edges(points, edges, None, true)
            },
            |mut graph| {
                black_box(graph.construct_graph().unwrap());
            },
        );
    });

    group.bench_function("add_edges (append 1k edges to 10k-edge graph)", |b| {
        b.iter_with_setup(
            || {
                let (points, edges) = chain_edges(10_001);
                let mut graph = Graph3D::from_points_and_edges(points, edges, None, true);
                graph.construct_graph().unwrap();
                let extra: Vec<(usize, usize)> = (0..1_000).map(|i| (i, (i + 5_000) % 10_000)).collect();
                (graph, extra)
            },
            |(mut graph, extra)| {
                black_box(graph.add_edges(&extra, None).unwrap());
            },
        );
    });

    group.finish();
}

criterion_group!(construct_benches, bench_graph_construction);
