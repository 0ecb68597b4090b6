use criterion::{Criterion, criterion_group};
use spatial_core::{OccupancyGrid, Vec3};
use std::hint::black_box;

/// A ring of points around the viewpoint, simulating one lidar-like sweep.
fn ring_cloud(num_points: usize, radius: f32) -> (Vec<Vec3>, Vec3) {
    let viewpoint = Vec3::ZERO;
    let points = (0..num_points)
        .map(|i| {
            let theta = (i as f32 / num_points as f32) * std::f32::consts::TAU;
            viewpoint + Vec3::new(radius * theta.cos(), radius * theta.sin(), 0.0)
        })
        .collect();
    (points, viewpoint)
}

pub fn bench_occupancy_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("OccupancyGrid Insert");

    let (small_cloud, viewpoint) = ring_cloud(500, 20.0);
    group.bench_function("insert (512^3 grid, 500-point sweep)", |b| {
        b.iter_with_setup(
            || OccupancyGrid::default(),
            |mut grid| {
                black_box(grid.insert(&small_cloud, viewpoint, -1.0));
            },
        );
    });

    let (large_cloud, viewpoint) = ring_cloud(20_000, 20.0);
    group.bench_function("insert (512^3 grid, 20k-point sweep)", |b| {
        b.iter_with_setup(
            || OccupancyGrid::default(),
            |mut grid| {
                black_box(grid.insert(&large_cloud, viewpoint, -1.0));
            },
        );
    });

    group.bench_function("repeated insert (same 500-point sweep x5)", |b| {
        b.iter_with_setup(
            || OccupancyGrid::default(),
            |mut grid| {
                for _ in 0..5 {
                    grid.insert(&small_cloud, viewpoint, -1.0);
                }
                black_box(&grid);
            },
        );
    });

    group.finish();
}

criterion_group!(insert_benches, bench_occupancy_insert);
