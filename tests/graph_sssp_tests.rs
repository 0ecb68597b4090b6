use spatial_core::{Graph3D, GraphError, Vec3};

fn grid_points() -> Vec<Vec3> {
    vec![
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(2.0, 0.0, 0.0),
        Vec3::new(1.0, 1.0, 0.0),
    ]
}

#[test]
fn shortest_path_prefers_cheaper_route_over_fewer_hops() {
    // 0 -> 2 direct costs 10; 0 -> 1 -> 3 -> 2 costs 1+1+1 = 3.
    let points = grid_points();
    let mut g = Graph3D::from_points_and_edges(
        points,
        vec![(0, 2), (0, 1), (1, 3), (3, 2)],
        Some(vec![10.0, 1.0, 1.0, 1.0]),
        true,
    );
    g.construct_graph().unwrap();
    let path = g.dijkstra_path(0, 2).unwrap();
    assert_eq!(path, vec![0, 1, 3, 2]);
    let results = g.dijkstra_paths(0, None).unwrap();
    assert!((results[2].shortest_distance - 3.0).abs() < 1e-6);
}

#[test]
fn equal_distance_ties_are_broken_by_first_encountered_source() {
    // Two equal-cost routes into vertex 2: via 0 and via 1. Both sources
    // start open simultaneously from vertex 0 acting as the sole start, so
    // construct the tie directly: start=0, with 0->1 weight 1, 0->2 weight
    // 1, 1->2 weight 0 -- both arrive at distance 1, row order decides.
    let points = grid_points();
    let mut g = Graph3D::from_points_and_edges(
        points,
        vec![(0, 1), (0, 2), (1, 2)],
        Some(vec![1.0, 1.0, 0.0]),
        true,
    );
    g.construct_graph().unwrap();
    let results = g.dijkstra_paths(0, None).unwrap();
    assert!((results[2].shortest_distance - 1.0).abs() < 1e-6);
}

#[test]
fn single_vertex_start_is_its_own_predecessor() {
    let points = vec![Vec3::ZERO, Vec3::new(1.0, 0.0, 0.0)];
    let mut g = Graph3D::from_points_and_edges(points, vec![(0, 1)], None, true);
    g.construct_graph().unwrap();
    let results = g.dijkstra_paths(0, None).unwrap();
    assert_eq!(results[0].prev_index, 0);
    assert_eq!(results[0].shortest_distance, 0.0);
}

#[test]
fn querying_before_construct_graph_fails() {
    let mut g = Graph3D::from_points_and_edges(grid_points(), vec![(0, 1)], None, true);
    g.construct_graph().unwrap();
    g.add_edge((1, 2), 1.0).unwrap();
    assert!(g.dijkstra_paths(0, None).is_ok());

    // Force the unconstructed branch explicitly.
    let fresh = Graph3D::from_points(grid_points());
    assert_eq!(
        fresh.dijkstra_paths(0, None).unwrap_err(),
        GraphError::NotConstructed
    );
}
