use std::collections::BTreeSet;

use crate::error::GraphError;
use crate::graph::types::Graph3D;
use crate::vec3::Vec3;

impl Graph3D {
    /// Builds an undirected graph whose vertices are the mesh vertices and
    /// whose edges are the three edges of every triangle, each materialised
    /// in both directions and deduplicated (shared edges between adjacent
    /// triangles collapse to a single logical edge).
    ///
    /// `vertices` and `triangles` are the external mesh collaborator's
    /// interface: this crate only depends on their shapes (a point list and
    /// index triples), not on how the mesh itself is constructed.
    pub fn from_triangle_mesh(
        vertices: Vec<Vec3>,
        triangles: &[[usize; 3]],
    ) -> Result<Self, GraphError> {
        let mut unique_edges: BTreeSet<(usize, usize)> = BTreeSet::new();
        for &[a, b, c] in triangles {
            for &(u, v) in &[(a, b), (b, c), (c, a)] {
                unique_edges.insert((u, v));
                unique_edges.insert((v, u));
            }
        }

        let edges: Vec<(usize, usize)> = unique_edges.into_iter().collect();
        let mut graph = Graph3D::from_points_and_edges(vertices, edges, None, false);
        graph.construct_graph()?;
        Ok(graph)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::view::GraphView;

    #[test]
    fn single_triangle_yields_six_directed_rows() {
        let vertices = vec![
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
        ];
        let graph = Graph3D::from_triangle_mesh(vertices, &[[0, 1, 2]]).unwrap();
        assert_eq!(graph.number_edges(), 6);
        assert!(graph.is_constructed());
    }

    #[test]
    fn shared_edge_between_two_triangles_is_not_duplicated() {
        let vertices = vec![
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(1.0, 1.0, 0.0),
        ];
        // Two triangles sharing edge (1, 2): 12 directed rows total, minus
        // the 2 duplicated by the shared edge, leaves 10 unique rows.
        let graph = Graph3D::from_triangle_mesh(vertices, &[[0, 1, 2], [1, 3, 2]]).unwrap();
        assert_eq!(graph.number_edges(), 10);
    }
}
