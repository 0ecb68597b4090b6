use crate::vec3::Vec3;

/// Read-only accessors shared by every consumer of a [`crate::graph::Graph3D`].
///
/// A single accessor trait rather than a split view/mutator pair, since
/// `Graph3D` is always mutable in place instead of a frozen/dynamic pair.
pub trait GraphView {
    /// Number of vertices.
    fn number_nodes(&self) -> usize;

    /// Number of materialised edges (each undirected edge counts twice).
    fn number_edges(&self) -> usize;

    /// Whether the graph treats `(a, b)` and `(b, a)` as distinct edges.
    fn is_directed(&self) -> bool;

    /// Whether the CSR structure reflects the current `lines`/side arrays.
    fn is_constructed(&self) -> bool;

    fn contains_node(&self, index: usize) -> bool;

    fn point(&self, index: usize) -> Option<Vec3>;

    /// `edge_index_offsets()[v]..edge_index_offsets()[v+1]` bounds the rows
    /// of `edges()` whose source is `v`. Length `n+1` once constructed.
    fn edge_index_offsets(&self) -> &[usize];

    fn edge_weights(&self) -> &[f32];

    fn edges(&self) -> &[(usize, usize)];

    fn edge_colors(&self) -> Option<&[[f32; 3]]>;

    fn node_colors(&self) -> Option<&[[f32; 3]]>;
}
