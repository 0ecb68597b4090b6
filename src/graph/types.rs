use crate::graph::view::GraphView;
use crate::vec3::Vec3;

/// A directed or undirected weighted graph over 3D vertices.
///
/// `lines`, `edge_weights`, and `edge_colors` are kept row-aligned: every
/// mutator that changes the edge count updates all three together, and
/// `construct_graph` is the only operation allowed to reorder them (as a
/// single stable permutation applied to all three in lockstep).
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Graph3D {
    pub(crate) points: Vec<Vec3>,
    pub(crate) lines: Vec<(usize, usize)>,
    pub(crate) edge_weights: Vec<f32>,
    pub(crate) edge_colors: Option<Vec<[f32; 3]>>,
    pub(crate) node_colors: Option<Vec<[f32; 3]>>,
    pub(crate) edge_index_offsets: Vec<usize>,
    pub(crate) is_directed: bool,
    pub(crate) constructed: bool,
}

impl Graph3D {
    /// An empty graph with no vertices and no edges.
    pub fn new() -> Self {
        Self {
            points: Vec::new(),
            lines: Vec::new(),
            edge_weights: Vec::new(),
            edge_colors: None,
            node_colors: None,
            // The `n + 1` offsets rule with `n = 0` still needs one entry.
            edge_index_offsets: vec![0],
            is_directed: false,
            constructed: false,
        }
    }

    /// A graph with the given vertices and no edges. `construct_graph` has
    /// not run; calling an SSSP query now fails with `NotConstructed`.
    pub fn from_points(points: Vec<Vec3>) -> Self {
        Self {
            points,
            ..Self::new()
        }
    }

    /// A graph assembled host-side from vertices, an edge list, and
    /// optional weights, with CSR construction deferred to an explicit
    /// `construct_graph` call.
    ///
    /// If `weights` is `Some`, its length must equal `edges.len()`
    /// (checked by `construct_graph`, not here).
    pub fn from_points_and_edges(
        points: Vec<Vec3>,
        edges: Vec<(usize, usize)>,
        weights: Option<Vec<f32>>,
        is_directed: bool,
    ) -> Self {
        Self {
            points,
            lines: edges,
            edge_weights: weights.unwrap_or_default(),
            is_directed,
            ..Self::new()
        }
    }

    pub fn is_directed(&self) -> bool {
        self.is_directed
    }

    pub fn set_is_directed(&mut self, is_directed: bool) {
        self.is_directed = is_directed;
    }

    /// Directly overrides the CSR offsets. Intended for callers that build
    /// or restore a graph from an already-sorted, already-offset
    /// representation; does not validate consistency with `lines`.
    pub fn set_edge_index_offsets(&mut self, offsets: Vec<usize>) {
        self.edge_index_offsets = offsets;
    }

    pub fn set_edge_weights(&mut self, weights: Vec<f32>) {
        self.edge_weights = weights;
    }
}

impl Default for Graph3D {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphView for Graph3D {
    fn number_nodes(&self) -> usize {
        self.points.len()
    }

    fn number_edges(&self) -> usize {
        self.lines.len()
    }

    fn is_directed(&self) -> bool {
        self.is_directed
    }

    fn is_constructed(&self) -> bool {
        self.constructed
    }

    fn contains_node(&self, index: usize) -> bool {
        index < self.points.len()
    }

    fn point(&self, index: usize) -> Option<Vec3> {
        self.points.get(index).copied()
    }

    fn edge_index_offsets(&self) -> &[usize] {
        &self.edge_index_offsets
    }

    fn edge_weights(&self) -> &[f32] {
        &self.edge_weights
    }

    fn edges(&self) -> &[(usize, usize)] {
        &self.lines
    }

    fn edge_colors(&self) -> Option<&[[f32; 3]]> {
        self.edge_colors.as_deref()
    }

    fn node_colors(&self) -> Option<&[[f32; 3]]> {
        self.node_colors.as_deref()
    }
}
