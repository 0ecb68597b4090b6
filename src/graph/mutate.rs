use crate::error::GraphError;
use crate::graph::types::Graph3D;

const WHITE: [f32; 3] = [1.0, 1.0, 1.0];

impl Graph3D {
    /// Appends a single edge (and its reverse, if undirected) with weight
    /// `weight`, pads colors with white if present, then rebuilds the CSR
    /// structure.
    pub fn add_edge(&mut self, edge: (usize, usize), weight: f32) -> Result<(), GraphError> {
        self.add_edges(&[edge], Some(vec![weight]))
    }

    /// Appends a batch of edges. If `weights` is `Some`, its length must
    /// equal `edges.len()` or this fails with `SizeMismatch` and leaves the
    /// graph unchanged. In undirected mode every edge's reverse is appended
    /// alongside it with the same weight.
    pub fn add_edges(
        &mut self,
        edges: &[(usize, usize)],
        weights: Option<Vec<f32>>,
    ) -> Result<(), GraphError> {
        if let Some(w) = &weights {
            if w.len() != edges.len() {
                return Err(GraphError::SizeMismatch {
                    edges: edges.len(),
                    weights: w.len(),
                });
            }
        }
        let weights = weights.unwrap_or_else(|| vec![1.0; edges.len()]);

        let added_per_edge = if self.is_directed { 1 } else { 2 };
        let mut new_lines = Vec::with_capacity(edges.len() * added_per_edge);
        let mut new_weights = Vec::with_capacity(edges.len() * added_per_edge);

        for (&(src, dst), &w) in edges.iter().zip(weights.iter()) {
            new_lines.push((src, dst));
            new_weights.push(w);
            if !self.is_directed {
                new_lines.push((dst, src));
                new_weights.push(w);
            }
        }

        self.lines.extend(new_lines.iter().copied());
        self.edge_weights.extend(new_weights.iter().copied());
        if let Some(colors) = &mut self.edge_colors {
            colors.extend(std::iter::repeat(WHITE).take(new_lines.len()));
        }

        self.constructed = false;
        self.construct_graph()
    }

    /// Deletes every occurrence of `edge` (and its reverse, if undirected),
    /// then rebuilds the CSR structure. A no-op (leaving all invariants
    /// intact) if the edge is not present.
    pub fn remove_edge(&mut self, edge: (usize, usize)) -> Result<(), GraphError> {
        self.remove_edges(&[edge])
    }

    /// Bulk edge removal, specified as the sorted set-difference of the
    /// current edge list (and its reverse set, if undirected) against the
    /// sorted removal list. Tombstones are dropped from `lines` and every
    /// side array together, preserving row-alignment.
    pub fn remove_edges(&mut self, edges: &[(usize, usize)]) -> Result<(), GraphError> {
        if self.lines.is_empty() || edges.is_empty() {
            return Ok(());
        }

        let mut to_remove: Vec<(usize, usize)> = edges.to_vec();
        if !self.is_directed {
            to_remove.extend(edges.iter().map(|&(a, b)| (b, a)));
        }
        to_remove.sort_unstable();
        to_remove.dedup();

        let keep_mask: Vec<bool> = self
            .lines
            .iter()
            .map(|e| to_remove.binary_search(e).is_err())
            .collect();

        if keep_mask.iter().all(|&k| k) {
            // Nothing in `edges` was actually present; leave the graph untouched.
            return Ok(());
        }

        let mut new_lines = Vec::with_capacity(self.lines.len());
        let mut new_weights = Vec::with_capacity(self.lines.len());
        let mut new_colors = self.edge_colors.as_ref().map(|_| Vec::new());

        for (i, &keep) in keep_mask.iter().enumerate() {
            if !keep {
                continue;
            }
            new_lines.push(self.lines[i]);
            new_weights.push(self.edge_weights[i]);
            if let Some(colors) = &self.edge_colors {
                new_colors.as_mut().unwrap().push(colors[i]);
            }
        }

        self.lines = new_lines;
        self.edge_weights = new_weights;
        self.edge_colors = new_colors;

        if self.lines.is_empty() {
            // An empty edge list cannot be "constructed" (construct_graph
            // would fail with EmptyGraph); reset directly to the empty-CSR
            // state instead of surfacing that as an error to the caller.
            self.edge_index_offsets = vec![0; self.points.len() + 1];
            self.constructed = false;
            return Ok(());
        }

        self.constructed = false;
        self.construct_graph()
    }

    /// Paints a single edge (and its reverse, if undirected). Materialises
    /// the edge-color array as all-white first if it was absent. No
    /// structural change; `construct_graph` is not required afterwards.
    pub fn paint_edge_color(&mut self, edge: (usize, usize), color: [f32; 3]) {
        self.paint_edges_color(&[edge], color)
    }

    pub fn paint_edges_color(&mut self, edges: &[(usize, usize)], color: [f32; 3]) {
        if self.edge_colors.is_none() {
            self.edge_colors = Some(vec![WHITE; self.lines.len()]);
        }

        let mut targets: Vec<(usize, usize)> = edges.to_vec();
        if !self.is_directed {
            targets.extend(edges.iter().map(|&(a, b)| (b, a)));
        }
        targets.sort_unstable();
        targets.dedup();

        if let Some(colors) = &mut self.edge_colors {
            for (i, edge) in self.lines.iter().enumerate() {
                if targets.binary_search(edge).is_ok() {
                    colors[i] = color;
                }
            }
        }
    }

    /// Paints a single node. Materialises the node-color array as
    /// all-white first if it was absent.
    pub fn paint_node_color(&mut self, node: usize, color: [f32; 3]) {
        self.paint_nodes_color(&[node], color)
    }

    /// Paints exactly the listed node indices (not a counting range over
    /// `nodes.len()`, which would paint the first N vertices regardless of
    /// which indices were requested).
    pub fn paint_nodes_color(&mut self, nodes: &[usize], color: [f32; 3]) {
        if self.node_colors.is_none() {
            self.node_colors = Some(vec![WHITE; self.points.len()]);
        }
        if let Some(colors) = &mut self.node_colors {
            for &n in nodes {
                if let Some(slot) = colors.get_mut(n) {
                    *slot = color;
                }
            }
        }
    }

    /// Sets every edge weight to the Euclidean distance between its
    /// endpoints' vertex positions. Row-aligned with `lines`; yields
    /// symmetric weights when the graph is undirected, since `(a,b)` and
    /// `(b,a)` measure the same two points.
    pub fn set_edge_weights_from_distance(&mut self) {
        self.edge_weights = self
            .lines
            .iter()
            .map(|&(src, dst)| (self.points[dst] - self.points[src]).length())
            .collect();
    }
}
