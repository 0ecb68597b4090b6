use crate::error::GraphError;
use crate::graph::types::Graph3D;

impl Graph3D {
    /// Rebuilds the CSR structure from the current edge list.
    ///
    /// Must be called (and re-called) after any structural mutation before
    /// `dijkstra_paths`/`dijkstra_path` can be used. Idempotent: calling it
    /// twice in a row on an already-constructed graph is a no-op beyond the
    /// redundant sort/rebuild work.
    ///
    /// # Errors
    ///
    /// Returns `GraphError::EmptyGraph` if there are no edges, or
    /// `GraphError::SizeMismatch` if a weight vector was supplied whose
    /// length does not match the edge list. The graph is left unchanged on
    /// either error.
    pub fn construct_graph(&mut self) -> Result<(), GraphError> {
        if self.lines.is_empty() {
            return Err(GraphError::EmptyGraph);
        }

        if self.edge_weights.is_empty() {
            self.edge_weights = vec![1.0; self.lines.len()];
        }
        if self.edge_weights.len() != self.lines.len() {
            return Err(GraphError::SizeMismatch {
                edges: self.lines.len(),
                weights: self.edge_weights.len(),
            });
        }
        if let Some(colors) = &self.edge_colors {
            if colors.len() != self.lines.len() {
                return Err(GraphError::SizeMismatch {
                    edges: self.lines.len(),
                    weights: colors.len(),
                });
            }
        }

        let order = sorted_permutation(&self.lines);
        apply_permutation(&mut self.lines, &order);
        apply_permutation(&mut self.edge_weights, &order);
        if let Some(colors) = &mut self.edge_colors {
            apply_permutation(colors, &order);
        }

        let num_nodes = self.points.len();
        let counts = count_by_source(&self.lines, num_nodes);
        let offsets = exclusive_scan(&counts);
        debug_assert_eq!(offsets[0], 0);
        debug_assert_eq!(*offsets.last().unwrap(), self.lines.len());
        self.edge_index_offsets = offsets;
        self.constructed = true;

        Ok(())
    }
}

/// Returns the permutation that stably sorts `lines` in lexicographic
/// `(src, dst)` order. Stability matters: it is what keeps the row-aligned
/// side arrays (weights, colors) consistent with `lines` after the permute.
fn sorted_permutation(lines: &[(usize, usize)]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..lines.len()).collect();

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        // `par_sort_by_key` is a stable parallel merge sort, matching the
        // "sort lexicographically, permute side arrays identically" phase.
        order.par_sort_by_key(|&i| lines[i]);
    }
    #[cfg(not(feature = "parallel"))]
    {
        order.sort_by_key(|&i| lines[i]);
    }

    order
}

/// Applies `order` to `data` out-of-place, writing the result back into `data`.
fn apply_permutation<T: Clone>(data: &mut Vec<T>, order: &[usize]) {
    let permuted: Vec<T> = order.iter().map(|&i| data[i].clone()).collect();
    *data = permuted;
}

/// Segmented count of edges by source vertex: the "reduce-by-key" phase
/// of CSR construction, implemented as a parallel histogram over atomics
/// when the `parallel` feature is enabled.
fn count_by_source(lines: &[(usize, usize)], num_nodes: usize) -> Vec<usize> {
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        use std::sync::atomic::{AtomicUsize, Ordering};

        let counts: Vec<AtomicUsize> = (0..num_nodes).map(|_| AtomicUsize::new(0)).collect();
        lines.par_iter().for_each(|&(src, _)| {
            counts[src].fetch_add(1, Ordering::Relaxed);
        });
        counts.into_iter().map(AtomicUsize::into_inner).collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        let mut counts = vec![0usize; num_nodes];
        for &(src, _) in lines {
            counts[src] += 1;
        }
        counts
    }
}

/// Exclusive prefix sum of per-vertex edge counts, producing the CSR
/// offsets array of length `num_nodes + 1`.
fn exclusive_scan(counts: &[usize]) -> Vec<usize> {
    let mut offsets = Vec::with_capacity(counts.len() + 1);
    let mut running = 0usize;
    offsets.push(0);
    for &c in counts {
        running += c;
        offsets.push(running);
    }
    offsets
}
