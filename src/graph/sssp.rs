use crate::error::GraphError;
use crate::graph::types::Graph3D;

/// One vertex's result from a `dijkstra_paths` run.
///
/// `prev_index < 0` means the vertex is unreachable from the query's
/// `start` (or is `start` itself in the degenerate single-vertex case,
/// where `prev_index == start`).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SsspResult {
    pub shortest_distance: f32,
    pub prev_index: i64,
}

impl Graph3D {
    /// Label-correcting wavefront single-source shortest paths.
    ///
    /// Despite the name this is not a priority-queue Dijkstra: every open
    /// vertex relaxes its outgoing edges in one parallel phase,
    /// a segmented reduce-by-destination picks the best incoming update per
    /// vertex, and a commit phase decides which vertices re-open for the
    /// next wavefront. It matches Dijkstra's distances on non-negative
    /// weights; negative weights are unsupported (undefined behaviour).
    ///
    /// If `end` is `Some`, the search exits early once no open vertex can
    /// still improve on `dist[end]`.
    ///
    /// # Errors
    ///
    /// `GraphError::NotConstructed` if `construct_graph` has not run.
    pub fn dijkstra_paths(
        &self,
        start: usize,
        end: Option<usize>,
    ) -> Result<Vec<SsspResult>, GraphError> {
        if !self.constructed {
            return Err(GraphError::NotConstructed);
        }

        let n = self.number_nodes_raw();
        let mut dist = vec![f32::INFINITY; n];
        let mut prev = vec![-1i64; n];
        if n == 0 {
            return Ok(Vec::new());
        }

        dist[start] = 0.0;
        prev[start] = start as i64;
        let mut open = vec![false; n];
        open[start] = true;

        // `edge_table`: the row order of `lines` grouped by destination,
        // computed once since the edge list itself is stable across
        // iterations (the graph is already constructed before SSSP runs).
        let dst_order = rows_sorted_by_destination(&self.lines);

        loop {
            if !open.iter().any(|&o| o) {
                break;
            }
            if let Some(end) = end {
                let end_dist = dist[end];
                let can_improve = open
                    .iter()
                    .enumerate()
                    .any(|(v, &is_open)| is_open && dist[v] < end_dist);
                if !can_improve {
                    break;
                }
            }

            let res_tmp = relax_open_vertices(&self.lines, &self.edge_weights, &dist, &open);

            // "flag <- 0 on entry": every vertex processed this round closes
            // until the commit phase below reopens the ones that improved.
            for o in open.iter_mut() {
                *o = false;
            }

            let res_tmp_s = reduce_by_destination(&self.lines, &res_tmp, &dst_order, n);

            let mut any_open = false;
            for (v, candidate) in res_tmp_s.into_iter().enumerate() {
                if let Some((d, src)) = candidate {
                    if d < dist[v] {
                        dist[v] = d;
                        prev[v] = src as i64;
                        open[v] = true;
                        any_open = true;
                    }
                }
            }
            if !any_open {
                break;
            }
        }

        Ok((0..n)
            .map(|v| SsspResult {
                shortest_distance: dist[v],
                prev_index: prev[v],
            })
            .collect())
    }

    /// Walks `prev_index` from `end` back to `start`. Empty if `end` is
    /// unreachable from `start`.
    pub fn dijkstra_path(&self, start: usize, end: usize) -> Result<Vec<usize>, GraphError> {
        let results = self.dijkstra_paths(start, Some(end))?;

        if results.is_empty() || results[end].prev_index < 0 {
            return Ok(Vec::new());
        }

        let mut path = vec![end];
        let mut current = end;
        while current != start {
            let p = results[current].prev_index;
            if p < 0 {
                return Ok(Vec::new());
            }
            current = p as usize;
            path.push(current);
        }
        path.reverse();
        Ok(path)
    }

    fn number_nodes_raw(&self) -> usize {
        self.points.len()
    }
}

/// Per-edge relaxation phase: for every row whose source is currently open,
/// produce a candidate `(new_distance, source)` update. A single parallel
/// phase; readers (`dist`, `open`) and writers (`res_tmp`) never alias.
fn relax_open_vertices(
    lines: &[(usize, usize)],
    weights: &[f32],
    dist: &[f32],
    open: &[bool],
) -> Vec<Option<(f32, usize)>> {
    let compute = |j: usize| -> Option<(f32, usize)> {
        let (src, _dst) = lines[j];
        if open[src] {
            Some((dist[src] + weights[j], src))
        } else {
            None
        }
    };

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        (0..lines.len()).into_par_iter().map(compute).collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        (0..lines.len()).map(compute).collect()
    }
}

/// Segmented reduce-by-destination: picks the minimum-distance candidate
/// per destination vertex, iterating rows in destination-grouped order so
/// that on ties the first source encountered (the earliest row in the
/// original, src-sorted edge list) wins.
fn reduce_by_destination(
    lines: &[(usize, usize)],
    res_tmp: &[Option<(f32, usize)>],
    dst_order: &[usize],
    num_nodes: usize,
) -> Vec<Option<(f32, usize)>> {
    let mut res_tmp_s: Vec<Option<(f32, usize)>> = vec![None; num_nodes];
    for &row in dst_order {
        let Some((d, src)) = res_tmp[row] else {
            continue;
        };
        let dst = lines[row].1;
        match res_tmp_s[dst] {
            None => res_tmp_s[dst] = Some((d, src)),
            Some((current, _)) if d < current => res_tmp_s[dst] = Some((d, src)),
            _ => {}
        }
    }
    res_tmp_s
}

/// The edge table: a stable sort of row indices by destination vertex,
/// letting the reduce phase group `res_tmp` rows by destination without
/// re-sorting the edge list itself.
fn rows_sorted_by_destination(lines: &[(usize, usize)]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..lines.len()).collect();

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        order.par_sort_by_key(|&j| lines[j].1);
    }
    #[cfg(not(feature = "parallel"))]
    {
        order.sort_by_key(|&j| lines[j].1);
    }

    order
}
