//! Clustering coefficient: closed triads over paths of length two.

use crate::graph::Graph;

/// Global clustering coefficient.
///
/// For every vertex, its out-neighbors are enumerated in adjacency order and
/// each pair `(j, k)` with `j` before `k` is counted when the arc `k → j`
/// exists (self-loops are skipped). Every triangle is seen from each of its
/// three corners, so `triads = count / 3`. Paths of length two are
/// `Σ (undirected_degree / 2) · 2` over all vertices (integer halving per
/// vertex).
///
/// Returns `triads / paths`, or 0.0 when there are no such paths (which is
/// always the case without reciprocal pairs).
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn clustering_coefficient(graph: &Graph) -> f64 {
    let g = graph.inner();
    let mut closed = 0usize;
    let mut paths = 0usize;

    for idx in g.node_indices() {
        if let Some(v) = g.node_weight(idx) {
            paths += v.undirected_degree() / 2;
        }

        let neighbors: Vec<_> = graph.successors(idx).filter(|&n| n != idx).collect();
        for (i, &first) in neighbors.iter().enumerate() {
            closed += neighbors[i + 1..]
                .iter()
                .filter(|&&second| g.contains_edge(second, first))
                .count();
        }
    }

    let paths = paths * 2;
    if paths == 0 {
        return 0.0;
    }
    let triads = closed as f64 / 3.0;
    triads / paths as f64
}
