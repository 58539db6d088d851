//! Geodesic (shortest-path) distance statistics.
//!
//! Distances follow arc direction and count hops. Only ordered pairs
//! `(u, v)` with `u != v` and `v` reachable from `u` contribute.

use std::collections::VecDeque;

use fixedbitset::FixedBitSet;
use petgraph::visit::NodeIndexable;
use serde::Serialize;
use tracing::instrument;

use crate::graph::Graph;

/// Mean and maximum shortest-path length over reachable ordered pairs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeodesicStats {
    /// Mean hop count over all reachable ordered pairs.
    pub mean: f64,
    /// Longest shortest path (the directed diameter over reachable pairs).
    pub diameter: usize,
    /// Number of ordered pairs `(u, v)`, `u != v`, with `v` reachable.
    pub reachable_pairs: usize,
}

/// Run a breadth-first search from every vertex.
///
/// O(V · (V + E)). Returns `None` when no vertex can reach another.
#[must_use]
#[instrument(skip(graph), fields(vertices = graph.vertex_count()))]
#[allow(clippy::cast_precision_loss)]
pub fn geodesic_stats(graph: &Graph) -> Option<GeodesicStats> {
    let g = graph.inner();
    let mut visited = FixedBitSet::with_capacity(g.node_bound());
    let mut queue = VecDeque::new();

    let mut total = 0usize;
    let mut pairs = 0usize;
    let mut diameter = 0usize;

    for source in g.node_indices() {
        visited.clear();
        visited.insert(source.index());
        queue.push_back((source, 0usize));

        while let Some((node, dist)) = queue.pop_front() {
            if dist > 0 {
                total += dist;
                pairs += 1;
                diameter = diameter.max(dist);
            }
            for next in graph.successors(node) {
                if !visited.put(next.index()) {
                    queue.push_back((next, dist + 1));
                }
            }
        }
    }

    (pairs > 0).then(|| GeodesicStats {
        mean: total as f64 / pairs as f64,
        diameter,
        reachable_pairs: pairs,
    })
}
