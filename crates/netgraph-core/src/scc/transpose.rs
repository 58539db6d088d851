//! Transpose graph construction.

use tracing::instrument;

use crate::graph::Graph;

/// Build the transpose of `graph`: same vertices, every arc `u → v`
/// replaced by `v → u` carrying the same payload.
///
/// The result is a freshly allocated graph. It is built through the regular
/// insertion calls, so its reciprocal-pair bookkeeping is consistent (a
/// pair stays a pair under reversal).
#[must_use]
#[instrument(skip(graph), fields(vertices = graph.vertex_count(), edges = graph.edge_count()))]
pub fn transpose(graph: &Graph) -> Graph {
    let mut transposed = Graph::new();
    for v in graph.vertices() {
        transposed.add_vertex(v.label());
    }
    for arc in graph.arcs() {
        transposed.add_edge(
            arc.end().label(),
            arc.start().label(),
            arc.data().map(str::to_string),
        );
    }
    transposed
}
