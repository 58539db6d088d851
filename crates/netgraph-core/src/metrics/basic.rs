//! Density and degree extremes.

use petgraph::Direction;
use serde::Serialize;

use crate::graph::Graph;

// ---------------------------------------------------------------------------
// Graph Density
// ---------------------------------------------------------------------------

/// Density = edges / (vertices * (vertices - 1)) for a directed graph.
///
/// Returns 0.0 for graphs with fewer than 2 vertices.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn density(graph: &Graph) -> f64 {
    let n = graph.vertex_count();
    if n < 2 {
        return 0.0;
    }
    let max_edges = (n * (n - 1)) as f64;
    graph.edge_count() as f64 / max_edges
}

// ---------------------------------------------------------------------------
// Degree Statistics
// ---------------------------------------------------------------------------

/// Minimum and maximum of a per-vertex degree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DegreeStats {
    pub min: usize,
    pub max: usize,
}

/// Min/max in-degree over all vertices, or `None` for an empty graph.
#[must_use]
pub fn in_degree_stats(graph: &Graph) -> Option<DegreeStats> {
    degree_stats(graph, Direction::Incoming)
}

/// Min/max out-degree over all vertices, or `None` for an empty graph.
#[must_use]
pub fn out_degree_stats(graph: &Graph) -> Option<DegreeStats> {
    degree_stats(graph, Direction::Outgoing)
}

fn degree_stats(graph: &Graph, direction: Direction) -> Option<DegreeStats> {
    let g = graph.inner();
    g.node_indices()
        .map(|idx| g.neighbors_directed(idx, direction).count())
        .fold(None, |acc, d| match acc {
            None => Some(DegreeStats { min: d, max: d }),
            Some(DegreeStats { min, max }) => Some(DegreeStats {
                min: min.min(d),
                max: max.max(d),
            }),
        })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn make_graph(nodes: &[&str], edges: &[(&str, &str)]) -> Graph {
        let mut g = Graph::new();
        for id in nodes {
            g.add_vertex(id);
        }
        for (a, b) in edges {
            g.add_edge(a, b, None);
        }
        g
    }

    #[test]
    fn density_empty() {
        let g = make_graph(&[], &[]);
        assert!((density(&g) - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn density_single_vertex() {
        let g = make_graph(&["A"], &[]);
        assert!((density(&g) - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn density_three_vertices_one_edge() {
        // 1 / (3 * 2) = 1/6
        let g = make_graph(&["A", "B", "C"], &[("A", "B")]);
        assert!((density(&g) - 1.0 / 6.0).abs() < 1e-12);
    }

    #[test]
    fn density_complete_directed_graph() {
        let g = make_graph(&["A", "B"], &[("A", "B"), ("B", "A")]);
        assert!((density(&g) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn degree_stats_empty_graph() {
        let g = make_graph(&[], &[]);
        assert_eq!(in_degree_stats(&g), None);
        assert_eq!(out_degree_stats(&g), None);
    }

    #[test]
    fn degree_stats_isolated_vertices() {
        let g = make_graph(&["A", "B"], &[]);
        assert_eq!(in_degree_stats(&g), Some(DegreeStats { min: 0, max: 0 }));
        assert_eq!(out_degree_stats(&g), Some(DegreeStats { min: 0, max: 0 }));
    }

    #[test]
    fn degree_stats_star() {
        // Hub: A→B, A→C, A→D
        let g = make_graph(&["A", "B", "C", "D"], &[("A", "B"), ("A", "C"), ("A", "D")]);
        assert_eq!(out_degree_stats(&g), Some(DegreeStats { min: 0, max: 3 }));
        assert_eq!(in_degree_stats(&g), Some(DegreeStats { min: 0, max: 1 }));
    }

    #[test]
    fn degree_stats_after_deletion() {
        let mut g = make_graph(&["A", "B", "C"], &[("A", "B"), ("C", "B")]);
        g.delete_vertex("C");
        assert_eq!(in_degree_stats(&g), Some(DegreeStats { min: 0, max: 1 }));
    }
}
