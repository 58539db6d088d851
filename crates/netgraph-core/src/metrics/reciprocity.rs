//! Reciprocity and degree correlation over the undirected (reciprocal)
//! degree.
//!
//! Both metrics read the [`Vertex::undirected_degree`] annotation kept up to
//! date by the graph store. [`reciprocity_by_scan`] recomputes the degree
//! from the neighbor sets instead, for graphs whose bookkeeping was bypassed
//! with [`Graph::reverse_edge`].

use petgraph::stable_graph::NodeIndex;

use crate::graph::{Graph, Vertex};

/// Reciprocity = Σ undirected degree / edges.
///
/// Each reciprocal pair contributes 2 (one per endpoint), matching the two
/// arcs it consists of. Returns 0.0 for a graph without edges.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn reciprocity(graph: &Graph) -> f64 {
    let edges = graph.edge_count();
    if edges == 0 {
        return 0.0;
    }
    let total: usize = graph.vertices().map(Vertex::undirected_degree).sum();
    total as f64 / edges as f64
}

/// Undirected degree of `label` counted directly from the adjacency:
/// out-neighbors that have an arc back. `None` if the vertex is unknown.
///
/// O(out-degree) per call.
#[must_use]
pub fn undirected_degree_by_scan(graph: &Graph, label: &str) -> Option<usize> {
    graph.index_of(label).map(|idx| scan_degree(graph, idx))
}

/// [`reciprocity`] computed from [`undirected_degree_by_scan`] instead of the
/// cached annotation. O(V · average degree).
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn reciprocity_by_scan(graph: &Graph) -> f64 {
    let edges = graph.edge_count();
    if edges == 0 {
        return 0.0;
    }
    let total: usize = graph
        .inner()
        .node_indices()
        .map(|idx| scan_degree(graph, idx))
        .sum();
    total as f64 / edges as f64
}

fn scan_degree(graph: &Graph, idx: NodeIndex) -> usize {
    let g = graph.inner();
    graph
        .successors(idx)
        .filter(|&n| n != idx && g.contains_edge(n, idx))
        .count()
}

/// Degree correlation (assortativity) over the undirected degree `d`.
///
/// With `s1 = Σd`, `s2 = Σd²`, `s3 = Σd³` over vertices and
/// `se = 2 · Σ d(u)·d(v)` over reciprocal pairs `(u, v)`:
///
/// ```text
/// r = (s1·se − s2²) / (s1·s3 − s2²)
/// ```
///
/// Returns `f64::NAN` when the denominator is zero, which covers empty
/// graphs, graphs without reciprocal pairs, and graphs where every vertex
/// has the same undirected degree.
#[must_use]
#[allow(clippy::cast_precision_loss, clippy::float_cmp)]
pub fn degree_correlation(graph: &Graph) -> f64 {
    let (mut s1, mut s2, mut s3) = (0.0_f64, 0.0_f64, 0.0_f64);
    for v in graph.vertices() {
        let d = v.undirected_degree() as f64;
        s1 += d;
        s2 += d * d;
        s3 += d * d * d;
    }

    let se = 2.0
        * graph
            .undirected_edges()
            .map(|(u, v)| u.undirected_degree() as f64 * v.undirected_degree() as f64)
            .sum::<f64>();

    let denominator = s1.mul_add(s3, -(s2 * s2));
    if denominator == 0.0 {
        return f64::NAN;
    }
    s1.mul_add(se, -(s2 * s2)) / denominator
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

    fn both_ways<'a>(pairs: &[(&'a str, &'a str)]) -> Vec<(&'a str, &'a str)> {
        pairs.iter().flat_map(|&(a, b)| [(a, b), (b, a)]).collect()
    }

    #[test]
    fn reciprocity_empty_graph_is_zero() {
        let g = make_graph(&[], &[]);
        assert!((reciprocity(&g) - 0.0).abs() < f64::EPSILON);
        assert!((reciprocity_by_scan(&g) - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn reciprocity_without_pairs_is_zero() {
        let g = make_graph(&["A", "B", "C"], &[("A", "B"), ("B", "C"), ("C", "A")]);
        assert!((reciprocity(&g) - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn reciprocity_fully_reciprocal() {
        let g = make_graph(&["A", "B", "C"], &both_ways(&[("A", "B"), ("B", "C")]));
        assert!((reciprocity(&g) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn reciprocity_half_reciprocal() {
        // A⇄B plus A→C, C→B: 2 of 4 arcs reciprocated.
        let g = make_graph(
            &["A", "B", "C"],
            &[("A", "B"), ("B", "A"), ("A", "C"), ("C", "B")],
        );
        assert!((reciprocity(&g) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn scan_matches_cached_degree() {
        let g = make_graph(
            &["A", "B", "C", "D"],
            &[("A", "B"), ("B", "A"), ("B", "C"), ("C", "B"), ("C", "D"), ("A", "A")],
        );
        for v in g.vertices() {
            assert_eq!(
                undirected_degree_by_scan(&g, v.label()),
                Some(v.undirected_degree()),
                "vertex {v}"
            );
        }
        assert!((reciprocity(&g) - reciprocity_by_scan(&g)).abs() < 1e-12);
        assert_eq!(undirected_degree_by_scan(&g, "Z"), None);
    }

    #[test]
    fn scan_sees_reversed_edges() {
        let mut g = make_graph(&["A", "B"], &[("A", "B"), ("B", "A")]);
        g.reverse_edge("A", "B");
        // Cached bookkeeping still reports the pair; the scan does not.
        assert!(reciprocity(&g) > 1.0);
        assert!((reciprocity_by_scan(&g) - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn degree_correlation_path_is_disassortative() {
        // A⇄B⇄C: degrees 1, 2, 1
        // s1=4, s2=6, s3=10, se=2*(2+2)=8 → (32-36)/(40-36) = -1
        let g = make_graph(&["A", "B", "C"], &both_ways(&[("A", "B"), ("B", "C")]));
        assert!((degree_correlation(&g) - -1.0).abs() < 1e-12);
    }

    #[test]
    fn degree_correlation_mixed() {
        // Triangle A,B,C plus pendant D on A, all reciprocal.
        // degrees: A=3, B=2, C=2, D=1
        // s1=8, s2=18, s3=44
        // pairs: AB=6, BC=4, CA=6, AD=3 → se = 2*19 = 38
        // r = (8*38 - 324) / (8*44 - 324) = -20/28
        let g = make_graph(
            &["A", "B", "C", "D"],
            &both_ways(&[("A", "B"), ("B", "C"), ("C", "A"), ("A", "D")]),
        );
        assert!((degree_correlation(&g) - (-20.0 / 28.0)).abs() < 1e-12);
    }

    #[test]
    fn degree_correlation_uniform_degree_is_nan() {
        let g = make_graph(
            &["A", "B", "C"],
            &both_ways(&[("A", "B"), ("B", "C"), ("C", "A")]),
        );
        assert!(degree_correlation(&g).is_nan());
    }

    #[test]
    fn degree_correlation_empty_is_nan() {
        assert!(degree_correlation(&Graph::new()).is_nan());
    }
}
