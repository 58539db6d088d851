//! Known-topology regression tests for the graph store, metrics and SCC
//! engine.
//!
//! Each test uses a hand-crafted graph with known properties. Expected
//! values are computed by hand and hardcoded, so any algorithm change that
//! shifts them is caught.

use netgraph_core::graph::Graph;
use netgraph_core::metrics::{
    DegreeStats, clustering_coefficient, degree_correlation, density, geodesic_stats,
    in_degree_stats, out_degree_stats, reciprocity, reciprocity_by_scan,
};
use netgraph_core::scc::{strongly_connected_components, transpose};

// ---------------------------------------------------------------------------
// Helper: build Graph from edge list
// ---------------------------------------------------------------------------

fn build_graph(edges: &[(&str, &str)]) -> Graph {
    let all_ids: std::collections::BTreeSet<&str> =
        edges.iter().flat_map(|(a, b)| [*a, *b]).collect();
    let nodes: Vec<&str> = all_ids.into_iter().collect();
    build_graph_with_isolated(&nodes, edges)
}

fn build_graph_with_isolated(nodes: &[&str], edges: &[(&str, &str)]) -> Graph {
    let mut g = Graph::new();
    for id in nodes {
        g.add_vertex(id);
    }
    for (a, b) in edges {
        g.add_edge(a, b, None);
    }
    g
}

fn sorted_groups(g: &Graph) -> Vec<Vec<String>> {
    let mut groups: Vec<Vec<String>> = strongly_connected_components(g)
        .components()
        .iter()
        .map(|c| c.members.clone())
        .collect();
    groups.sort();
    groups
}

// ===========================================================================
// Topology 1: Three vertices, one arc
//
//   A → B      C
//
// Properties:
//   - density = 1 / (3 * 2) = 1/6
//   - no reciprocal pairs: reciprocity 0, clustering 0
//   - 3 singleton SCCs
// ===========================================================================

#[test]
fn single_arc_density() {
    let g = build_graph_with_isolated(&["A", "B", "C"], &[("A", "B")]);
    assert!((density(&g) - 1.0 / 6.0).abs() < 1e-12);
}

#[test]
fn single_arc_reciprocity_and_clustering_are_zero() {
    let g = build_graph_with_isolated(&["A", "B", "C"], &[("A", "B")]);
    assert!(reciprocity(&g).abs() < f64::EPSILON);
    assert!(clustering_coefficient(&g).abs() < f64::EPSILON);
    assert!(degree_correlation(&g).is_nan());
}

#[test]
fn single_arc_scc() {
    let g = build_graph_with_isolated(&["A", "B", "C"], &[("A", "B")]);
    let result = strongly_connected_components(&g);
    assert_eq!(result.count(), 3);
    assert!((result.largest_fraction() - 1.0 / 3.0).abs() < 1e-12);
}

// ===========================================================================
// Topology 2: Transpose example
//
//   one → two (payload "three") → three → one
// ===========================================================================

#[test]
fn transpose_example() {
    let mut g = Graph::new();
    g.add_vertex("one");
    g.add_vertex("two");
    g.add_vertex("three");
    g.add_edge("one", "two", Some("three".to_string()));
    g.add_edge("two", "three", None);
    g.add_edge("three", "one", None);

    let t = transpose(&g);
    let arc = t.arc("two", "one").expect("transposed arc two → one");
    assert_eq!(arc.end().label(), "one");
    assert_eq!(arc.data(), Some("three"));

    // The original graph is untouched.
    assert!(g.contains_edge("one", "two"));
    assert!(!g.contains_edge("two", "one"));
}

// ===========================================================================
// Topology 3: Mixed network
//
//   A ⇄ B ⇄ C ⇄ A   (reciprocal triangle)
//   C → D → E → D   (D ⇄ E via two arcs)
//   F               (isolated)
//
// Arcs: AB BA BC CB CA AC CD DE ED = 9
// Reciprocal pairs: AB, BC, CA, DE = 4
// Undirected degree: A=2 B=2 C=2 D=1 E=1 F=0
// ===========================================================================

fn mixed() -> Graph {
    build_graph_with_isolated(
        &["A", "B", "C", "D", "E", "F"],
        &[
            ("A", "B"),
            ("B", "A"),
            ("B", "C"),
            ("C", "B"),
            ("C", "A"),
            ("A", "C"),
            ("C", "D"),
            ("D", "E"),
            ("E", "D"),
        ],
    )
}

#[test]
fn mixed_counts() {
    let g = mixed();
    assert_eq!(g.vertex_count(), 6);
    assert_eq!(g.edge_count(), 9);
    assert_eq!(g.undirected_edge_count(), 4);
    assert!((density(&g) - 9.0 / 30.0).abs() < 1e-12);
}

#[test]
fn mixed_degree_stats() {
    let g = mixed();
    assert_eq!(out_degree_stats(&g), Some(DegreeStats { min: 0, max: 3 }));
    assert_eq!(in_degree_stats(&g), Some(DegreeStats { min: 0, max: 2 }));
}

#[test]
fn mixed_reciprocity() {
    // Σ undirected degree = 8, arcs = 9
    let g = mixed();
    assert!((reciprocity(&g) - 8.0 / 9.0).abs() < 1e-12);
    assert!((reciprocity_by_scan(&g) - 8.0 / 9.0).abs() < 1e-12);
}

#[test]
fn mixed_degree_correlation() {
    // s1 = 8, s2 = 4+4+4+1+1 = 14, s3 = 8+8+8+1+1 = 26
    // se = 2 * (4 + 4 + 4 + 1) = 26
    // r = (8*26 - 196) / (8*26 - 196) = 1
    let g = mixed();
    assert!((degree_correlation(&g) - 1.0).abs() < 1e-12);
}

#[test]
fn mixed_clustering() {
    // Triangle corners each see one closed pair → 3 / 3 = 1 triad.
    // C's out-neighbors are {A, B, D}: only the A/B pair is closed.
    // paths = 2 * (1 + 1 + 1 + 0 + 0 + 0) = 6
    let g = mixed();
    assert!((clustering_coefficient(&g) - 1.0 / 6.0).abs() < 1e-12);
}

#[test]
fn mixed_scc() {
    let g = mixed();
    assert_eq!(
        sorted_groups(&g),
        vec![
            vec!["A".to_string(), "B".to_string(), "C".to_string()],
            vec!["D".to_string(), "E".to_string()],
            vec!["F".to_string()],
        ]
    );
    let result = strongly_connected_components(&g);
    assert!((result.largest_fraction() - 0.5).abs() < 1e-12);
}

#[test]
fn mixed_geodesic() {
    let g = mixed();
    let stats = geodesic_stats(&g).expect("reachable pairs");
    // From C: A1 B1 D1 E2; from A: B1 C1 D2 E3; from B: A1 C1 D2 E3;
    // from D: E1; from E: D1 → 14 pairs, total 21, diameter 3.
    assert_eq!(stats.reachable_pairs, 14);
    assert_eq!(stats.diameter, 3);
    assert!((stats.mean - 21.0 / 14.0).abs() < 1e-12);
}

// ===========================================================================
// Mutation invariants
// ===========================================================================

#[test]
fn delete_vertex_removes_exactly_incident_edges() {
    let mut g = mixed();
    // C: out C→B, C→A, C→D; in B→C, A→C → 5 incident arcs.
    let before = g.edge_count();
    assert_eq!(g.delete_vertex("C"), 5);
    assert_eq!(g.edge_count(), before - 5);
    assert_eq!(g.undirected_edge_count(), 2);
    assert_eq!(g.vertex("A").map(|v| v.undirected_degree()), Some(1));
}

#[test]
fn duplicate_edges_are_rejected() {
    let mut g = build_graph(&[("A", "B")]);
    assert!(!g.add_edge("A", "B", None));
    assert_eq!(g.edge_count(), 1);
    assert!((density(&g) - 0.5).abs() < 1e-12);
}

#[test]
fn metrics_do_not_mutate() {
    let g = mixed();
    let snapshot = format!("{g:?}");
    let _ = reciprocity(&g);
    let _ = clustering_coefficient(&g);
    let _ = strongly_connected_components(&g);
    assert_eq!(format!("{g:?}"), snapshot);
}

#[test]
fn reverse_then_re_add_keeps_reciprocity_at_one() {
    let mut g = build_graph(&[("A", "B"), ("B", "A")]);
    g.reverse_edge("A", "B");
    g.add_edge("A", "B", None);
    assert_eq!(g.undirected_edge_count(), 1);
    assert!((reciprocity(&g) - 1.0).abs() < 1e-12);
    assert!((reciprocity_by_scan(&g) - 1.0).abs() < 1e-12);
}
