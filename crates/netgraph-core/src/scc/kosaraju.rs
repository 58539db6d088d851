//! Two-pass strongly connected component decomposition.
//!
//! Both passes use explicit stacks, so deep graphs cannot overflow the call
//! stack. Traversal state lives in per-run arrays indexed by vertex index;
//! vertices themselves are never annotated.

#![allow(clippy::module_name_repetitions)]

use fixedbitset::FixedBitSet;
use petgraph::stable_graph::NodeIndex;
use petgraph::visit::NodeIndexable;
use serde::Serialize;
use tracing::{debug, instrument};

use crate::graph::Graph;
use crate::scc::transpose::transpose;

// ---------------------------------------------------------------------------
// Result types
// ---------------------------------------------------------------------------

/// One strongly connected component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Component {
    /// Vertex labels in this component (sorted for deterministic output).
    pub members: Vec<String>,
}

impl Component {
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Always `false` for components produced by the decomposition.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    #[must_use]
    pub fn contains(&self, label: &str) -> bool {
        self.members
            .binary_search_by(|m| m.as_str().cmp(label))
            .is_ok()
    }

    /// Return `true` if this component contains more than one vertex.
    #[must_use]
    pub fn is_cycle(&self) -> bool {
        self.members.len() > 1
    }
}

/// The components of a graph, in the order the second pass found them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SccResult {
    components: Vec<Component>,
    vertex_count: usize,
}

impl SccResult {
    #[must_use]
    pub fn components(&self) -> &[Component] {
        &self.components
    }

    /// Total number of components.
    #[must_use]
    pub fn count(&self) -> usize {
        self.components.len()
    }

    /// The component with the most members (the first one on ties).
    #[must_use]
    pub fn largest(&self) -> Option<&Component> {
        self.components
            .iter()
            .rev()
            .max_by_key(|c| c.len())
    }

    /// Fraction of all vertices that sit in the largest component.
    ///
    /// Returns 0.0 for an empty graph.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn largest_fraction(&self) -> f64 {
        if self.vertex_count == 0 {
            return 0.0;
        }
        self.largest().map_or(0, Component::len) as f64 / self.vertex_count as f64
    }

    /// Position of the component containing `label`.
    #[must_use]
    pub fn component_of(&self, label: &str) -> Option<usize> {
        self.components.iter().position(|c| c.contains(label))
    }

    /// Number of vertices the decomposition covered.
    #[must_use]
    pub const fn vertex_count(&self) -> usize {
        self.vertex_count
    }
}

// ---------------------------------------------------------------------------
// Algorithm
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum VisitState {
    Unvisited,
    Discovered,
    Finished,
}

/// Decompose `graph` into strongly connected components.
///
/// The original graph is only read; the transpose is a private scratch copy.
#[must_use]
#[instrument(skip(graph), fields(vertices = graph.vertex_count(), edges = graph.edge_count()))]
pub fn strongly_connected_components(graph: &Graph) -> SccResult {
    let order = finish_order(graph);
    let transposed = transpose(graph);
    let components = assign_components(graph, &transposed, &order);

    debug!(count = components.len(), "strongly connected components");

    SccResult {
        components,
        vertex_count: graph.vertex_count(),
    }
}

/// First pass: vertices in the order the traversal backtracks out of them.
fn finish_order(graph: &Graph) -> Vec<NodeIndex> {
    let g = graph.inner();
    let mut state = vec![VisitState::Unvisited; g.node_bound()];
    let mut order = Vec::with_capacity(g.node_count());

    for root in g.node_indices() {
        if state[root.index()] != VisitState::Unvisited {
            continue;
        }
        state[root.index()] = VisitState::Discovered;
        let mut stack = vec![(root, graph.successors(root))];

        while let Some((node, successors)) = stack.last_mut() {
            let node = *node;
            match successors.next() {
                Some(next) if state[next.index()] == VisitState::Unvisited => {
                    state[next.index()] = VisitState::Discovered;
                    stack.push((next, graph.successors(next)));
                }
                Some(_) => {}
                None => {
                    state[node.index()] = VisitState::Finished;
                    order.push(node);
                    stack.pop();
                }
            }
        }
    }

    debug_assert!(state.iter().all(|s| *s != VisitState::Discovered));
    order
}

/// Second pass: traverse the transpose in decreasing finish order.
fn assign_components(
    graph: &Graph,
    transposed: &Graph,
    order: &[NodeIndex],
) -> Vec<Component> {
    let g = graph.inner();
    let t = transposed.inner();
    let mut assigned = FixedBitSet::with_capacity(t.node_bound());
    let mut components = Vec::new();
    let mut stack = Vec::new();

    for &idx in order.iter().rev() {
        let Some(root) = g
            .node_weight(idx)
            .and_then(|v| transposed.index_of(v.label()))
        else {
            continue;
        };
        if assigned.put(root.index()) {
            continue;
        }

        let mut members = Vec::new();
        stack.push(root);
        while let Some(node) = stack.pop() {
            if let Some(v) = t.node_weight(node) {
                members.push(v.label().to_string());
            }
            for next in transposed.successors(node) {
                if !assigned.put(next.index()) {
                    stack.push(next);
                }
            }
        }

        members.sort_unstable();
        components.push(Component { members });
    }

    components
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
