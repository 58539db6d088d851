//! The graph store: vertex set, directed adjacency and reciprocal-edge
//! bookkeeping.
//!
//! # Edge Semantics
//!
//! An arc `A → B` is stored once; adding it a second time is rejected and
//! leaves the edge count unchanged. When `B → A` already exists at the time
//! `A → B` is added, the pair is recorded as one *undirected* edge and both
//! endpoints' [`Vertex::undirected_degree`] is incremented. Deleting either
//! half of a recorded pair (directly or through [`Graph::delete_vertex`])
//! unrecords it again.
//!
//! # Missing Entities
//!
//! Mutations naming an unregistered vertex or a missing arc are silent
//! no-ops (they return `false`/`0`); queries return `None`.

#![allow(clippy::module_name_repetitions)]

use std::collections::HashMap;

use petgraph::Direction;
use petgraph::stable_graph::{NodeIndex, StableDiGraph};
use petgraph::visit::EdgeRef;
use tracing::trace;

use crate::graph::vertex::{Arc, Vertex};

// ---------------------------------------------------------------------------
// Graph
// ---------------------------------------------------------------------------

/// In-memory directed network.
///
/// Backed by a petgraph [`StableDiGraph`] so that vertex indices stay valid
/// across deletions, plus a label → index map for lookups by identity.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    graph: StableDiGraph<Vertex, Option<String>>,
    node_map: HashMap<String, NodeIndex>,
    undirected: Vec<(NodeIndex, NodeIndex)>,
}

impl Graph {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // -----------------------------------------------------------------------
    // Mutation
    // -----------------------------------------------------------------------

    /// Register a vertex. Re-adding an existing label is a no-op.
    ///
    /// Returns `true` if the vertex was newly registered.
    pub fn add_vertex(&mut self, label: &str) -> bool {
        if self.node_map.contains_key(label) {
            return false;
        }
        let idx = self.graph.add_node(Vertex::new(label));
        self.node_map.insert(label.to_string(), idx);
        true
    }

    /// Add the arc `start → end` carrying an optional payload.
    ///
    /// Ignored when either endpoint is unregistered or the arc already
    /// exists. Returns `true` if the arc was inserted.
    pub fn add_edge(&mut self, start: &str, end: &str, data: Option<String>) -> bool {
        let (Some(s), Some(e)) = (self.index_of(start), self.index_of(end)) else {
            trace!(start, end, "ignoring arc with unregistered endpoint");
            return false;
        };

        if self.graph.contains_edge(s, e) {
            trace!(start, end, "ignoring duplicate arc");
            return false;
        }

        if s != e && self.graph.contains_edge(e, s) {
            self.record_pair(s, e);
        }

        self.graph.add_edge(s, e, data);
        true
    }

    /// Remove a vertex and every arc incident to it.
    ///
    /// Returns the number of arcs removed (its own out-arcs plus every other
    /// vertex's arc into it); `0` when the vertex is unknown.
    pub fn delete_vertex(&mut self, label: &str) -> usize {
        let Some(idx) = self.node_map.remove(label) else {
            return 0;
        };

        let mut partners = Vec::new();
        self.undirected.retain(|&(a, b)| {
            if a == idx {
                partners.push(b);
                false
            } else if b == idx {
                partners.push(a);
                false
            } else {
                true
            }
        });
        for partner in partners {
            if let Some(v) = self.graph.node_weight_mut(partner) {
                v.decrement_undirected_degree();
            }
        }

        let before = self.graph.edge_count();
        self.graph.remove_node(idx);
        before - self.graph.edge_count()
    }

    /// Remove the arc `start → end`. Returns `false` if it did not exist.
    pub fn delete_edge(&mut self, start: &str, end: &str) -> bool {
        let Some((s, e, edge)) = self.find(start, end) else {
            return false;
        };
        self.graph.remove_edge(edge);
        self.unrecord_pair(s, e);
        true
    }

    /// Replace `start → end` with `end → start`, keeping the payload.
    ///
    /// Reciprocal-edge bookkeeping is left untouched; build a
    /// full transpose with [`crate::scc::transpose`] when that matters. If
    /// `end → start` already exists the original arc is simply dropped.
    pub fn reverse_edge(&mut self, start: &str, end: &str) -> bool {
        let Some((s, e, edge)) = self.find(start, end) else {
            return false;
        };
        let data = self.graph.remove_edge(edge).flatten();
        if !self.graph.contains_edge(e, s) {
            self.graph.add_edge(e, s, data);
        }
        true
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.graph.node_count()
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Number of recorded reciprocal pairs.
    #[must_use]
    pub fn undirected_edge_count(&self) -> usize {
        self.undirected.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    #[must_use]
    pub fn vertex(&self, label: &str) -> Option<&Vertex> {
        self.index_of(label).and_then(|idx| self.graph.node_weight(idx))
    }

    #[must_use]
    pub fn contains_vertex(&self, label: &str) -> bool {
        self.node_map.contains_key(label)
    }

    #[must_use]
    pub fn contains_edge(&self, start: &str, end: &str) -> bool {
        self.find(start, end).is_some()
    }

    /// Number of arcs leaving `label`.
    #[must_use]
    pub fn out_degree(&self, label: &str) -> Option<usize> {
        self.index_of(label)
            .map(|idx| self.graph.neighbors_directed(idx, Direction::Outgoing).count())
    }

    /// Number of arcs entering `label`, read from the incoming adjacency
    /// list. O(in-degree).
    #[must_use]
    pub fn in_degree(&self, label: &str) -> Option<usize> {
        self.index_of(label)
            .map(|idx| self.graph.neighbors_directed(idx, Direction::Incoming).count())
    }

    /// All vertices, in index order.
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> + '_ {
        self.graph
            .node_indices()
            .filter_map(|idx| self.graph.node_weight(idx))
    }

    /// Out-neighbors of `label` in adjacency order, or `None` if unknown.
    #[must_use]
    pub fn out_neighbors(&self, label: &str) -> Option<Vec<&Vertex>> {
        let idx = self.index_of(label)?;
        Some(
            self.graph
                .neighbors_directed(idx, Direction::Outgoing)
                .filter_map(|n| self.graph.node_weight(n))
                .collect(),
        )
    }

    /// The arc `start → end`, if present.
    #[must_use]
    pub fn arc(&self, start: &str, end: &str) -> Option<Arc<'_>> {
        let (_, _, edge) = self.find(start, end)?;
        self.arc_view(edge)
    }

    /// Every arc in the graph.
    pub fn arcs(&self) -> impl Iterator<Item = Arc<'_>> + '_ {
        self.graph
            .edge_indices()
            .filter_map(|edge| self.arc_view(edge))
    }

    /// Recorded reciprocal pairs, each reported once.
    pub fn undirected_edges(&self) -> impl Iterator<Item = (&Vertex, &Vertex)> + '_ {
        self.undirected.iter().filter_map(|&(a, b)| {
            Some((self.graph.node_weight(a)?, self.graph.node_weight(b)?))
        })
    }

    // -----------------------------------------------------------------------
    // Crate-internal access for the analysis engines
    // -----------------------------------------------------------------------

    pub(crate) const fn inner(&self) -> &StableDiGraph<Vertex, Option<String>> {
        &self.graph
    }

    pub(crate) fn undirected_pairs(&self) -> &[(NodeIndex, NodeIndex)] {
        &self.undirected
    }

    pub(crate) fn index_of(&self, label: &str) -> Option<NodeIndex> {
        self.node_map.get(label).copied()
    }

    // -----------------------------------------------------------------------
    // Internal helpers
    // -----------------------------------------------------------------------

    fn find(
        &self,
        start: &str,
        end: &str,
    ) -> Option<(NodeIndex, NodeIndex, petgraph::stable_graph::EdgeIndex)> {
        let s = self.index_of(start)?;
        let e = self.index_of(end)?;
        let edge = self.graph.find_edge(s, e)?;
        Some((s, e, edge))
    }

    fn arc_view(&self, edge: petgraph::stable_graph::EdgeIndex) -> Option<Arc<'_>> {
        let (s, e) = self.graph.edge_endpoints(edge)?;
        let data = self.graph.edge_weight(edge)?.as_deref();
        Some(Arc::new(
            self.graph.node_weight(s)?,
            self.graph.node_weight(e)?,
            data,
        ))
    }

    fn record_pair(&mut self, a: NodeIndex, b: NodeIndex) {
        // A pair left behind by `reverse_edge` is already counted.
        if self
            .undirected
            .iter()
            .any(|&pair| pair == (a, b) || pair == (b, a))
        {
            return;
        }
        self.undirected.push((a, b));
        for idx in [a, b] {
            if let Some(v) = self.graph.node_weight_mut(idx) {
                v.increment_undirected_degree();
            }
        }
    }

    fn unrecord_pair(&mut self, a: NodeIndex, b: NodeIndex) {
        let Some(pos) = self
            .undirected
            .iter()
            .position(|&pair| pair == (a, b) || pair == (b, a))
        else {
            return;
        };
        self.undirected.remove(pos);
        for idx in [a, b] {
            if let Some(v) = self.graph.node_weight_mut(idx) {
                v.decrement_undirected_degree();
            }
        }
    }

    /// Iterate out-neighbor indices of `idx`.
    pub(crate) fn successors(&self, idx: NodeIndex) -> impl Iterator<Item = NodeIndex> + '_ {
        self.graph.edges(idx).map(|edge| edge.target())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
