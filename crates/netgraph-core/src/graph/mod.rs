//! Network graph module.
//!
//! # Overview
//!
//! [`Graph`] owns the vertex set and the directed adjacency relation.
//! Producers build it by repeated [`Graph::add_vertex`] and
//! [`Graph::add_edge`] calls (or via [`NetworkDescription`]); the metrics and
//! SCC engines then read it without mutating it.
//!
//! ## Pipeline
//!
//! ```text
//! JSON network description
//!        ↓  load::NetworkDescription::load()
//! NetworkDescription
//!        ↓  NetworkDescription::into_graph()
//! Graph (vertices + arcs + reciprocal pairs)
//!        ├─ metrics::*            (density, reciprocity, clustering, …)
//!        └─ scc::strongly_connected_components()
//! ```

pub mod load;
pub mod store;
pub mod vertex;

pub use load::{ArcSpec, NetworkDescription};
pub use store::Graph;
pub use vertex::{Arc, Vertex};
