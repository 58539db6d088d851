#![forbid(unsafe_code)]
//! netgraph-core library.
//!
//! In-memory directed network store plus read-only structural analytics:
//! density, degree statistics, reciprocity, degree correlation, clustering
//! coefficient, geodesic distance and strongly connected components.
//!
//! # Conventions
//!
//! - **Errors**: graph, metric and SCC operations never fail. Missing
//!   entities are no-ops or `None`; degenerate arithmetic returns a
//!   documented sentinel. Loading files uses [`error::NetgraphError`] and
//!   `anyhow::Result` for configuration.
//! - **Logging**: Use `tracing` macros (`info!`, `warn!`, `error!`, `debug!`, `trace!`).
//!
//! ```rust,ignore
//! use netgraph_core::graph::Graph;
//! use netgraph_core::{metrics, scc};
//!
//! let mut g = Graph::new();
//! for v in ["a", "b", "c"] {
//!     g.add_vertex(v);
//! }
//! g.add_edge("a", "b", None);
//! g.add_edge("b", "a", None);
//!
//! let density = metrics::density(&g);
//! let components = scc::strongly_connected_components(&g);
//! ```

pub mod config;
pub mod error;
pub mod graph;
pub mod metrics;
pub mod report;
pub mod scc;

pub use error::NetgraphError;
pub use graph::{Arc, Graph, NetworkDescription, Vertex};
pub use scc::{Component, SccResult};
