//! Structural metrics for a finished [`Graph`](crate::graph::Graph).
//!
//! # Overview
//!
//! Every metric is a pure function over `&Graph`. None of them mutate the
//! graph and none of them fail: degenerate inputs (no vertices, no edges,
//! no reciprocal pairs) yield the sentinel documented on each function.
//!
//! - **Basic** (`basic`): density, min/max in- and out-degree.
//! - **Reciprocity** (`reciprocity`): share of reciprocated arcs and degree
//!   correlation (assortativity) over the undirected degree.
//! - **Clustering** (`clustering`): closed triads over paths of length two.
//! - **Geodesic** (`geodesic`): mean shortest-path length and diameter.
//!
//! ```rust,ignore
//! use netgraph_core::metrics;
//!
//! let d = metrics::density(&g);
//! let r = metrics::reciprocity(&g);
//! let c = metrics::clustering_coefficient(&g);
//! let out = metrics::out_degree_stats(&g); // Option<DegreeStats>
//! ```

pub mod basic;
pub mod clustering;
pub mod geodesic;
pub mod reciprocity;

pub use basic::{DegreeStats, density, in_degree_stats, out_degree_stats};
pub use clustering::clustering_coefficient;
pub use geodesic::{GeodesicStats, geodesic_stats};
pub use reciprocity::{degree_correlation, reciprocity, reciprocity_by_scan, undirected_degree_by_scan};
