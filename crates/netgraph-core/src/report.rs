//! Serializable analysis summaries.
//!
//! [`NetworkReport`] gathers every metric for one graph; [`SccReport`]
//! summarizes a component decomposition. Both serialize with serde; NaN
//! values (an undefined degree correlation) become JSON `null`.

use serde::Serialize;
use tracing::instrument;

use crate::config::{MetricsConfig, SccConfig};
use crate::graph::Graph;
use crate::metrics::{self, DegreeStats, GeodesicStats};
use crate::scc::{Component, SccResult};

// ---------------------------------------------------------------------------
// NetworkReport
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NetworkReport {
    pub vertex_count: usize,
    pub edge_count: usize,
    pub undirected_edge_count: usize,
    pub density: f64,
    pub in_degree: Option<DegreeStats>,
    pub out_degree: Option<DegreeStats>,
    pub reciprocity: f64,
    /// NaN when undefined (see [`metrics::degree_correlation`]).
    pub degree_correlation: f64,
    pub clustering_coefficient: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geodesic: Option<GeodesicStats>,
}

impl NetworkReport {
    #[must_use]
    #[instrument(skip_all, fields(vertices = graph.vertex_count()))]
    pub fn from_graph(graph: &Graph, config: &MetricsConfig) -> Self {
        let reciprocity = if config.recompute_undirected_degree {
            metrics::reciprocity_by_scan(graph)
        } else {
            metrics::reciprocity(graph)
        };

        Self {
            vertex_count: graph.vertex_count(),
            edge_count: graph.edge_count(),
            undirected_edge_count: graph.undirected_edge_count(),
            density: metrics::density(graph),
            in_degree: metrics::in_degree_stats(graph),
            out_degree: metrics::out_degree_stats(graph),
            reciprocity,
            degree_correlation: metrics::degree_correlation(graph),
            clustering_coefficient: metrics::clustering_coefficient(graph),
            geodesic: config
                .geodesic
                .then(|| metrics::geodesic_stats(graph))
                .flatten(),
        }
    }
}

// ---------------------------------------------------------------------------
// SccReport
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SccReport {
    pub component_count: usize,
    pub largest_fraction: f64,
    /// Component sizes, largest first.
    pub sizes: Vec<usize>,
    /// Listed components, in discovery order (empty when listing is off).
    pub components: Vec<Component>,
}

impl SccReport {
    #[must_use]
    pub fn from_result(result: &SccResult, config: &SccConfig) -> Self {
        let mut sizes: Vec<usize> = result.components().iter().map(Component::len).collect();
        sizes.sort_unstable_by(|a, b| b.cmp(a));

        let components = if config.list_members {
            result
                .components()
                .iter()
                .filter(|c| c.len() >= config.min_listed_size)
                .cloned()
                .collect()
        } else {
            Vec::new()
        };

        Self {
            component_count: result.count(),
            largest_fraction: result.largest_fraction(),
            sizes,
            components,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
