//! Graph construction from a JSON network description.
//!
//! # Format
//!
//! ```json
//! {
//!   "vertices": ["one", "two", "three"],
//!   "arcs": [
//!     { "start": "one", "end": "two", "data": "three" },
//!     { "start": "two", "end": "three" }
//!   ]
//! }
//! ```
//!
//! Vertices are inserted first, then arcs in file order. Arcs naming a
//! vertex that is not declared are skipped with a warning, the same policy
//! [`Graph::add_edge`] applies.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use crate::error::NetgraphError;
use crate::graph::store::Graph;

/// One arc of a [`NetworkDescription`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArcSpec {
    pub start: String,
    pub end: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
}

/// A vertex list plus an arc list, as produced by an external parser.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkDescription {
    #[serde(default)]
    pub vertices: Vec<String>,
    #[serde(default)]
    pub arcs: Vec<ArcSpec>,
}

impl NetworkDescription {
    /// Parse a description from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`NetgraphError::Json`] for malformed JSON and
    /// [`NetgraphError::DuplicateVertices`] if a label is declared twice.
    pub fn from_json_str(text: &str) -> Result<Self, NetgraphError> {
        let description: Self = serde_json::from_str(text)?;
        description.validate()?;
        Ok(description)
    }

    /// Read and parse a description file.
    ///
    /// # Errors
    ///
    /// Returns [`NetgraphError::Io`] if the file cannot be read, otherwise
    /// the errors of [`NetworkDescription::from_json_str`].
    #[instrument]
    pub fn load(path: &Path) -> Result<Self, NetgraphError> {
        let text = std::fs::read_to_string(path).map_err(|source| NetgraphError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let description = Self::from_json_str(&text)?;
        debug!(
            vertices = description.vertices.len(),
            arcs = description.arcs.len(),
            "loaded network description"
        );
        Ok(description)
    }

    /// Build a [`Graph`] by inserting every vertex, then every arc.
    #[must_use]
    pub fn into_graph(&self) -> Graph {
        let mut graph = Graph::new();
        for label in &self.vertices {
            graph.add_vertex(label);
        }

        let mut skipped = 0usize;
        for arc in &self.arcs {
            if !graph.contains_vertex(&arc.start) || !graph.contains_vertex(&arc.end) {
                warn!(start = %arc.start, end = %arc.end, "arc references undeclared vertex");
                skipped += 1;
                continue;
            }
            graph.add_edge(&arc.start, &arc.end, arc.data.clone());
        }

        debug!(
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            skipped,
            "built graph"
        );
        graph
    }

    fn validate(&self) -> Result<(), NetgraphError> {
        let mut seen = HashSet::with_capacity(self.vertices.len());
        let duplicates: Vec<&String> = self
            .vertices
            .iter()
            .filter(|label| !seen.insert(label.as_str()))
            .collect();

        match duplicates.first() {
            Some(first) => Err(NetgraphError::DuplicateVertices {
                count: duplicates.len(),
                first: (*first).clone(),
            }),
            None => Ok(()),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
