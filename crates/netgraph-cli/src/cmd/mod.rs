pub mod analyze;
pub mod scc;

use std::path::Path;

use anyhow::{Context, Result};
use netgraph_core::graph::{Graph, NetworkDescription};

/// Load a network description file and build its graph.
pub(crate) fn load_graph(path: &Path) -> Result<Graph> {
    let description = NetworkDescription::load(path)
        .with_context(|| format!("Failed to load network from {}", path.display()))?;
    Ok(description.into_graph())
}
