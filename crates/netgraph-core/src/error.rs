use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reading network descriptions from disk.
///
/// Graph mutation, metrics and SCC decomposition are infallible; only the
/// loading boundary produces these.
#[derive(Debug, Error)]
pub enum NetgraphError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid network description: {0}")]
    Json(#[from] serde_json::Error),

    #[error("network description has {count} duplicate vertex label(s), first: {first}")]
    DuplicateVertices { count: usize, first: String },
}
