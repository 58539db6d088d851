//! Analysis settings loaded from TOML.
//!
//! # Resolution
//!
//! Precedence (highest wins):
//! 1. An explicit path (`--config`); it must exist.
//! 2. `netgraph.toml` in the working directory.
//! 3. `<config dir>/netgraph/config.toml` (e.g. `~/.config` on Linux).
//! 4. Built-in defaults.
//!
//! ```toml
//! [metrics]
//! recompute_undirected_degree = false
//! geodesic = true
//!
//! [scc]
//! list_members = true
//! min_listed_size = 2
//!
//! [output]
//! precision = 4
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

pub const PROJECT_CONFIG_FILE: &str = "netgraph.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    #[serde(default)]
    pub metrics: MetricsConfig,
    #[serde(default)]
    pub scc: SccConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricsConfig {
    /// Compute reciprocity from the neighbor sets instead of the cached
    /// undirected degree.
    #[serde(default)]
    pub recompute_undirected_degree: bool,
    /// Include geodesic distance stats (one BFS per vertex).
    #[serde(default = "default_true")]
    pub geodesic: bool,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            recompute_undirected_degree: false,
            geodesic: default_true(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SccConfig {
    #[serde(default = "default_true")]
    pub list_members: bool,
    /// Components smaller than this are counted but not listed.
    #[serde(default = "default_min_listed_size")]
    pub min_listed_size: usize,
}

impl Default for SccConfig {
    fn default() -> Self {
        Self {
            list_members: default_true(),
            min_listed_size: default_min_listed_size(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Decimal places for floating point values in text output.
    #[serde(default = "default_precision")]
    pub precision: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            precision: default_precision(),
        }
    }
}

/// Parse a config file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not valid TOML for
/// [`AnalysisConfig`].
pub fn load_config_file(path: &Path) -> Result<AnalysisConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    toml::from_str::<AnalysisConfig>(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))
}

/// Location of the per-user config file, if the platform has a config dir.
#[must_use]
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("netgraph/config.toml"))
}

/// Resolve the effective config (see the module docs for precedence).
///
/// # Errors
///
/// Returns an error if the selected file cannot be read or parsed, or if
/// `explicit` names a file that does not exist.
pub fn resolve_config(explicit: Option<&Path>, project_root: &Path) -> Result<AnalysisConfig> {
    resolve_with_user_path(explicit, project_root, user_config_path().as_deref())
}

fn resolve_with_user_path(
    explicit: Option<&Path>,
    project_root: &Path,
    user_path: Option<&Path>,
) -> Result<AnalysisConfig> {
    if let Some(path) = explicit {
        debug!(path = %path.display(), "using explicit config");
        return load_config_file(path);
    }

    let project = project_root.join(PROJECT_CONFIG_FILE);
    if project.exists() {
        debug!(path = %project.display(), "using project config");
        return load_config_file(&project);
    }

    if let Some(user) = user_path.filter(|p| p.exists()) {
        debug!(path = %user.display(), "using user config");
        return load_config_file(user);
    }

    Ok(AnalysisConfig::default())
}

const fn default_true() -> bool {
    true
}

const fn default_min_listed_size() -> usize {
    1
}

const fn default_precision() -> usize {
    3
}
