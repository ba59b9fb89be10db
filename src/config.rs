//! Sources configuration loaded from a YAML file.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Configuration for one script-backed source.
///
/// Immutable after load; searches never write back to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Name used to select the source on the command line.
    pub name: String,
    /// Shell-script template. `{{query}}` is replaced with the query
    /// before execution.
    pub script: String,
    /// Route identifier attached to this source's results. Opaque —
    /// interpreted only by the caller's routing layer.
    pub responds_to: String,
    /// Working directory for the script. Inherits the current
    /// directory when absent.
    #[serde(default)]
    pub cwd: Option<PathBuf>,
}

/// The on-disk sources file: a list of configured sources.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourcesFile {
    /// All configured sources.
    pub sources: Vec<SourceConfig>,
}

impl SourcesFile {
    /// Loads and parses a sources file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, String> {
        let content = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read sources file {}: {e}", path.display()))?;
        serde_yaml::from_str(&content)
            .map_err(|e| format!("Failed to parse sources file {}: {e}", path.display()))
    }

    /// Selects a source by name, or the sole configured source when no
    /// name is given.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is unknown, or if no name is given
    /// and the file does not configure exactly one source.
    pub fn select(&self, name: Option<&str>) -> Result<&SourceConfig, String> {
        match name {
            Some(name) => self
                .sources
                .iter()
                .find(|source| source.name == name)
                .ok_or_else(|| format!("No source named `{name}` in sources file")),
            None => match self.sources.as_slice() {
                [only] => Ok(only),
                [] => Err("Sources file configures no sources".to_string()),
                _ => Err("Multiple sources configured; pass --source NAME".to_string()),
            },
        }
    }
}
