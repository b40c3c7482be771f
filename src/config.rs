use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

/// Top-level pinpoint configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct PinpointConfig {
    /// Global RNG seed.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Dataset generation settings.
    #[serde(default)]
    pub dataset: DatasetToml,

    /// Prediction settings.
    #[serde(default)]
    pub knn: KnnToml,
}

impl PinpointConfig {
    /// Loads configuration from `path`.
    ///
    /// A missing file is not an error — the demo runs on its built-in
    /// defaults; a file that exists but fails to parse is.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config: {}", path.display()))?;
        toml::from_str(&text)
            .with_context(|| format!("failed to parse config: {}", path.display()))
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DatasetToml {
    #[serde(default = "default_min_points")]
    pub min_points: usize,
    #[serde(default = "default_max_points")]
    pub max_points: usize,
    #[serde(default = "default_value_max")]
    pub value_max: u32,
}

impl Default for DatasetToml {
    fn default() -> Self {
        Self {
            min_points: default_min_points(),
            max_points: default_max_points(),
            value_max: default_value_max(),
        }
    }
}

fn default_min_points() -> usize {
    9
}
fn default_max_points() -> usize {
    11
}
fn default_value_max() -> u32 {
    100
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct KnnToml {
    /// Neighbor count; derived from the dataset size when unset.
    #[serde(default)]
    pub k: Option<usize>,
}
