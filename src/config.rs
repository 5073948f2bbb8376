use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// File looked up in the scanned directory when no `--config` is given.
pub const CONFIG_FILE_NAME: &str = "repoviz.toml";

/// Top-level repoviz configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RepovizConfig {
    #[serde(default)]
    pub scan: ScanConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Directory scanning settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScanConfig {
    /// Case-insensitive substrings of relative paths to skip.
    #[serde(default = "default_exclude_patterns")]
    pub exclude: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OutputConfig {
    /// Default snapshot path for `analyze`.
    #[serde(default = "default_snapshot_path")]
    pub snapshot: String,
}

pub fn default_exclude_patterns() -> Vec<String> {
    ["node_modules", ".git", "dist", "build", ".next", "coverage"]
        .iter()
        .map(|pattern| pattern.to_string())
        .collect()
}

fn default_snapshot_path() -> String {
    "repoviz-snapshot.json".to_string()
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            exclude: default_exclude_patterns(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            snapshot: default_snapshot_path(),
        }
    }
}

impl RepovizConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    /// Load config from a TOML file. A missing or malformed file is an error.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_toml_str(&contents)
            .with_context(|| format!("invalid config {}", path.display()))
    }

    /// Explicit path if given, else `repoviz.toml` under `project_root` if present,
    /// else defaults.
    pub fn discover(explicit: Option<&Path>, project_root: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        if let Some(root) = project_root {
            let candidate = root.join(CONFIG_FILE_NAME);
            if candidate.is_file() {
                return Self::load(&candidate);
            }
        }
        Ok(Self::default())
    }
}
