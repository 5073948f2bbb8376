//! JSON persistence for analysis snapshots and drift results.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::core::AnalysisResult;

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid snapshot JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Pretty JSON with two-space indentation.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, SnapshotError> {
    Ok(serde_json::to_string_pretty(value)?)
}

pub fn from_json<T: DeserializeOwned>(json: &str) -> Result<T, SnapshotError> {
    Ok(serde_json::from_str(json)?)
}

pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), SnapshotError> {
    let json = to_json(value)?;
    fs::write(path, json).map_err(|source| SnapshotError::Write {
        path: path.to_path_buf(),
        source,
    })
}

pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, SnapshotError> {
    let json = fs::read_to_string(path).map_err(|source| SnapshotError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    from_json(&json)
}

pub fn write_snapshot(path: &Path, snapshot: &AnalysisResult) -> Result<(), SnapshotError> {
    write_json(path, snapshot)
}

pub fn read_snapshot(path: &Path) -> Result<AnalysisResult, SnapshotError> {
    read_json(path)
}
