//! Error types for snapshot loading.

use thiserror::Error;

/// Errors that can occur while loading a registry snapshot from disk.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// Failed to read the snapshot file.
    #[error("failed to read snapshot file: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not valid JSON.
    #[error("invalid JSON snapshot: {0}")]
    Json(#[from] serde_json::Error),

    /// The file is not valid YAML.
    #[error("invalid YAML snapshot: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The file extension is not a recognized snapshot encoding.
    #[error("unsupported snapshot format '{0}' (expected .json, .yaml or .yml)")]
    UnsupportedFormat(String),
}
