//! Snapshot-backed registry source.
//!
//! A broker can dump its action registry to a file (`registry.json` or the
//! YAML equivalent); [`SnapshotRegistry`] loads such a dump and answers
//! [`Registry`] queries against it. The selection flags are applied here,
//! mirroring what a live broker does when it assembles an action list.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{ActionQuery, Registry, RegistryItem, SnapshotError};

/// On-disk shape of a registry dump.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistrySnapshot {
    /// Identity of the node that produced the dump.
    #[serde(rename = "nodeID")]
    pub node_id: String,
    #[serde(default)]
    pub actions: Vec<RegistryItem>,
}

/// A [`Registry`] answering queries from a loaded snapshot.
#[derive(Debug, Clone)]
pub struct SnapshotRegistry {
    snapshot: RegistrySnapshot,
}

impl SnapshotRegistry {
    pub fn new(snapshot: RegistrySnapshot) -> Self {
        Self { snapshot }
    }

    /// Load a snapshot from a `.json`, `.yaml` or `.yml` file.
    pub fn load(path: &Path) -> Result<Self, SnapshotError> {
        let ext = path
            .extension()
            .and_then(|s| s.to_str())
            .unwrap_or("")
            .to_ascii_lowercase();

        let snapshot: RegistrySnapshot = match ext.as_str() {
            "json" => serde_json::from_str(&fs::read_to_string(path)?)?,
            "yaml" | "yml" => serde_yaml::from_str(&fs::read_to_string(path)?)?,
            other => return Err(SnapshotError::UnsupportedFormat(other.to_string())),
        };

        debug!(
            path = %path.display(),
            actions = snapshot.actions.len(),
            "loaded registry snapshot"
        );
        Ok(Self::new(snapshot))
    }
}

impl Registry for SnapshotRegistry {
    fn node_id(&self) -> &str {
        &self.snapshot.node_id
    }

    fn action_list(&self, query: &ActionQuery) -> Vec<RegistryItem> {
        self.snapshot
            .actions
            .iter()
            .filter(|item| !query.only_local || item.has_local)
            .filter(|item| !query.only_available || item.available)
            // Internal broker actions live under the reserved `$` namespace.
            .filter(|item| !query.skip_internal || !item.name.starts_with('$'))
            .cloned()
            .map(|mut item| {
                if !query.with_endpoints {
                    item.endpoints = None;
                }
                item
            })
            .collect()
    }
}
