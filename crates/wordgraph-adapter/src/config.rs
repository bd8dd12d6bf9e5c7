//! Adapter configuration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// How a node deletion and its cascaded edge deletions reach the store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CascadeMode {
    /// One [`delete_batch`](wordgraph_storage::EntityStore::delete_batch)
    /// call covering edges and nodes. Atomic on the bundled backends.
    #[default]
    Batched,
    /// Edges first, then nodes, as two separate units of work. A failure on
    /// the node step leaves the edges deleted.
    Sequential,
}

impl fmt::Display for CascadeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CascadeMode::Batched => f.write_str("batched"),
            CascadeMode::Sequential => f.write_str("sequential"),
        }
    }
}

impl FromStr for CascadeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "batched" => Ok(CascadeMode::Batched),
            "sequential" => Ok(CascadeMode::Sequential),
            _ => Err(format!(
                "invalid cascade mode '{}', expected batched/sequential",
                s
            )),
        }
    }
}

/// Tunables for [`GraphStoreAdapter`](crate::GraphStoreAdapter).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdapterConfig {
    #[serde(default)]
    pub cascade: CascadeMode,
}
