//! Storage-layer types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A store collection, or both of them for operations that span the two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Collection {
    Nodes,
    Edges,
    Both,
}

impl Collection {
    /// The collection's persisted name.
    pub fn name(self) -> &'static str {
        match self {
            Collection::Nodes => "nodes",
            Collection::Edges => "edges",
            Collection::Both => "nodes+edges",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
