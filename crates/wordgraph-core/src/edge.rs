//! Directed, optionally labeled relations between two nodes.
//!
//! Endpoints are plain [`NodeId`]s. Whether they refer to live nodes is the
//! graph's business ([`WordGraph`](crate::WordGraph)), not the record's.
//! Self-loops and parallel edges are ordinary edges.

use serde::{Deserialize, Serialize};

use crate::id::{EdgeId, NodeId};
use crate::style::EdgeStyle;

/// An edge record, exactly as persisted and as handed to the renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub id: EdgeId,
    pub from: NodeId,
    pub to: NodeId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(flatten)]
    pub style: EdgeStyle,
}

impl Edge {
    /// Builds an edge. A blank label is stored as no label.
    pub fn new(id: EdgeId, from: NodeId, to: NodeId, label: Option<&str>, style: EdgeStyle) -> Self {
        Edge {
            id,
            from,
            to,
            label: normalize_edge_label(label),
            style,
        }
    }

    /// Returns `true` if either endpoint is `node`.
    pub fn touches(&self, node: NodeId) -> bool {
        self.from == node || self.to == node
    }

    pub fn is_self_loop(&self) -> bool {
        self.from == self.to
    }

    /// Returns a copy re-pointed and relabeled by `update`.
    pub fn merged(&self, update: &EdgeUpdate) -> Edge {
        Edge {
            id: self.id,
            from: update.from,
            to: update.to,
            label: normalize_edge_label(update.label.as_deref()),
            style: update.style.clone().unwrap_or_else(|| self.style.clone()),
        }
    }
}

/// Replacement endpoints and label for an existing edge.
///
/// Endpoints and label are always replaced (a `None` label clears it); the
/// style is only replaced when given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeUpdate {
    pub from: NodeId,
    pub to: NodeId,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub style: Option<EdgeStyle>,
}

fn normalize_edge_label(label: Option<&str>) -> Option<String> {
    label
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
}
