//! Graph vertices: one word or concept each.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::id::NodeId;
use crate::style::NodeStyle;

/// A node record, exactly as persisted and as handed to the renderer.
///
/// The style is flattened so the serialized form reads
/// `{ "id": 1, "label": "犬", "shape": "circle", ... }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    pub label: String,
    #[serde(flatten)]
    pub style: NodeStyle,
}

impl Node {
    /// Builds a node, trimming the label and rejecting it when nothing is
    /// left.
    pub fn new(id: NodeId, label: &str, style: NodeStyle) -> Result<Self, CoreError> {
        Ok(Node {
            id,
            label: normalize_label(label)?,
            style,
        })
    }

    /// Returns a copy with `update` laid over this record. The id never
    /// changes.
    pub fn merged(&self, update: &NodeUpdate) -> Result<Node, CoreError> {
        let label = match &update.label {
            Some(raw) => normalize_label(raw)?,
            None => self.label.clone(),
        };
        let style = update.style.clone().unwrap_or_else(|| self.style.clone());
        Ok(Node {
            id: self.id,
            label,
            style,
        })
    }
}

/// Partial replacement for a node. `None` fields keep their current value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NodeUpdate {
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub style: Option<NodeStyle>,
}

impl NodeUpdate {
    pub fn label(label: impl Into<String>) -> Self {
        NodeUpdate {
            label: Some(label.into()),
            style: None,
        }
    }

    pub fn style(style: NodeStyle) -> Self {
        NodeUpdate {
            label: None,
            style: Some(style),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.label.is_none() && self.style.is_none()
    }
}

/// Trims surrounding whitespace; an empty result is an error.
pub fn normalize_label(raw: &str) -> Result<String, CoreError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(CoreError::EmptyLabel);
    }
    Ok(trimmed.to_string())
}
