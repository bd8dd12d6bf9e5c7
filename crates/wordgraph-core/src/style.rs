//! Visual attributes carried by nodes and edges.
//!
//! These are plain data. The core never interprets them beyond storing and
//! returning them; a renderer consumes them as-is. Field names serialize in
//! camelCase, matching the option names vis-network uses, so a serialized
//! [`Node`](crate::Node) or [`Edge`](crate::Edge) is a ready-made data-set
//! entry for that library.
//!
//! The `Default` impls give the standard diagram look.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Shared
// ---------------------------------------------------------------------------

/// Label font.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Font {
    pub size: u32,
    /// Hex color, `#rrggbb` or `#rrggbbaa`.
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub align: Option<FontAlign>,
}

/// Placement of an edge label relative to the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontAlign {
    Horizontal,
    Top,
    Middle,
    Bottom,
}

// ---------------------------------------------------------------------------
// Nodes
// ---------------------------------------------------------------------------

/// Node outline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    Circle,
    Box,
    Ellipse,
    Diamond,
    Dot,
    Square,
    Text,
}

/// Padding between a node's label and its outline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Margin {
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
    pub left: u32,
}

impl Margin {
    /// The same padding on all four sides.
    pub const fn uniform(px: u32) -> Self {
        Margin {
            top: px,
            right: px,
            bottom: px,
            left: px,
        }
    }
}

/// A border/background pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorPair {
    pub border: String,
    pub background: String,
}

/// Node colors in the normal and highlighted (selected) states.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeColor {
    pub border: String,
    pub background: String,
    pub highlight: ColorPair,
}

/// Everything about a node except its id and label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeStyle {
    pub shape: Shape,
    /// Only meaningful for shapes without an inner label (`dot`, `square`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
    pub font: Font,
    pub margin: Margin,
    pub border_width: u32,
    pub color: NodeColor,
}

impl Default for NodeStyle {
    fn default() -> Self {
        NodeStyle {
            shape: Shape::Circle,
            size: None,
            font: Font {
                size: 20,
                color: "#000000".to_string(),
                align: None,
            },
            margin: Margin::uniform(10),
            border_width: 2,
            color: NodeColor {
                border: "#b5d7ffff".to_string(),
                background: "#ffffffff".to_string(),
                highlight: ColorPair {
                    border: "#45a5ffff".to_string(),
                    background: "#aed5ffff".to_string(),
                },
            },
        }
    }
}

// ---------------------------------------------------------------------------
// Edges
// ---------------------------------------------------------------------------

/// Arrowhead glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArrowKind {
    Arrow,
    Bar,
    Circle,
    Triangle,
}

/// One arrowhead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArrowHead {
    pub enabled: bool,
    pub scale_factor: f64,
    #[serde(rename = "type")]
    pub kind: ArrowKind,
}

impl ArrowHead {
    pub fn arrow() -> Self {
        ArrowHead {
            enabled: true,
            scale_factor: 1.0,
            kind: ArrowKind::Arrow,
        }
    }
}

/// Arrowheads at either end of an edge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Arrows {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<ArrowHead>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<ArrowHead>,
}

/// Everything about an edge except its id, endpoints and label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeStyle {
    /// Resting spring length.
    pub length: u32,
    pub font: Font,
    pub arrows: Arrows,
}

impl Default for EdgeStyle {
    fn default() -> Self {
        EdgeStyle {
            length: 150,
            font: Font {
                size: 16,
                color: "#000000ff".to_string(),
                align: Some(FontAlign::Top),
            },
            arrows: Arrows {
                to: Some(ArrowHead::arrow()),
                from: None,
            },
        }
    }
}
