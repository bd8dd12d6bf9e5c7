//! Named styling presets offered on the command line.
//!
//! Each preset overwrites only the style fields it is about, so a size and a
//! color can be combined freely on top of the default look or an existing
//! node's style.

use clap::ValueEnum;

use wordgraph_core::style::{ColorPair, NodeColor, NodeStyle, Shape};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SizePreset {
    Small,
    Medium,
    Large,
}

impl SizePreset {
    /// Font size and margin for the preset.
    fn metrics(self) -> (u32, u32) {
        match self {
            SizePreset::Small => (14, 6),
            SizePreset::Medium => (20, 10),
            SizePreset::Large => (28, 14),
        }
    }

    pub fn apply(self, style: &mut NodeStyle) {
        let (font, margin) = self.metrics();
        style.font.size = font;
        style.margin = wordgraph_core::Margin::uniform(margin);
        if style.size.is_some() {
            style.size = Some(font + margin);
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorPreset {
    Blue,
    Orange,
    Green,
    Red,
    Gray,
}

impl ColorPreset {
    // border, background, highlight border, highlight background, font
    fn palette(self) -> [&'static str; 5] {
        match self {
            ColorPreset::Blue => ["#b5d7ffff", "#ffffffff", "#45a5ffff", "#aed5ffff", "#000000"],
            ColorPreset::Orange => ["#f18136ff", "#f7e0d3ff", "#ec3535ff", "#f8ada7ff", "#2c0000ff"],
            ColorPreset::Green => ["#5cb85cff", "#e3f4e3ff", "#2e8b57ff", "#b8e6c1ff", "#0b2e0bff"],
            ColorPreset::Red => ["#d9534fff", "#f9dcdbff", "#a94442ff", "#f2b8b5ff", "#3b0000ff"],
            ColorPreset::Gray => ["#9e9e9eff", "#f0f0f0ff", "#616161ff", "#d6d6d6ff", "#212121ff"],
        }
    }

    pub fn apply(self, style: &mut NodeStyle) {
        let [border, background, hl_border, hl_background, font] = self.palette();
        style.color = NodeColor {
            border: border.to_string(),
            background: background.to_string(),
            highlight: ColorPair {
                border: hl_border.to_string(),
                background: hl_background.to_string(),
            },
        };
        style.font.color = font.to_string();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ShapePreset {
    Circle,
    Box,
    Ellipse,
    Diamond,
    Text,
}

impl ShapePreset {
    pub fn apply(self, style: &mut NodeStyle) {
        style.shape = match self {
            ShapePreset::Circle => Shape::Circle,
            ShapePreset::Box => Shape::Box,
            ShapePreset::Ellipse => Shape::Ellipse,
            ShapePreset::Diamond => Shape::Diamond,
            ShapePreset::Text => Shape::Text,
        };
    }
}

/// The presets chosen for one command. Unset fields leave the style alone.
#[derive(Debug, Clone, Copy, Default)]
pub struct StyleChoice {
    pub size: Option<SizePreset>,
    pub color: Option<ColorPreset>,
    pub shape: Option<ShapePreset>,
}

impl StyleChoice {
    pub fn is_empty(&self) -> bool {
        self.size.is_none() && self.color.is_none() && self.shape.is_none()
    }

    pub fn apply_to(&self, mut style: NodeStyle) -> NodeStyle {
        if let Some(shape) = self.shape {
            shape.apply(&mut style);
        }
        if let Some(size) = self.size {
            size.apply(&mut style);
        }
        if let Some(color) = self.color {
            color.apply(&mut style);
        }
        style
    }
}
