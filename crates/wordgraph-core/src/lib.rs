pub mod edge;
pub mod error;
pub mod graph;
pub mod id;
pub mod node;
pub mod style;

// Re-export commonly used types
pub use edge::{Edge, EdgeUpdate};
pub use error::CoreError;
pub use graph::{GraphSnapshot, WordGraph};
pub use id::{EdgeId, IdCounter, NodeId};
pub use node::{normalize_label, Node, NodeUpdate};
pub use style::{
    ArrowHead, ArrowKind, Arrows, ColorPair, EdgeStyle, Font, FontAlign, Margin, NodeColor, NodeStyle,
    Shape,
};
