//! Core error types for wordgraph-core.
//!
//! Uses `thiserror` for structured, matchable error variants covering the
//! failure modes of the in-memory graph model: bad input and references to
//! entities that do not exist.

use crate::id::{EdgeId, NodeId};
use thiserror::Error;

/// Core errors produced by the wordgraph-core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A node label was empty after trimming.
    #[error("label must not be empty")]
    EmptyLabel,

    /// An edge endpoint references a node that is not in the graph.
    #[error("edge endpoint references missing node: NodeId({id})", id = node.0)]
    DanglingEndpoint { node: NodeId },

    /// A node id was not found in the graph.
    #[error("node not found: NodeId({id})", id = id.0)]
    NodeNotFound { id: NodeId },

    /// An edge id was not found in the graph.
    #[error("edge not found: EdgeId({id})", id = id.0)]
    EdgeNotFound { id: EdgeId },

    /// Every id in a space has been handed out.
    #[error("{space} id space exhausted")]
    IdSpaceExhausted { space: &'static str },

    /// An edge survived in the view while one of its endpoints did not.
    #[error("graph inconsistency: {reason}")]
    GraphInconsistency { reason: String },
}
