//! Adapter error types.
//!
//! [`GraphError`] is what every adapter operation returns. It folds core
//! errors into the caller-facing categories (bad input, missing target,
//! storage failure) and carries storage errors through unchanged.

use thiserror::Error;

use wordgraph_core::id::{EdgeId, NodeId};
use wordgraph_core::CoreError;
use wordgraph_storage::StorageError;

/// Errors produced by [`GraphStoreAdapter`](crate::GraphStoreAdapter)
/// operations.
#[derive(Debug, Error)]
pub enum GraphError {
    /// The input was rejected before anything was written.
    #[error("validation failed: {reason}")]
    Validation { reason: String },

    /// The targeted node does not exist.
    #[error("node not found: {id}")]
    NodeNotFound { id: NodeId },

    /// The targeted edge does not exist.
    #[error("edge not found: {id}")]
    EdgeNotFound { id: EdgeId },

    /// The durable store failed.
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// Ids ran out or the in-memory view broke an invariant.
    #[error("internal error: {reason}")]
    Internal { reason: String },
}

impl GraphError {
    pub fn is_validation(&self) -> bool {
        matches!(self, GraphError::Validation { .. })
    }

    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            GraphError::NodeNotFound { .. } | GraphError::EdgeNotFound { .. }
        )
    }

    pub fn is_storage(&self) -> bool {
        matches!(self, GraphError::Storage(_))
    }
}

impl From<CoreError> for GraphError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::EmptyLabel | CoreError::DanglingEndpoint { .. } => GraphError::Validation {
                reason: err.to_string(),
            },
            CoreError::NodeNotFound { id } => GraphError::NodeNotFound { id },
            CoreError::EdgeNotFound { id } => GraphError::EdgeNotFound { id },
            CoreError::IdSpaceExhausted { .. } | CoreError::GraphInconsistency { .. } => {
                GraphError::Internal {
                    reason: err.to_string(),
                }
            }
        }
    }
}
