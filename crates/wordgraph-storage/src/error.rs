//! Storage error types for wordgraph-storage.
//!
//! [`StorageError`] covers the failure modes of the durable layer: the
//! medium being unusable, a read or write failing, and a stored record that
//! no longer decodes. Missing ids are not errors here; deletes of absent ids
//! succeed.

use std::fmt::Display;

use thiserror::Error;

use crate::types::Collection;

/// Errors produced by storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The store could not be opened or its schema could not be created.
    #[error("store unavailable: {reason}")]
    Unavailable { reason: String },

    /// Reading a collection failed.
    #[error("read from {collection} failed: {reason}")]
    ReadFailed {
        collection: Collection,
        reason: String,
    },

    /// Writing to a collection failed. Nothing from the failed call was
    /// applied.
    #[error("write to {collection} failed: {reason}")]
    WriteFailed {
        collection: Collection,
        reason: String,
    },

    /// JSON serialization or deserialization of a record failed.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl StorageError {
    pub fn unavailable(reason: impl Display) -> Self {
        StorageError::Unavailable {
            reason: reason.to_string(),
        }
    }

    pub fn read(collection: Collection, reason: impl Display) -> Self {
        StorageError::ReadFailed {
            collection,
            reason: reason.to_string(),
        }
    }

    pub fn write(collection: Collection, reason: impl Display) -> Self {
        StorageError::WriteFailed {
            collection,
            reason: reason.to_string(),
        }
    }
}
