//! The graph store adapter: the one place where the in-memory word graph and
//! the durable entity store are changed, always together.
//!
//! [`GraphStoreAdapter`] wraps any [`EntityStore`](wordgraph_storage::EntityStore)
//! and a [`WordGraph`](wordgraph_core::WordGraph). Each mutating operation
//! validates against the in-memory view, writes to the store, and only then
//! applies the same change in memory. Node deletion cascades to every edge
//! touching the deleted nodes.

pub mod adapter;
pub mod config;
pub mod error;

pub use adapter::{DeleteReport, GraphStoreAdapter};
pub use config::{AdapterConfig, CascadeMode};
pub use error::GraphError;
