//! Durable entity storage for wordgraph.
//!
//! Provides the [`EntityStore`] trait defining the storage contract every
//! backend implements, plus the [`InMemoryStore`] and [`SqliteStore`] as
//! first-class backends.
//!
//! # Architecture
//!
//! A store holds two independent collections, `nodes` and `edges`, each a
//! flat map from integer id to record. Every method is its own unit of work.
//! The store knows nothing about referential integrity between the two
//! collections; that belongs to the adapter layer above it.
//!
//! # Modules
//!
//! - [`error`]: StorageError enum with all failure modes
//! - [`types`]: Collection names
//! - [`traits`]: EntityStore trait definition
//! - [`memory`]: InMemoryStore implementation
//! - [`schema`]: SQL schema and migration setup
//! - [`sqlite`]: SqliteStore implementation

pub mod error;
pub mod memory;
pub mod schema;
pub mod sqlite;
pub mod traits;
pub mod types;

// Re-export key types for ergonomic use.
pub use error::StorageError;
pub use memory::InMemoryStore;
pub use sqlite::SqliteStore;
pub use traits::EntityStore;
pub use types::Collection;
