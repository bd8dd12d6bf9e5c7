//! The [`EntityStore`] trait defining the durable storage contract.
//!
//! Two-layer API design:
//! - **Required primitives** form the trait foundation. Each call is one unit
//!   of work against one collection (`clear_all` spans both and is still a
//!   single unit).
//! - **Provided bulk methods** (`delete_nodes`, `delete_edges`,
//!   `delete_batch`) are built on the primitives. Their default bodies loop,
//!   so a failure part way leaves the earlier deletes applied. Backends that
//!   can do better override them with a single transaction.
//!
//! All backends (InMemoryStore, SqliteStore, etc.) implement this trait,
//! ensuring they are fully swappable without changing the adapter.

use wordgraph_core::edge::Edge;
use wordgraph_core::id::{EdgeId, NodeId};
use wordgraph_core::node::Node;

use crate::error::StorageError;

/// The storage contract for node and edge collections.
///
/// The trait is synchronous: every call has finished (or failed) by the
/// time it returns, so a caller never observes a write that is still
/// pending.
pub trait EntityStore {
    // -------------------------------------------------------------------
    // Writes
    // -------------------------------------------------------------------

    /// Inserts a node, or replaces the stored node with the same id.
    fn put_node(&mut self, node: &Node) -> Result<(), StorageError>;

    /// Inserts an edge, or replaces the stored edge with the same id.
    fn put_edge(&mut self, edge: &Edge) -> Result<(), StorageError>;

    /// Removes a node. Removing an absent id succeeds.
    fn delete_node(&mut self, id: NodeId) -> Result<(), StorageError>;

    /// Removes an edge. Removing an absent id succeeds.
    fn delete_edge(&mut self, id: EdgeId) -> Result<(), StorageError>;

    /// Empties both collections. Either both end up empty or neither
    /// changes.
    fn clear_all(&mut self) -> Result<(), StorageError>;

    // -------------------------------------------------------------------
    // Reads
    // -------------------------------------------------------------------

    /// Every stored node, in no particular order.
    fn get_all_nodes(&self) -> Result<Vec<Node>, StorageError>;

    /// Every stored edge, in no particular order.
    fn get_all_edges(&self) -> Result<Vec<Edge>, StorageError>;

    // -------------------------------------------------------------------
    // Bulk deletes
    // -------------------------------------------------------------------

    /// Removes several nodes.
    fn delete_nodes(&mut self, ids: &[NodeId]) -> Result<(), StorageError> {
        for &id in ids {
            self.delete_node(id)?;
        }
        Ok(())
    }

    /// Removes several edges.
    fn delete_edges(&mut self, ids: &[EdgeId]) -> Result<(), StorageError> {
        for &id in ids {
            self.delete_edge(id)?;
        }
        Ok(())
    }

    /// Removes `edges`, then `nodes`.
    ///
    /// This is how a node deletion and its cascaded edge deletions reach the
    /// store. The default is not atomic: if the node step fails, the edges
    /// are already gone.
    fn delete_batch(&mut self, edges: &[EdgeId], nodes: &[NodeId]) -> Result<(), StorageError> {
        self.delete_edges(edges)?;
        self.delete_nodes(nodes)
    }
}

impl<S: EntityStore + ?Sized> EntityStore for Box<S> {
    fn put_node(&mut self, node: &Node) -> Result<(), StorageError> {
        (**self).put_node(node)
    }

    fn put_edge(&mut self, edge: &Edge) -> Result<(), StorageError> {
        (**self).put_edge(edge)
    }

    fn delete_node(&mut self, id: NodeId) -> Result<(), StorageError> {
        (**self).delete_node(id)
    }

    fn delete_edge(&mut self, id: EdgeId) -> Result<(), StorageError> {
        (**self).delete_edge(id)
    }

    fn clear_all(&mut self) -> Result<(), StorageError> {
        (**self).clear_all()
    }

    fn get_all_nodes(&self) -> Result<Vec<Node>, StorageError> {
        (**self).get_all_nodes()
    }

    fn get_all_edges(&self) -> Result<Vec<Edge>, StorageError> {
        (**self).get_all_edges()
    }

    fn delete_nodes(&mut self, ids: &[NodeId]) -> Result<(), StorageError> {
        (**self).delete_nodes(ids)
    }

    fn delete_edges(&mut self, ids: &[EdgeId]) -> Result<(), StorageError> {
        (**self).delete_edges(ids)
    }

    fn delete_batch(&mut self, edges: &[EdgeId], nodes: &[NodeId]) -> Result<(), StorageError> {
        (**self).delete_batch(edges, nodes)
    }
}
