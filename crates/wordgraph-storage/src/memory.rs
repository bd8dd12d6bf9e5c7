//! In-memory implementation of [`EntityStore`].
//!
//! [`InMemoryStore`] is a first-class backend for tests and throwaway
//! sessions. It stores records in BTreeMaps with identical semantics to the
//! SQLite backend; bulk deletes apply all-or-nothing since nothing here can
//! fail part way.

use std::collections::BTreeMap;

use wordgraph_core::edge::Edge;
use wordgraph_core::id::{EdgeId, NodeId};
use wordgraph_core::node::Node;

use crate::error::StorageError;
use crate::traits::EntityStore;

/// In-memory implementation of [`EntityStore`].
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    nodes: BTreeMap<NodeId, Node>,
    edges: BTreeMap<EdgeId, Edge>,
}

impl InMemoryStore {
    /// Creates a new empty in-memory store.
    pub fn new() -> Self {
        InMemoryStore::default()
    }

    /// Creates a store pre-filled with records, replacing duplicates by id.
    pub fn with_records(nodes: Vec<Node>, edges: Vec<Edge>) -> Self {
        InMemoryStore {
            nodes: nodes.into_iter().map(|n| (n.id, n)).collect(),
            edges: edges.into_iter().map(|e| (e.id, e)).collect(),
        }
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn contains_node(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    pub fn contains_edge(&self, id: EdgeId) -> bool {
        self.edges.contains_key(&id)
    }
}

impl EntityStore for InMemoryStore {
    fn put_node(&mut self, node: &Node) -> Result<(), StorageError> {
        self.nodes.insert(node.id, node.clone());
        Ok(())
    }

    fn put_edge(&mut self, edge: &Edge) -> Result<(), StorageError> {
        self.edges.insert(edge.id, edge.clone());
        Ok(())
    }

    fn delete_node(&mut self, id: NodeId) -> Result<(), StorageError> {
        self.nodes.remove(&id);
        Ok(())
    }

    fn delete_edge(&mut self, id: EdgeId) -> Result<(), StorageError> {
        self.edges.remove(&id);
        Ok(())
    }

    fn clear_all(&mut self) -> Result<(), StorageError> {
        self.nodes.clear();
        self.edges.clear();
        Ok(())
    }

    fn get_all_nodes(&self) -> Result<Vec<Node>, StorageError> {
        Ok(self.nodes.values().cloned().collect())
    }

    fn get_all_edges(&self) -> Result<Vec<Edge>, StorageError> {
        Ok(self.edges.values().cloned().collect())
    }
}
