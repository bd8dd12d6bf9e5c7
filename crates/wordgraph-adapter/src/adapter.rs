//! GraphStoreAdapter: the single coordinator between callers, the in-memory
//! graph, and the durable store.
//!
//! Every mutation follows the same order: validate against memory, persist,
//! then apply in memory. A failed write leaves memory untouched, so the view
//! never shows state the store did not accept.
//!
//! Node deletion cascades. With [`CascadeMode::Sequential`] the steps are
//! store-edges, memory-edges, store-nodes, memory-nodes; with
//! [`CascadeMode::Batched`] both store steps collapse into one
//! [`EntityStore::delete_batch`] call before memory is touched. If a delete
//! fails part way, the view is re-read from the store so both sides agree on
//! what is left.

use std::collections::BTreeSet;

use wordgraph_core::edge::{Edge, EdgeUpdate};
use wordgraph_core::graph::{GraphSnapshot, WordGraph};
use wordgraph_core::id::{EdgeId, NodeId};
use wordgraph_core::node::{Node, NodeUpdate};
use wordgraph_core::style::{EdgeStyle, NodeStyle};
use wordgraph_storage::{EntityStore, StorageError};

use crate::config::{AdapterConfig, CascadeMode};
use crate::error::GraphError;

/// Ids actually removed by a delete operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteReport {
    pub nodes: Vec<NodeId>,
    pub edges: Vec<EdgeId>,
}

impl DeleteReport {
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }
}

/// Owns the in-memory [`WordGraph`] and the store behind it.
///
/// The adapter assumes a single writer: callers serialize mutations, and
/// each call has finished persisting by the time it returns.
pub struct GraphStoreAdapter<S: EntityStore> {
    store: S,
    graph: WordGraph,
    config: AdapterConfig,
}

impl<S: EntityStore> GraphStoreAdapter<S> {
    /// Wraps `store` with an empty view. Call [`load`](Self::load) before
    /// mutating a store that may already hold data.
    pub fn new(store: S) -> Self {
        Self::with_config(store, AdapterConfig::default())
    }

    pub fn with_config(store: S, config: AdapterConfig) -> Self {
        GraphStoreAdapter {
            store,
            graph: WordGraph::new(),
            config,
        }
    }

    /// Wraps `store` and loads it.
    pub fn open(store: S, config: AdapterConfig) -> Result<Self, GraphError> {
        let mut adapter = Self::with_config(store, config);
        adapter.load()?;
        Ok(adapter)
    }

    pub fn config(&self) -> AdapterConfig {
        self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    // -----------------------------------------------------------------------
    // Session start
    // -----------------------------------------------------------------------

    /// Replaces the view with the store's contents and re-derives both id
    /// counters from the stored ids.
    ///
    /// Nothing in memory changes if either read fails. Stored edges whose
    /// endpoints are missing are kept out of the view and deleted from the
    /// store. If that delete fails the edges stay stored, but their endpoint
    /// ids are never handed out again.
    pub fn load(&mut self) -> Result<&WordGraph, GraphError> {
        let nodes = self.store.get_all_nodes()?;
        let edges = self.store.get_all_edges()?;

        let (graph, dangling) = WordGraph::from_records(nodes, edges);
        if !dangling.is_empty() {
            for edge in &dangling {
                tracing::warn!(
                    edge = %edge.id,
                    from = %edge.from,
                    to = %edge.to,
                    "stored edge references a missing node; purging it"
                );
            }
            let ids: Vec<EdgeId> = dangling.iter().map(|e| e.id).collect();
            if let Err(err) = self.store.delete_edges(&ids) {
                tracing::warn!(edges = ?ids, error = %err, "could not purge orphaned edges");
            }
        }

        self.graph = graph;
        tracing::info!(
            nodes = self.graph.node_count(),
            edges = self.graph.edge_count(),
            next_node = %self.graph.next_node_id(),
            next_edge = %self.graph.next_edge_id(),
            "graph loaded"
        );
        Ok(&self.graph)
    }

    // -----------------------------------------------------------------------
    // Read-only accessors
    // -----------------------------------------------------------------------

    pub fn graph(&self) -> &WordGraph {
        &self.graph
    }

    pub fn list_nodes(&self) -> Vec<&Node> {
        self.graph.nodes().collect()
    }

    pub fn list_edges(&self) -> Vec<&Edge> {
        self.graph.edges().collect()
    }

    pub fn get_node(&self, id: NodeId) -> Option<&Node> {
        self.graph.node(id)
    }

    pub fn get_edge(&self, id: EdgeId) -> Option<&Edge> {
        self.graph.edge(id)
    }

    pub fn edges_touching(&self, node: NodeId) -> Vec<&Edge> {
        self.graph.edges_touching(node).collect()
    }

    /// The edges [`delete_nodes`](Self::delete_nodes) would remove along
    /// with `ids`.
    pub fn cascade_preview<I>(&self, ids: I) -> Vec<&Edge>
    where
        I: IntoIterator<Item = NodeId>,
    {
        let doomed: BTreeSet<NodeId> = ids.into_iter().collect();
        self.graph
            .cascade_set(&doomed)
            .into_iter()
            .filter_map(|id| self.graph.edge(id))
            .collect()
    }

    pub fn snapshot(&self) -> GraphSnapshot {
        self.graph.snapshot()
    }

    // -----------------------------------------------------------------------
    // Mutations
    // -----------------------------------------------------------------------

    /// Creates a node with the next node id.
    ///
    /// The label is trimmed; an empty label is rejected before an id is
    /// allocated. If the store write fails the id stays consumed.
    pub fn add_node(&mut self, label: &str, style: NodeStyle) -> Result<Node, GraphError> {
        let label = wordgraph_core::normalize_label(label)?;
        let id = self.graph.allocate_node_id()?;
        let node = Node::new(id, &label, style)?;

        self.store.put_node(&node)?;
        self.graph.put_node(node.clone());

        tracing::debug!(node = %id, label = %node.label, "added node");
        Ok(node)
    }

    /// Creates an edge with the next edge id. Both endpoints must be live
    /// nodes; `from == to` is allowed.
    pub fn add_edge(
        &mut self,
        from: NodeId,
        to: NodeId,
        label: Option<&str>,
        style: EdgeStyle,
    ) -> Result<Edge, GraphError> {
        self.graph.check_endpoints(from, to)?;
        let id = self.graph.allocate_edge_id()?;
        let edge = Edge::new(id, from, to, label, style);

        self.store.put_edge(&edge)?;
        self.graph.put_edge(edge.clone())?;

        tracing::debug!(edge = %id, %from, %to, "added edge");
        Ok(edge)
    }

    /// Lays `update` over an existing node and persists the result.
    pub fn update_node(&mut self, id: NodeId, update: &NodeUpdate) -> Result<Node, GraphError> {
        let current = self
            .graph
            .node(id)
            .ok_or(GraphError::NodeNotFound { id })?;
        let merged = current.merged(update)?;

        self.store.put_node(&merged)?;
        self.graph.put_node(merged.clone());

        tracing::debug!(node = %id, "updated node");
        Ok(merged)
    }

    /// Re-points and relabels an existing edge and persists the result.
    pub fn update_edge(&mut self, id: EdgeId, update: &EdgeUpdate) -> Result<Edge, GraphError> {
        let current = self
            .graph
            .edge(id)
            .ok_or(GraphError::EdgeNotFound { id })?;
        self.graph.check_endpoints(update.from, update.to)?;
        let merged = current.merged(update);

        self.store.put_edge(&merged)?;
        self.graph.put_edge(merged.clone())?;

        tracing::debug!(edge = %id, from = %merged.from, to = %merged.to, "updated edge");
        Ok(merged)
    }

    /// Deletes nodes and every edge touching them.
    ///
    /// Ids that are not live are ignored, so repeating a call is harmless.
    /// On a storage failure the store may have applied part of the delete
    /// (see [`CascadeMode`]); the view is re-read so it shows exactly what
    /// the store kept.
    pub fn delete_nodes<I>(&mut self, ids: I) -> Result<DeleteReport, GraphError>
    where
        I: IntoIterator<Item = NodeId>,
    {
        let doomed: BTreeSet<NodeId> = ids
            .into_iter()
            .filter(|id| self.graph.contains_node(*id))
            .collect();
        if doomed.is_empty() {
            return Ok(DeleteReport::default());
        }
        let cascade = self.graph.cascade_set(&doomed);
        let nodes: Vec<NodeId> = doomed.into_iter().collect();

        let mut edges = Vec::new();
        let outcome = match self.config.cascade {
            CascadeMode::Batched => self.store.delete_batch(&cascade, &nodes),
            CascadeMode::Sequential => match self.store.delete_edges(&cascade) {
                Ok(()) => {
                    edges = self.graph.remove_edges(&cascade);
                    self.store.delete_nodes(&nodes)
                }
                Err(err) => Err(err),
            },
        };
        if let Err(err) = outcome {
            self.resync(&err);
            return Err(err.into());
        }

        edges.extend(self.graph.remove_edges(&cascade));
        let report = DeleteReport {
            nodes: self.graph.remove_nodes(&nodes),
            edges,
        };

        tracing::debug!(nodes = ?report.nodes, edges = ?report.edges, "deleted nodes");
        Ok(report)
    }

    /// Deletes edges. Ids that are not live are ignored.
    pub fn delete_edges<I>(&mut self, ids: I) -> Result<DeleteReport, GraphError>
    where
        I: IntoIterator<Item = EdgeId>,
    {
        let doomed: Vec<EdgeId> = ids
            .into_iter()
            .filter(|id| self.graph.contains_edge(*id))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        if doomed.is_empty() {
            return Ok(DeleteReport::default());
        }

        if let Err(err) = self.store.delete_edges(&doomed) {
            self.resync(&err);
            return Err(err.into());
        }
        let edges = self.graph.remove_edges(&doomed);

        tracing::debug!(edges = ?edges, "deleted edges");
        Ok(DeleteReport {
            nodes: Vec::new(),
            edges,
        })
    }

    /// Empties the store and the view and rewinds both id counters to 1.
    pub fn clear(&mut self) -> Result<(), GraphError> {
        self.store.clear_all()?;
        let (nodes, edges) = (self.graph.node_count(), self.graph.edge_count());
        self.graph.clear();

        tracing::info!(nodes, edges, "graph cleared");
        Ok(())
    }

    /// Re-reads the view from the store after a delete failed, since the
    /// store may have applied part of it. Counters keep their position.
    fn resync(&mut self, cause: &StorageError) {
        let records = self
            .store
            .get_all_nodes()
            .and_then(|nodes| Ok((nodes, self.store.get_all_edges()?)));
        match records {
            Ok((nodes, edges)) => {
                let (mut graph, _) = WordGraph::from_records(nodes, edges);
                graph.raise_counters(self.graph.next_node_id(), self.graph.next_edge_id());
                self.graph = graph;
                tracing::warn!(
                    error = %cause,
                    nodes = self.graph.node_count(),
                    edges = self.graph.edge_count(),
                    "delete failed; view re-read from the store"
                );
            }
            Err(err) => {
                tracing::warn!(
                    error = %cause,
                    reread = %err,
                    "delete failed and the store could not be re-read; view may be stale"
                );
            }
        }
    }
}
