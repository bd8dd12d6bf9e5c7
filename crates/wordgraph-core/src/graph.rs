//! WordGraph: the in-memory, render-ready view of the graph.
//!
//! [`WordGraph`] holds the live nodes and edges plus the two id counters.
//! It enforces the structural rules that do not need storage: ids are unique
//! per space, edges only point at live nodes, and counters never go
//! backwards.
//!
//! The mutators here do not persist anything. The adapter crate calls them
//! only after the durable store has accepted the same change.

use std::collections::BTreeSet;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::edge::Edge;
use crate::error::CoreError;
use crate::id::{EdgeId, IdCounter, NodeId};
use crate::node::Node;

/// The in-memory graph.
#[derive(Debug, Clone, Default)]
pub struct WordGraph {
    /// Live nodes in ascending id order.
    nodes: IndexMap<NodeId, Node>,
    /// Live edges in ascending id order.
    edges: IndexMap<EdgeId, Edge>,
    next_node_id: IdCounter,
    next_edge_id: IdCounter,
}

/// Plain serializable copy of the view, shaped like a renderer's data set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphSnapshot {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

impl WordGraph {
    /// An empty graph whose counters both start at 1.
    pub fn new() -> Self {
        WordGraph::default()
    }

    /// Rebuilds the view from stored records.
    ///
    /// Records are ordered by id. Counters resume after the highest stored id
    /// of each kind. Edges whose endpoints are not among `nodes` are left out
    /// of the view and returned separately; their ids still count towards
    /// the edge counter and their endpoints towards the node counter, so a
    /// later allocation cannot collide with them.
    pub fn from_records(mut nodes: Vec<Node>, mut edges: Vec<Edge>) -> (Self, Vec<Edge>) {
        nodes.sort_by_key(|n| n.id);
        edges.sort_by_key(|e| e.id);

        let next_edge_id = IdCounter::resume_after(edges.iter().map(|e| e.id.0));

        let nodes: IndexMap<NodeId, Node> = nodes.into_iter().map(|n| (n.id, n)).collect();
        let (live, dangling): (Vec<Edge>, Vec<Edge>) = edges
            .into_iter()
            .partition(|e| nodes.contains_key(&e.from) && nodes.contains_key(&e.to));

        // Missing endpoints count as used, so a new node never inherits an
        // orphaned edge still sitting in the store.
        let next_node_id = IdCounter::resume_after(
            nodes
                .keys()
                .map(|id| id.0)
                .chain(dangling.iter().flat_map(|e| [e.from.0, e.to.0])),
        );

        let graph = WordGraph {
            nodes,
            edges: live.into_iter().map(|e| (e.id, e)).collect(),
            next_node_id,
            next_edge_id,
        };
        (graph, dangling)
    }

    // -----------------------------------------------------------------------
    // Read-only accessors
    // -----------------------------------------------------------------------

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(&id)
    }

    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(&id)
    }

    pub fn contains_node(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    pub fn contains_edge(&self, id: EdgeId) -> bool {
        self.edges.contains_key(&id)
    }

    /// Nodes in ascending id order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> + '_ {
        self.nodes.values()
    }

    /// Edges in ascending id order.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> + '_ {
        self.edges.values()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }

    /// Every edge with `node` as either endpoint. A self-loop appears once.
    pub fn edges_touching(&self, node: NodeId) -> impl Iterator<Item = &Edge> + '_ {
        self.edges.values().filter(move |e| e.touches(node))
    }

    /// Number of edges touching `node`.
    pub fn degree(&self, node: NodeId) -> usize {
        self.edges_touching(node).count()
    }

    /// The edges that must go when `nodes` are deleted, in id order.
    pub fn cascade_set(&self, nodes: &BTreeSet<NodeId>) -> Vec<EdgeId> {
        self.edges
            .values()
            .filter(|e| nodes.contains(&e.from) || nodes.contains(&e.to))
            .map(|e| e.id)
            .collect()
    }

    /// The id the next node allocation will return.
    pub fn next_node_id(&self) -> NodeId {
        NodeId(self.next_node_id.peek())
    }

    /// The id the next edge allocation will return.
    pub fn next_edge_id(&self) -> EdgeId {
        EdgeId(self.next_edge_id.peek())
    }

    /// Checks that both endpoints are live nodes.
    pub fn check_endpoints(&self, from: NodeId, to: NodeId) -> Result<(), CoreError> {
        for node in [from, to] {
            if !self.contains_node(node) {
                return Err(CoreError::DanglingEndpoint { node });
            }
        }
        Ok(())
    }

    pub fn snapshot(&self) -> GraphSnapshot {
        GraphSnapshot {
            nodes: self.nodes.values().cloned().collect(),
            edges: self.edges.values().cloned().collect(),
        }
    }

    // -----------------------------------------------------------------------
    // Id allocation
    // -----------------------------------------------------------------------

    pub fn allocate_node_id(&mut self) -> Result<NodeId, CoreError> {
        self.next_node_id.allocate("node").map(NodeId)
    }

    pub fn allocate_edge_id(&mut self) -> Result<EdgeId, CoreError> {
        self.next_edge_id.allocate("edge").map(EdgeId)
    }

    // -----------------------------------------------------------------------
    // Mutators
    // -----------------------------------------------------------------------

    /// Inserts or replaces a node, keeping id order.
    pub fn put_node(&mut self, node: Node) {
        let id = node.id;
        let appends = self.nodes.last().map_or(true, |(last, _)| *last < id);
        if self.nodes.insert(id, node).is_none() && !appends {
            self.nodes.sort_keys();
        }
    }

    /// Inserts or replaces an edge, keeping id order.
    ///
    /// Fails without touching the graph if an endpoint is not live.
    pub fn put_edge(&mut self, edge: Edge) -> Result<(), CoreError> {
        self.check_endpoints(edge.from, edge.to)?;
        let id = edge.id;
        let appends = self.edges.last().map_or(true, |(last, _)| *last < id);
        if self.edges.insert(id, edge).is_none() && !appends {
            self.edges.sort_keys();
        }
        Ok(())
    }

    /// Removes the given edges. Returns the ids that were actually present.
    pub fn remove_edges(&mut self, ids: &[EdgeId]) -> Vec<EdgeId> {
        ids.iter()
            .filter(|id| self.edges.shift_remove(*id).is_some())
            .copied()
            .collect()
    }

    /// Removes the given nodes. Returns the ids that were actually present.
    ///
    /// Edges touching them must already be gone; the debug consistency
    /// check catches callers that forget.
    pub fn remove_nodes(&mut self, ids: &[NodeId]) -> Vec<NodeId> {
        let removed: Vec<NodeId> = ids
            .iter()
            .filter(|id| self.nodes.shift_remove(*id).is_some())
            .copied()
            .collect();

        #[cfg(debug_assertions)]
        self.assert_consistency();

        removed
    }

    /// Moves both counters up to at least the given ids. Used when the view
    /// is rebuilt mid-session so ids already handed out stay consumed.
    pub fn raise_counters(&mut self, node: NodeId, edge: EdgeId) {
        self.next_node_id.raise_to(node.0);
        self.next_edge_id.raise_to(edge.0);
    }

    /// Empties the graph and rewinds both counters to 1.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.edges.clear();
        self.next_node_id.reset();
        self.next_edge_id.reset();
    }

    // -----------------------------------------------------------------------
    // Consistency
    // -----------------------------------------------------------------------

    /// Verifies that every edge points at live nodes.
    pub fn validate(&self) -> Result<(), CoreError> {
        for edge in self.edges.values() {
            for end in [edge.from, edge.to] {
                if !self.nodes.contains_key(&end) {
                    return Err(CoreError::GraphInconsistency {
                        reason: format!("edge {} references missing node {}", edge.id, end),
                    });
                }
            }
        }
        Ok(())
    }

    #[cfg(debug_assertions)]
    fn assert_consistency(&self) {
        if let Err(err) = self.validate() {
            panic!("{err}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{EdgeStyle, NodeStyle};

    fn node(id: u32, label: &str) -> Node {
        Node::new(NodeId(id), label, NodeStyle::default()).unwrap()
    }

    fn edge(id: u32, from: u32, to: u32) -> Edge {
        Edge::new(EdgeId(id), NodeId(from), NodeId(to), None, EdgeStyle::default())
    }

    #[test]
    fn empty_graph_counters_start_at_one() {
        let graph = WordGraph::new();
        assert_eq!(graph.next_node_id(), NodeId(1));
        assert_eq!(graph.next_edge_id(), EdgeId(1));
        assert!(graph.is_empty());
    }

    #[test]
    fn from_records_sorts_and_resumes() {
        let (graph, dangling) = WordGraph::from_records(
            vec![node(5, "b"), node(2, "a")],
            vec![edge(3, 5, 2)],
        );
        assert!(dangling.is_empty());
        let ids: Vec<_> = graph.nodes().map(|n| n.id).collect();
        assert_eq!(ids, vec![NodeId(2), NodeId(5)]);
        assert_eq!(graph.next_node_id(), NodeId(6));
        assert_eq!(graph.next_edge_id(), EdgeId(4));
    }

    #[test]
    fn from_records_sets_aside_dangling_edges() {
        let (graph, dangling) = WordGraph::from_records(
            vec![node(1, "a")],
            vec![edge(1, 1, 1), edge(8, 1, 9)],
        );
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(dangling.len(), 1);
        assert_eq!(dangling[0].id, EdgeId(8));
        // The dangling id is still reserved.
        assert_eq!(graph.next_edge_id(), EdgeId(9));
        graph.validate().unwrap();
    }

    #[test]
    fn dangling_endpoints_reserve_node_ids() {
        let (graph, dangling) =
            WordGraph::from_records(vec![node(1, "a")], vec![edge(5, 1, 2), edge(6, 7, 1)]);
        assert_eq!(dangling.len(), 2);
        assert_eq!(graph.node_count(), 1);
        assert_eq!(graph.next_node_id(), NodeId(8));
    }

    #[test]
    fn raise_counters_never_rewinds() {
        let (mut graph, _) = WordGraph::from_records(vec![node(4, "a")], vec![]);
        graph.raise_counters(NodeId(2), EdgeId(9));
        assert_eq!(graph.next_node_id(), NodeId(5));
        assert_eq!(graph.next_edge_id(), EdgeId(9));
    }

    #[test]
    fn put_edge_rejects_missing_endpoint() {
        let mut graph = WordGraph::new();
        graph.put_node(node(1, "a"));
        let err = graph.put_edge(edge(1, 1, 2)).unwrap_err();
        assert!(matches!(err, CoreError::DanglingEndpoint { node: NodeId(2) }));
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn edges_touching_and_degree() {
        let mut graph = WordGraph::new();
        graph.put_node(node(1, "a"));
        graph.put_node(node(2, "b"));
        graph.put_node(node(3, "c"));
        graph.put_edge(edge(1, 1, 2)).unwrap();
        graph.put_edge(edge(2, 2, 3)).unwrap();
        graph.put_edge(edge(3, 2, 2)).unwrap();

        assert_eq!(graph.degree(NodeId(1)), 1);
        assert_eq!(graph.degree(NodeId(2)), 3);
        let touching: Vec<_> = graph.edges_touching(NodeId(3)).map(|e| e.id).collect();
        assert_eq!(touching, vec![EdgeId(2)]);
    }

    #[test]
    fn cascade_set_covers_both_directions() {
        let mut graph = WordGraph::new();
        for id in 1..=3 {
            graph.put_node(node(id, "n"));
        }
        graph.put_edge(edge(1, 1, 2)).unwrap();
        graph.put_edge(edge(2, 3, 1)).unwrap();
        graph.put_edge(edge(3, 2, 3)).unwrap();

        let doomed: BTreeSet<NodeId> = [NodeId(1)].into();
        assert_eq!(graph.cascade_set(&doomed), vec![EdgeId(1), EdgeId(2)]);
    }

    #[test]
    fn put_keeps_id_order() {
        let mut graph = WordGraph::new();
        graph.put_node(node(3, "c"));
        graph.put_node(node(1, "a"));
        graph.put_node(node(2, "b"));
        let ids: Vec<_> = graph.nodes().map(|n| n.id.0).collect();
        assert_eq!(ids, vec![1, 2, 3]);

        graph.put_node(node(9, "z"));
        graph.put_node(node(5, "m"));
        graph.put_node(node(2, "b2"));
        let ids: Vec<_> = graph.nodes().map(|n| n.id.0).collect();
        assert_eq!(ids, vec![1, 2, 3, 5, 9]);
        assert_eq!(graph.node(NodeId(2)).map(|n| n.label.as_str()), Some("b2"));
    }

    #[test]
    fn remove_reports_only_present_ids() {
        let mut graph = WordGraph::new();
        graph.put_node(node(1, "a"));
        let removed = graph.remove_nodes(&[NodeId(1), NodeId(42)]);
        assert_eq!(removed, vec![NodeId(1)]);
        assert!(graph.remove_nodes(&[NodeId(1)]).is_empty());
    }

    #[test]
    fn clear_resets_counters() {
        let mut graph = WordGraph::new();
        let id = graph.allocate_node_id().unwrap();
        graph.put_node(node(id.0, "a"));
        graph.allocate_edge_id().unwrap();
        graph.clear();
        assert!(graph.is_empty());
        assert_eq!(graph.allocate_node_id().unwrap(), NodeId(1));
        assert_eq!(graph.allocate_edge_id().unwrap(), EdgeId(1));
    }
}
