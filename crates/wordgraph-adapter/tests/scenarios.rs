//! End-to-end scenarios: the adapter over a real SQLite file, reopened
//! between sessions the way a fresh process would see it.

use proptest::prelude::*;

use wordgraph_adapter::{AdapterConfig, CascadeMode, GraphStoreAdapter};
use wordgraph_core::edge::EdgeUpdate;
use wordgraph_core::id::{EdgeId, NodeId};
use wordgraph_core::node::NodeUpdate;
use wordgraph_core::style::{EdgeStyle, NodeStyle, Shape};
use wordgraph_storage::{EntityStore, InMemoryStore, SqliteStore};

fn db_path(dir: &tempfile::TempDir) -> String {
    dir.path().join("wordgraph.db").to_string_lossy().to_string()
}

fn open(path: &str, cascade: CascadeMode) -> GraphStoreAdapter<SqliteStore> {
    let store = SqliteStore::open(path).unwrap();
    GraphStoreAdapter::open(store, AdapterConfig { cascade }).unwrap()
}

#[test]
fn dog_and_cat_survive_a_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = db_path(&dir);

    {
        let mut graph = open(&path, CascadeMode::Batched);
        let dog = graph.add_node("犬", NodeStyle::default()).unwrap();
        let cat = graph.add_node("猫", NodeStyle::default()).unwrap();
        assert_eq!((dog.id, cat.id), (NodeId(1), NodeId(2)));

        let and = graph
            .add_edge(dog.id, cat.id, Some("と"), EdgeStyle::default())
            .unwrap();
        assert_eq!(and.id, EdgeId(1));
        assert_eq!(graph.graph().next_node_id(), NodeId(3));
    }

    let mut graph = open(&path, CascadeMode::Batched);
    let labels: Vec<&str> = graph.list_nodes().iter().map(|n| n.label.as_str()).collect();
    assert_eq!(labels, vec!["犬", "猫"]);
    let edges = graph.list_edges();
    assert_eq!(edges.len(), 1);
    assert_eq!(edges[0].label.as_deref(), Some("と"));

    let bird = graph.add_node("鳥", NodeStyle::default()).unwrap();
    assert_eq!(bird.id, NodeId(3));
}

#[test]
fn updates_and_deletes_persist() {
    let dir = tempfile::tempdir().unwrap();
    let path = db_path(&dir);

    {
        let mut graph = open(&path, CascadeMode::Sequential);
        let dog = graph.add_node("犬", NodeStyle::default()).unwrap().id;
        let cat = graph.add_node("猫", NodeStyle::default()).unwrap().id;
        let bird = graph.add_node("鳥", NodeStyle::default()).unwrap().id;
        graph.add_edge(dog, cat, Some("と"), EdgeStyle::default()).unwrap();
        graph.add_edge(cat, bird, None, EdgeStyle::default()).unwrap();

        let mut style = NodeStyle::default();
        style.shape = Shape::Box;
        graph.update_node(dog, &NodeUpdate::style(style)).unwrap();
        graph
            .update_edge(
                EdgeId(2),
                &EdgeUpdate {
                    from: bird,
                    to: dog,
                    label: Some("や".into()),
                    style: None,
                },
            )
            .unwrap();

        let report = graph.delete_nodes([cat]).unwrap();
        assert_eq!(report.edges, vec![EdgeId(1)]);
    }

    let graph = open(&path, CascadeMode::Sequential);
    assert_eq!(graph.list_nodes().len(), 2);
    assert!(graph.get_node(NodeId(2)).is_none());
    assert_eq!(graph.get_node(NodeId(1)).map(|n| n.style.shape), Some(Shape::Box));

    let edges = graph.list_edges();
    assert_eq!(edges.len(), 1);
    assert_eq!((edges[0].from, edges[0].to), (NodeId(3), NodeId(1)));
    assert_eq!(edges[0].label.as_deref(), Some("や"));

    // Ids freed by deletion are never handed out again.
    assert_eq!(graph.graph().next_node_id(), NodeId(4));
    assert_eq!(graph.graph().next_edge_id(), EdgeId(3));
}

#[test]
fn clear_restarts_numbering_across_sessions() {
    let dir = tempfile::tempdir().unwrap();
    let path = db_path(&dir);

    {
        let mut graph = open(&path, CascadeMode::Batched);
        let a = graph.add_node("犬", NodeStyle::default()).unwrap().id;
        graph.add_edge(a, a, None, EdgeStyle::default()).unwrap();
        graph.clear().unwrap();
    }

    let mut graph = open(&path, CascadeMode::Batched);
    assert!(graph.graph().is_empty());
    assert_eq!(graph.add_node("猫", NodeStyle::default()).unwrap().id, NodeId(1));
}

#[test]
fn rejected_edge_leaves_store_unchanged() {
    let dir = tempfile::tempdir().unwrap();
    let path = db_path(&dir);

    let mut graph = open(&path, CascadeMode::Batched);
    let a = graph.add_node("犬", NodeStyle::default()).unwrap().id;
    let err = graph
        .add_edge(a, NodeId(2), None, EdgeStyle::default())
        .unwrap_err();
    assert!(err.is_validation());
    assert!(graph.store().get_all_edges().unwrap().is_empty());
}

#[test]
fn repeated_delete_is_a_no_op() {
    let mut graph = GraphStoreAdapter::new(InMemoryStore::new());
    let a = graph.add_node("犬", NodeStyle::default()).unwrap().id;

    assert_eq!(graph.delete_nodes([a]).unwrap().nodes, vec![a]);
    assert!(graph.delete_nodes([a]).unwrap().is_empty());
    assert!(graph.delete_edges([EdgeId(1)]).unwrap().is_empty());
}

#[test]
fn batched_cascade_rolls_back_on_failure() {
    let dir = tempfile::tempdir().unwrap();
    let path = db_path(&dir);

    let mut graph = open(&path, CascadeMode::Batched);
    let dog = graph.add_node("犬", NodeStyle::default()).unwrap().id;
    let cat = graph.add_node("猫", NodeStyle::default()).unwrap().id;
    graph.add_edge(dog, cat, Some("と"), EdgeStyle::default()).unwrap();

    // A second connection plants a trigger that refuses node deletes.
    let side = rusqlite::Connection::open(&path).unwrap();
    side.execute_batch(
        "CREATE TRIGGER refuse_node_delete BEFORE DELETE ON nodes
         BEGIN SELECT RAISE(ABORT, 'refused'); END;",
    )
    .unwrap();
    drop(side);

    let err = graph.delete_nodes([dog]).unwrap_err();
    assert!(err.is_storage());

    // Neither the view nor the file lost the edge.
    assert_eq!(graph.list_edges().len(), 1);
    assert_eq!(graph.store().get_all_edges().unwrap().len(), 1);
    assert_eq!(graph.store().get_all_nodes().unwrap().len(), 2);
}

#[test]
fn snapshot_serializes_for_the_canvas() {
    let mut graph = GraphStoreAdapter::new(InMemoryStore::new());
    let a = graph.add_node("犬", NodeStyle::default()).unwrap().id;
    graph.add_edge(a, a, None, EdgeStyle::default()).unwrap();

    let json = serde_json::to_value(graph.snapshot()).unwrap();
    assert_eq!(json["nodes"][0]["label"], "犬");
    assert_eq!(json["nodes"][0]["borderWidth"], 2);
    assert_eq!(json["edges"][0]["from"], 1);
    assert_eq!(json["edges"][0]["arrows"]["to"]["type"], "arrow");
    assert!(json["edges"][0].get("label").is_none());
}

#[derive(Debug, Clone)]
enum Op {
    AddNode,
    AddEdge(u32, u32),
    DeleteNode(u32),
    DeleteEdge(u32),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => Just(Op::AddNode),
        3 => (1u32..12, 1u32..12).prop_map(|(a, b)| Op::AddEdge(a, b)),
        1 => (1u32..12).prop_map(Op::DeleteNode),
        1 => (1u32..12).prop_map(Op::DeleteEdge),
    ]
}

proptest! {
    #[test]
    fn ids_strictly_increase_and_view_matches_store(ops in prop::collection::vec(op(), 1..40)) {
        let mut graph = GraphStoreAdapter::new(InMemoryStore::new());
        let mut last_node = 0u32;
        let mut last_edge = 0u32;

        for op in ops {
            match op {
                Op::AddNode => {
                    let id = graph.add_node("語", NodeStyle::default()).unwrap().id;
                    prop_assert!(id.0 > last_node);
                    last_node = id.0;
                }
                Op::AddEdge(a, b) => {
                    if let Ok(edge) = graph.add_edge(NodeId(a), NodeId(b), None, EdgeStyle::default()) {
                        prop_assert!(edge.id.0 > last_edge);
                        last_edge = edge.id.0;
                    }
                }
                Op::DeleteNode(id) => {
                    graph.delete_nodes([NodeId(id)]).unwrap();
                }
                Op::DeleteEdge(id) => {
                    graph.delete_edges([EdgeId(id)]).unwrap();
                }
            }
            prop_assert!(graph.graph().validate().is_ok());
        }

        let reloaded = GraphStoreAdapter::open(graph.store().clone(), AdapterConfig::default()).unwrap();
        prop_assert_eq!(reloaded.snapshot(), graph.snapshot());
    }
}
