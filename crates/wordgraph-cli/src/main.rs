//! Word graph command-line front end.
//!
//! Provides the `wordgraph` binary: every subcommand opens the SQLite file,
//! loads it through [`GraphStoreAdapter`], performs one operation, and
//! exits. Results are printed as JSON on stdout; diagnostics go to stderr
//! through `tracing` (filter with `RUST_LOG`).

mod presets;

use std::process;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use wordgraph_adapter::{AdapterConfig, CascadeMode, GraphError, GraphStoreAdapter};
use wordgraph_core::edge::{Edge, EdgeUpdate};
use wordgraph_core::id::{EdgeId, NodeId};
use wordgraph_core::node::NodeUpdate;
use wordgraph_core::style::{EdgeStyle, NodeStyle};
use wordgraph_storage::SqliteStore;

use presets::{ColorPreset, ShapePreset, SizePreset, StyleChoice};

/// Build and browse a persistent graph of words.
#[derive(Parser)]
#[command(name = "wordgraph", about = "Build and browse a persistent graph of words")]
struct Cli {
    /// Path to the graph database file.
    #[arg(long, global = true, env = "WORDGRAPH_DB", default_value = "wordgraph.db")]
    db: String,

    /// How node deletions reach the store: batched or sequential.
    #[arg(long, global = true, env = "WORDGRAPH_CASCADE", default_value_t = CascadeMode::Batched)]
    cascade: CascadeMode,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Debug, Default)]
struct StyleArgs {
    #[arg(long, value_enum)]
    size: Option<SizePreset>,
    #[arg(long, value_enum)]
    color: Option<ColorPreset>,
    #[arg(long, value_enum)]
    shape: Option<ShapePreset>,
}

impl StyleArgs {
    fn choice(&self) -> StyleChoice {
        StyleChoice {
            size: self.size,
            color: self.color,
            shape: self.shape,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Add a word.
    AddNode {
        label: String,
        #[command(flatten)]
        style: StyleArgs,
    },

    /// Connect two words.
    AddEdge {
        from: u32,
        to: u32,
        #[arg(short, long)]
        label: Option<String>,
    },

    /// Relabel or restyle a word.
    UpdateNode {
        id: u32,
        #[arg(short, long)]
        label: Option<String>,
        #[command(flatten)]
        style: StyleArgs,
    },

    /// Re-point or relabel a connection. Omitted endpoints and label stay
    /// as they are.
    UpdateEdge {
        id: u32,
        #[arg(long)]
        from: Option<u32>,
        #[arg(long)]
        to: Option<u32>,
        #[arg(short, long)]
        label: Option<String>,
        /// Remove the connection's label.
        #[arg(long, conflicts_with = "label")]
        clear_label: bool,
    },

    /// Delete words together with every connection touching them.
    DeleteNodes {
        #[arg(required = true)]
        ids: Vec<u32>,
        /// Proceed without stopping at the preview.
        #[arg(long)]
        yes: bool,
    },

    /// Delete connections.
    DeleteEdges {
        #[arg(required = true)]
        ids: Vec<u32>,
    },

    /// Delete everything and restart numbering at 1.
    Clear {
        #[arg(long)]
        yes: bool,
    },

    /// List all words and connections.
    List,

    /// Show one word and its connections.
    Show { id: u32 },

    /// Print the whole graph as JSON.
    Export,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    process::exit(run(cli));
}

/// Returns exit code: 0 = success, 1 = rejected input or missing target,
/// 3 = storage failure.
fn run(cli: Cli) -> i32 {
    tracing::debug!(db = %cli.db, cascade = %cli.cascade, "opening graph");
    let store = match SqliteStore::open(&cli.db) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error: failed to open database '{}': {}", cli.db, e);
            return 3;
        }
    };
    let config = AdapterConfig {
        cascade: cli.cascade,
    };
    let mut graph = match GraphStoreAdapter::open(store, config) {
        Ok(g) => g,
        Err(e) => return report(&e),
    };

    match execute(&mut graph, cli.command) {
        Ok(code) => code,
        Err(e) => report(&e),
    }
}

fn report(err: &GraphError) -> i32 {
    eprintln!("Error: {}", err);
    if err.is_storage() {
        3
    } else {
        1
    }
}

fn print_json<T: serde::Serialize>(value: &T) {
    let json = serde_json::to_string_pretty(value)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize result: {}\"}}", e));
    println!("{}", json);
}

/// Fills the omitted parts of an `update-edge` from the current edge.
fn edge_update(
    current: &Edge,
    from: Option<u32>,
    to: Option<u32>,
    label: Option<String>,
    clear_label: bool,
) -> EdgeUpdate {
    let label = if clear_label {
        None
    } else {
        label.or_else(|| current.label.clone())
    };
    EdgeUpdate {
        from: from.map(NodeId).unwrap_or(current.from),
        to: to.map(NodeId).unwrap_or(current.to),
        label,
        style: None,
    }
}

fn execute(
    graph: &mut GraphStoreAdapter<SqliteStore>,
    command: Commands,
) -> Result<i32, GraphError> {
    match command {
        Commands::AddNode { label, style } => {
            let node = graph.add_node(&label, style.choice().apply_to(NodeStyle::default()))?;
            print_json(&node);
        }

        Commands::AddEdge { from, to, label } => {
            let edge = graph.add_edge(
                NodeId(from),
                NodeId(to),
                label.as_deref(),
                EdgeStyle::default(),
            )?;
            print_json(&edge);
        }

        Commands::UpdateNode { id, label, style } => {
            let id = NodeId(id);
            let current = graph
                .get_node(id)
                .ok_or(GraphError::NodeNotFound { id })?;
            let choice = style.choice();
            let update = NodeUpdate {
                label,
                style: (!choice.is_empty()).then(|| choice.apply_to(current.style.clone())),
            };
            let node = graph.update_node(id, &update)?;
            print_json(&node);
        }

        Commands::UpdateEdge {
            id,
            from,
            to,
            label,
            clear_label,
        } => {
            let id = EdgeId(id);
            let current = graph.get_edge(id).ok_or(GraphError::EdgeNotFound { id })?;
            let update = edge_update(current, from, to, label, clear_label);
            let edge = graph.update_edge(id, &update)?;
            print_json(&edge);
        }

        Commands::DeleteNodes { ids, yes } => {
            let ids: Vec<NodeId> = ids.into_iter().map(NodeId).collect();
            let doomed = graph.cascade_preview(ids.iter().copied());
            if !doomed.is_empty() {
                eprintln!("Deleting these words also deletes {} connection(s):", doomed.len());
                for edge in &doomed {
                    eprintln!("  {}: {} -> {}", edge.id, edge.from, edge.to);
                }
            }
            if !yes {
                eprintln!("Nothing deleted; pass --yes to proceed.");
                return Ok(1);
            }
            let report = graph.delete_nodes(ids)?;
            print_json(&serde_json::json!({
                "nodes": report.nodes,
                "edges": report.edges,
            }));
        }

        Commands::DeleteEdges { ids } => {
            let report = graph.delete_edges(ids.into_iter().map(EdgeId))?;
            print_json(&serde_json::json!({ "edges": report.edges }));
        }

        Commands::Clear { yes } => {
            if !yes {
                eprintln!(
                    "This deletes {} word(s) and {} connection(s); pass --yes to proceed.",
                    graph.graph().node_count(),
                    graph.graph().edge_count()
                );
                return Ok(1);
            }
            graph.clear()?;
        }

        Commands::List => {
            for node in graph.list_nodes() {
                println!("{:>4}  {}", node.id, node.label);
            }
            for edge in graph.list_edges() {
                let label = edge.label.as_deref().unwrap_or("");
                println!("{:>4}  {} -> {}  {}", edge.id, edge.from, edge.to, label);
            }
        }

        Commands::Show { id } => {
            let id = NodeId(id);
            let node = graph.get_node(id).ok_or(GraphError::NodeNotFound { id })?;
            print_json(&serde_json::json!({
                "node": node,
                "edges": graph.edges_touching(id),
            }));
        }

        Commands::Export => print_json(&graph.snapshot()),
    }
    Ok(0)
}
