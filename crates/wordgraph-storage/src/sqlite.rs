//! SQLite implementation of [`EntityStore`].
//!
//! [`SqliteStore`] keeps each collection in its own table, one row per
//! record, with the record itself stored as JSON TEXT via serde_json. Every
//! write runs in a transaction, and the bulk deletes override the trait's
//! looping defaults so a whole batch commits or rolls back together.

use rusqlite::{params, Connection, Transaction};

use wordgraph_core::edge::Edge;
use wordgraph_core::id::{EdgeId, NodeId};
use wordgraph_core::node::Node;

use crate::error::StorageError;
use crate::traits::EntityStore;
use crate::types::Collection;

/// SQLite-backed implementation of [`EntityStore`].
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Opens (or creates) a SQLite database at `path`, creating both
    /// collections on first use.
    pub fn open(path: &str) -> Result<Self, StorageError> {
        let conn = crate::schema::open_database(path)?;
        tracing::debug!(path, "opened sqlite store");
        Ok(SqliteStore { conn })
    }

    /// Opens an in-memory SQLite database (for testing).
    pub fn in_memory() -> Result<Self, StorageError> {
        let conn = crate::schema::open_in_memory()?;
        Ok(SqliteStore { conn })
    }

    // -----------------------------------------------------------------------
    // Internal helpers
    // -----------------------------------------------------------------------

    /// Runs `body` inside a transaction, mapping every SQLite failure to a
    /// write error on `collection`. Nothing is committed if `body` fails.
    fn write<F>(&mut self, collection: Collection, body: F) -> Result<(), StorageError>
    where
        F: FnOnce(&Transaction<'_>) -> Result<(), StorageError>,
    {
        let tx = self
            .conn
            .transaction()
            .map_err(|e| StorageError::write(collection, e))?;
        body(&tx)?;
        tx.commit().map_err(|e| StorageError::write(collection, e))
    }

    /// Runs a single-column `record_json` query and decodes every row.
    fn read_all<T>(&self, collection: Collection, sql: &str) -> Result<Vec<T>, StorageError>
    where
        T: serde::de::DeserializeOwned,
    {
        let read_err = |e: rusqlite::Error| StorageError::read(collection, e);
        let mut stmt = self.conn.prepare_cached(sql).map_err(read_err)?;
        let rows = stmt
            .query_map([], |row| row.get::<_, String>(0))
            .map_err(read_err)?;
        let mut result = Vec::new();
        for row in rows {
            let json = row.map_err(read_err)?;
            result.push(serde_json::from_str(&json)?);
        }
        Ok(result)
    }
}

fn delete_edge_rows(
    tx: &Transaction<'_>,
    ids: &[EdgeId],
    collection: Collection,
) -> Result<(), StorageError> {
    let mut stmt = tx
        .prepare_cached("DELETE FROM edges WHERE id = ?1")
        .map_err(|e| StorageError::write(collection, e))?;
    for id in ids {
        stmt.execute(params![id.0])
            .map_err(|e| StorageError::write(collection, e))?;
    }
    Ok(())
}

fn delete_node_rows(
    tx: &Transaction<'_>,
    ids: &[NodeId],
    collection: Collection,
) -> Result<(), StorageError> {
    let mut stmt = tx
        .prepare_cached("DELETE FROM nodes WHERE id = ?1")
        .map_err(|e| StorageError::write(collection, e))?;
    for id in ids {
        stmt.execute(params![id.0])
            .map_err(|e| StorageError::write(collection, e))?;
    }
    Ok(())
}

impl EntityStore for SqliteStore {
    // -------------------------------------------------------------------
    // Writes
    // -------------------------------------------------------------------

    fn put_node(&mut self, node: &Node) -> Result<(), StorageError> {
        let record_json = serde_json::to_string(node)?;
        self.write(Collection::Nodes, |tx| {
            tx.execute(
                "INSERT INTO nodes (id, record_json) VALUES (?1, ?2)
                 ON CONFLICT(id) DO UPDATE SET record_json = excluded.record_json",
                params![node.id.0, record_json],
            )
            .map_err(|e| StorageError::write(Collection::Nodes, e))?;
            Ok(())
        })
    }

    fn put_edge(&mut self, edge: &Edge) -> Result<(), StorageError> {
        let record_json = serde_json::to_string(edge)?;
        self.write(Collection::Edges, |tx| {
            tx.execute(
                "INSERT INTO edges (id, from_id, to_id, record_json) VALUES (?1, ?2, ?3, ?4)
                 ON CONFLICT(id) DO UPDATE SET
                     from_id = excluded.from_id,
                     to_id = excluded.to_id,
                     record_json = excluded.record_json",
                params![edge.id.0, edge.from.0, edge.to.0, record_json],
            )
            .map_err(|e| StorageError::write(Collection::Edges, e))?;
            Ok(())
        })
    }

    fn delete_node(&mut self, id: NodeId) -> Result<(), StorageError> {
        self.write(Collection::Nodes, |tx| {
            delete_node_rows(tx, &[id], Collection::Nodes)
        })
    }

    fn delete_edge(&mut self, id: EdgeId) -> Result<(), StorageError> {
        self.write(Collection::Edges, |tx| {
            delete_edge_rows(tx, &[id], Collection::Edges)
        })
    }

    fn clear_all(&mut self) -> Result<(), StorageError> {
        self.write(Collection::Both, |tx| {
            tx.execute_batch("DELETE FROM edges; DELETE FROM nodes;")
                .map_err(|e| StorageError::write(Collection::Both, e))
        })
    }

    // -------------------------------------------------------------------
    // Reads
    // -------------------------------------------------------------------

    fn get_all_nodes(&self) -> Result<Vec<Node>, StorageError> {
        self.read_all(Collection::Nodes, "SELECT record_json FROM nodes ORDER BY id")
    }

    fn get_all_edges(&self) -> Result<Vec<Edge>, StorageError> {
        self.read_all(Collection::Edges, "SELECT record_json FROM edges ORDER BY id")
    }

    // -------------------------------------------------------------------
    // Bulk deletes (one transaction each)
    // -------------------------------------------------------------------

    fn delete_nodes(&mut self, ids: &[NodeId]) -> Result<(), StorageError> {
        self.write(Collection::Nodes, |tx| {
            delete_node_rows(tx, ids, Collection::Nodes)
        })
    }

    fn delete_edges(&mut self, ids: &[EdgeId]) -> Result<(), StorageError> {
        self.write(Collection::Edges, |tx| {
            delete_edge_rows(tx, ids, Collection::Edges)
        })
    }

    fn delete_batch(&mut self, edges: &[EdgeId], nodes: &[NodeId]) -> Result<(), StorageError> {
        self.write(Collection::Both, |tx| {
            delete_edge_rows(tx, edges, Collection::Both)?;
            delete_node_rows(tx, nodes, Collection::Both)
        })
    }
}
