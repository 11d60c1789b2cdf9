//! Document store collaborator.
//!
//! The application treats persistence as an external document database:
//! schemaless records grouped into named collections, reachable through the
//! three operations of [`DocumentStore`]. The only implementation backs the
//! contract with the local SQLite file, but nothing above this module knows
//! that.

use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use chrono::Utc;
use rusqlite::params;
use serde_json::{Map, Value};
use uuid::Uuid;

pub const EMPLOYEES: &str = "employees";
pub const ATTENDANCE: &str = "attendance";
pub const NOTIFICATIONS: &str = "notifications";

/// A schemaless record: opaque id plus a JSON field map.
#[derive(Debug, Clone)]
pub struct Document {
    pub id: String,
    pub fields: Map<String, Value>,
}

impl Document {
    pub fn str_field(&self, name: &str) -> Option<String> {
        self.fields
            .get(name)
            .and_then(|v| v.as_str())
            .map(|s| s.to_string())
    }

    pub fn required_str(&self, collection: &str, name: &str) -> AppResult<String> {
        self.str_field(name).ok_or_else(|| AppError::MalformedRecord {
            collection: collection.to_string(),
            reason: format!("missing field '{name}'"),
        })
    }
}

pub trait DocumentStore {
    /// List every record of a collection, newest first.
    fn list(&mut self, collection: &str) -> AppResult<Vec<Document>>;

    /// Append a record and return its assigned id.
    fn create(&mut self, collection: &str, fields: Map<String, Value>) -> AppResult<String>;

    /// Delete the given ids in a single transaction and return how many
    /// records were actually removed. An empty id list is a no-op.
    fn delete_batch(&mut self, collection: &str, ids: &[String]) -> AppResult<usize>;
}

/// Pick the listing sort key for a new record: punches sort by their
/// timestamp, everything else by creation instant.
fn sort_key_for(fields: &Map<String, Value>, fallback: &str) -> String {
    for key in ["timestamp", "createdAt"] {
        if let Some(v) = fields.get(key).and_then(|v| v.as_str()) {
            return v.to_string();
        }
    }
    fallback.to_string()
}

impl DocumentStore for DbPool {
    fn list(&mut self, collection: &str) -> AppResult<Vec<Document>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, fields FROM documents
             WHERE collection = ?1
             ORDER BY sort_key DESC, id DESC",
        )?;

        let rows = stmt.query_map([collection], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
        })?;

        let mut out = Vec::new();
        for r in rows {
            let (id, raw) = r?;
            let fields = parse_fields(collection, &raw)?;
            out.push(Document { id, fields });
        }
        Ok(out)
    }

    fn create(&mut self, collection: &str, fields: Map<String, Value>) -> AppResult<String> {
        let id = Uuid::new_v4().to_string();
        let now = Utc::now().to_rfc3339();
        let sort_key = sort_key_for(&fields, &now);
        let raw = serde_json::to_string(&fields)
            .map_err(|e| AppError::Other(format!("field serialization failed: {e}")))?;

        self.conn.execute(
            "INSERT INTO documents (id, collection, fields, sort_key, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![id, collection, raw, sort_key, now],
        )?;

        Ok(id)
    }

    fn delete_batch(&mut self, collection: &str, ids: &[String]) -> AppResult<usize> {
        if ids.is_empty() {
            return Ok(0);
        }

        let tx = self.conn.transaction()?;
        let mut deleted = 0usize;
        {
            let mut stmt =
                tx.prepare("DELETE FROM documents WHERE collection = ?1 AND id = ?2")?;
            for id in ids {
                deleted += stmt.execute(params![collection, id])?;
            }
        }
        tx.commit()?;

        Ok(deleted)
    }
}

fn parse_fields(collection: &str, raw: &str) -> AppResult<Map<String, Value>> {
    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Object(map)) => Ok(map),
        _ => Err(AppError::MalformedRecord {
            collection: collection.to_string(),
            reason: "fields column is not a JSON object".to_string(),
        }),
    }
}
