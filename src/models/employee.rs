use crate::db::store::{Document, EMPLOYEES};
use crate::errors::AppResult;
use serde::Serialize;
use serde_json::{Map, Value};

/// Roster entry. The roster is append-only: employees are never updated or
/// deleted, so `created_by` / `created_at` provenance stays immutable.
#[derive(Debug, Clone, Serialize)]
pub struct Employee {
    pub id: String,
    pub name: String,
    pub created_by: String,
    pub created_at: String,
}

impl Employee {
    pub fn to_fields(name: &str, created_by: &str, created_at: &str) -> Map<String, Value> {
        let mut fields = Map::new();
        fields.insert("name".into(), Value::String(name.to_string()));
        fields.insert("createdBy".into(), Value::String(created_by.to_string()));
        fields.insert("createdAt".into(), Value::String(created_at.to_string()));
        fields
    }

    pub fn from_document(doc: &Document) -> AppResult<Self> {
        let name = doc.required_str(EMPLOYEES, "name")?;

        Ok(Employee {
            id: doc.id.clone(),
            name,
            created_by: doc.str_field("createdBy").unwrap_or_default(),
            created_at: doc.str_field("createdAt").unwrap_or_default(),
        })
    }
}
