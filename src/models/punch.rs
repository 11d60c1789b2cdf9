use super::punch_type::PunchType;
use crate::db::store::{ATTENDANCE, Document};
use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{Map, Value};

/// One attendance punch. Immutable once created: the only lifecycle is
/// creation and (bulk) deletion, there is no update operation.
///
/// `employee_id` is a soft reference into the roster; it is not validated
/// for existence at write time and deleting is never cascaded, so orphaned
/// punches are legal and render as the raw id.
#[derive(Debug, Clone, Serialize)]
pub struct Punch {
    pub id: String,
    pub employee_id: String,
    pub kind: PunchType,
    pub timestamp: DateTime<Utc>,
    pub marked_by: String,
}

impl Punch {
    /// Build the schemaless field map stored in the attendance collection.
    pub fn to_fields(
        employee_id: &str,
        kind: PunchType,
        timestamp: DateTime<Utc>,
        marked_by: &str,
    ) -> Map<String, Value> {
        let mut fields = Map::new();
        fields.insert("employeeId".into(), Value::String(employee_id.to_string()));
        fields.insert("type".into(), Value::String(kind.to_db_str().to_string()));
        fields.insert("timestamp".into(), Value::String(timestamp.to_rfc3339()));
        fields.insert("markedBy".into(), Value::String(marked_by.to_string()));
        fields
    }

    /// Parse a stored document back into a punch.
    pub fn from_document(doc: &Document) -> AppResult<Self> {
        let employee_id = doc.required_str(ATTENDANCE, "employeeId")?;
        let kind_str = doc.required_str(ATTENDANCE, "type")?;
        let kind = PunchType::from_db_str(&kind_str)
            .ok_or_else(|| AppError::InvalidPunchType(kind_str.clone()))?;

        let ts_str = doc.required_str(ATTENDANCE, "timestamp")?;
        let timestamp = DateTime::parse_from_rfc3339(&ts_str)
            .map_err(|_| AppError::InvalidTimestamp(ts_str.clone()))?
            .with_timezone(&Utc);

        // markedBy is free-text; tolerate its absence on old records.
        let marked_by = doc.str_field("markedBy").unwrap_or_default();

        Ok(Punch {
            id: doc.id.clone(),
            employee_id,
            kind,
            timestamp,
            marked_by,
        })
    }
}
