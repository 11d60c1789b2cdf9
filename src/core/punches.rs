use crate::db::store::{ATTENDANCE, DocumentStore, NOTIFICATIONS};
use crate::errors::{AppError, AppResult};
use crate::models::punch::Punch;
use crate::models::punch_type::PunchType;
use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

pub struct PunchLogic;

impl PunchLogic {
    /// Record one entry/exit punch.
    ///
    /// The employee id is only checked for non-emptiness: punches are an
    /// append-only audit trail and deliberately do not verify roster
    /// membership. A notification document is appended alongside the punch.
    pub fn record(
        store: &mut impl DocumentStore,
        employee_id: &str,
        kind: PunchType,
        recorded_by: &str,
        timestamp: DateTime<Utc>,
    ) -> AppResult<String> {
        if employee_id.trim().is_empty() {
            return Err(AppError::Validation(
                "an employee must be selected".to_string(),
            ));
        }

        let fields = Punch::to_fields(employee_id, kind, timestamp, recorded_by);
        let id = store.create(ATTENDANCE, fields)?;

        store.create(
            NOTIFICATIONS,
            notification_fields(employee_id, kind, timestamp),
        )?;

        Ok(id)
    }

    /// Fetch all punches, newest first (guaranteed by the store contract).
    /// A malformed document aborts the fetch; prior in-memory state at the
    /// caller is left untouched in that case.
    pub fn load(store: &mut impl DocumentStore) -> AppResult<Vec<Punch>> {
        let docs = store.list(ATTENDANCE)?;
        let mut out = Vec::with_capacity(docs.len());
        for doc in &docs {
            out.push(Punch::from_document(doc)?);
        }
        Ok(out)
    }
}

fn notification_fields(
    employee_id: &str,
    kind: PunchType,
    timestamp: DateTime<Utc>,
) -> Map<String, Value> {
    let ts = timestamp.to_rfc3339();
    let message = format!("Employee {} {} at {}", employee_id, kind.verb(), ts);

    let mut fields = Map::new();
    fields.insert("employeeId".into(), Value::String(employee_id.to_string()));
    fields.insert("message".into(), Value::String(message));
    fields.insert("timestamp".into(), Value::String(ts));
    fields
}
