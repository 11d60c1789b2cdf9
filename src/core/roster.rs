use crate::db::store::{DocumentStore, EMPLOYEES};
use crate::errors::{AppError, AppResult};
use crate::models::employee::Employee;
use crate::session::Session;
use chrono::Utc;
use std::collections::HashMap;

pub struct RosterLogic;

impl RosterLogic {
    /// Append an employee to the roster. The name is required non-empty;
    /// everything else is provenance filled in here.
    pub fn add(
        store: &mut impl DocumentStore,
        name: &str,
        session: &Session,
    ) -> AppResult<String> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(AppError::Validation(
                "employee name must not be empty".to_string(),
            ));
        }

        let fields = Employee::to_fields(
            trimmed,
            session.role.as_str(),
            &Utc::now().to_rfc3339(),
        );
        store.create(EMPLOYEES, fields)
    }

    /// Fetch the whole roster, newest first.
    pub fn list(store: &mut impl DocumentStore) -> AppResult<Vec<Employee>> {
        let docs = store.list(EMPLOYEES)?;
        let mut out = Vec::with_capacity(docs.len());
        for doc in &docs {
            out.push(Employee::from_document(doc)?);
        }
        Ok(out)
    }

    /// id → name lookup used for report rendering.
    pub fn name_map(employees: &[Employee]) -> HashMap<String, String> {
        employees
            .iter()
            .map(|e| (e.id.clone(), e.name.clone()))
            .collect()
    }
}
