use crate::models::punch::Punch;
use chrono::{DateTime, TimeZone};
use serde::Serialize;
use std::collections::HashMap;

/// Flat report row: the four fixed columns of the attendance spreadsheet.
#[derive(Serialize, Clone, Debug)]
pub struct ReportRow {
    pub employee_name: String,
    pub punch_type: String,
    pub time: String,
    pub marked_by: String,
}

/// Column order is part of the export contract.
pub(crate) fn headers() -> [&'static str; 4] {
    ["Employee Name", "Type", "Time", "Marked By"]
}

pub(crate) fn row_values(row: &ReportRow) -> [&str; 4] {
    [
        &row.employee_name,
        &row.punch_type,
        &row.time,
        &row.marked_by,
    ]
}

/// Build report rows from filtered punches, one row per punch in input
/// order. Unknown employee ids fall back to the raw id; times render in the
/// supplied timezone.
pub fn build_rows<Tz: TimeZone>(
    punches: &[Punch],
    names: &HashMap<String, String>,
    tz: &Tz,
    datetime_format: &str,
) -> Vec<ReportRow>
where
    Tz::Offset: std::fmt::Display,
{
    punches
        .iter()
        .map(|p| ReportRow {
            employee_name: names
                .get(&p.employee_id)
                .cloned()
                .unwrap_or_else(|| p.employee_id.clone()),
            punch_type: p.kind.report_label().to_string(),
            time: format_time(p.timestamp, tz, datetime_format),
            marked_by: p.marked_by.clone(),
        })
        .collect()
}

fn format_time<Tz: TimeZone>(ts: DateTime<chrono::Utc>, tz: &Tz, fmt: &str) -> String
where
    Tz::Offset: std::fmt::Display,
{
    ts.with_timezone(tz).format(fmt).to_string()
}
