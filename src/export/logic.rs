use crate::core::filter::filter_punches;
use crate::core::punches::PunchLogic;
use crate::core::roster::RosterLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::export::model::build_rows;
use crate::export::{ExportFormat, ensure_writable};
use crate::models::window::Window;
use crate::utils::date::now_local;
use std::path::Path;

use crate::export::json_csv::{export_csv, export_json};
use crate::export::xlsx::export_xlsx;

/// High-level export: fetch, filter, flatten, serialize.
pub struct ExportLogic;

impl ExportLogic {
    /// Export the filtered punch set to `file`, returning the row count.
    ///
    /// Failures here are export failures, reported distinctly from store
    /// errors so the caller knows no data was lost, only not exported.
    pub fn export(
        pool: &mut DbPool,
        format: ExportFormat,
        file: &str,
        window: Window,
        employee: Option<&str>,
        force: bool,
        datetime_format: &str,
    ) -> AppResult<usize> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "output file path must be absolute: {file}"
            )));
        }

        ensure_writable(path, force)?;

        let employees = RosterLogic::list(pool)?;
        let names = RosterLogic::name_map(&employees);
        let punches = PunchLogic::load(pool)?;

        let now = now_local();
        let filtered = filter_punches(&punches, window, employee, &now);
        let rows = build_rows(&filtered, &names, &now.timezone(), datetime_format);

        match format {
            ExportFormat::Csv => export_csv(&rows, path)?,
            ExportFormat::Json => export_json(&rows, path)?,
            ExportFormat::Xlsx => export_xlsx(&rows, path)?,
        }

        Ok(rows.len())
    }
}
