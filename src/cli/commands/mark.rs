use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::punches::PunchLogic;
use crate::db::log::audit;
use crate::errors::AppResult;
use crate::session::{Session, require_login};
use crate::ui::messages::success;
use chrono::Utc;

/// Handle the `mark` command: record one entry/exit punch.
pub fn handle(cmd: &Commands, cfg: &Config, session: &Option<Session>) -> AppResult<()> {
    if let Commands::Mark { employee_id, kind } = cmd {
        let current = require_login(session)?;
        let recorder = current.recorder_identity();

        let mut pool = open_store(cfg)?;
        let id = PunchLogic::record(&mut pool, employee_id, *kind, &recorder, Utc::now())?;

        audit(
            &pool.conn,
            "mark",
            &id,
            &format!(
                "{} recorded for employee {} by {}",
                kind.report_label(),
                employee_id,
                recorder
            ),
        )?;

        let label = if kind.is_entry() { "Entry" } else { "Exit" };
        success(format!("{label} recorded for employee {employee_id}"));
    }

    Ok(())
}
