use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::filter::filter_punches;
use crate::core::punches::PunchLogic;
use crate::core::purge::PurgeLogic;
use crate::db::log::audit;
use crate::errors::AppResult;
use crate::session::{Session, require_admin};
use crate::ui::messages::{info, success, warning};
use crate::utils::date::now_local;

use std::io::{self, Write};

/// Ask a yes/no confirmation from the user.
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

/// Handle the `clear` command: bulk delete of the filtered punch set.
pub fn handle(cmd: &Commands, cfg: &Config, session: &Option<Session>) -> AppResult<()> {
    if let Commands::Clear {
        window,
        employee,
        yes,
    } = cmd
    {
        require_admin(session)?;

        let mut pool = open_store(cfg)?;
        let punches = PunchLogic::load(&mut pool)?;

        let now = now_local();
        let filtered = filter_punches(&punches, *window, employee.as_deref(), &now);

        if filtered.is_empty() {
            info("No records to delete for this filter (0 affected).");
            return Ok(());
        }

        let prompt = format!(
            "Delete {} filtered record(s)? This action is irreversible.",
            filtered.len()
        );
        if !*yes && !ask_confirmation(&prompt) {
            info("Operation cancelled.");
            return Ok(());
        }

        let ids: Vec<String> = filtered.iter().map(|p| p.id.clone()).collect();
        let deleted = PurgeLogic::apply(&mut pool, &ids)?;

        audit(
            &pool.conn,
            "clear",
            window.as_str(),
            &format!("Deleted {deleted} attendance record(s)"),
        )?;

        success(format!("Deleted {deleted} record(s)."));
    }

    Ok(())
}
