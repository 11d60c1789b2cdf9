use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::filter::filter_punches;
use crate::core::punches::PunchLogic;
use crate::core::roster::RosterLogic;
use crate::errors::AppResult;
use crate::session::{Session, require_admin};
use crate::ui::messages::info;
use crate::utils::date::{day_label, format_in_zone, now_local};
use crate::utils::table::Table;

/// Handle the `records` command: filtered attendance view.
pub fn handle(cmd: &Commands, cfg: &Config, session: &Option<Session>) -> AppResult<()> {
    if let Commands::Records { window, employee } = cmd {
        require_admin(session)?;

        let mut pool = open_store(cfg)?;
        let employees = RosterLogic::list(&mut pool)?;
        let names = RosterLogic::name_map(&employees);
        let punches = PunchLogic::load(&mut pool)?;

        let now = now_local();
        let filtered = filter_punches(&punches, *window, employee.as_deref(), &now);

        if filtered.is_empty() {
            info("No records.");
            return Ok(());
        }

        let mut table = Table::new(&["Employee", "Type", "Day", "Date", "Time", "Marked By"]);
        for p in &filtered {
            let name = names
                .get(&p.employee_id)
                .cloned()
                .unwrap_or_else(|| p.employee_id.clone());

            table.add_row(vec![
                name,
                p.kind.report_label().to_string(),
                day_label(p.timestamp, &now),
                format_in_zone(p.timestamp, &now.timezone(), &cfg.date_format),
                format_in_zone(p.timestamp, &now.timezone(), &cfg.time_format),
                p.marked_by.clone(),
            ]);
        }

        print!("{}", table.render());
        println!("{} record(s)", filtered.len());
    }

    Ok(())
}
