use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::load_log;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Log { print: true }) {
        let mut pool = open_store(cfg)?;
        let rows = load_log(&mut pool)?;

        if rows.is_empty() {
            info("Audit log is empty.");
            return Ok(());
        }

        let mut table = Table::new(&["Date", "Operation", "Target", "Message"]);
        for r in rows {
            table.add_row(vec![r.date, r.operation, r.target, r.message]);
        }
        print!("{}", table.render());
    }

    Ok(())
}
