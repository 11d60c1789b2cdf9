use crate::cli::commands::open_store;
use crate::cli::parser::EmployeeAction;
use crate::config::Config;
use crate::core::roster::RosterLogic;
use crate::db::log::audit;
use crate::errors::AppResult;
use crate::session::{Session, require_admin};
use crate::ui::messages::{info, success};
use crate::utils::table::Table;

pub fn handle(
    action: &EmployeeAction,
    cfg: &Config,
    session: &Option<Session>,
) -> AppResult<()> {
    let admin = require_admin(session)?;

    match action {
        EmployeeAction::Add { name } => {
            let mut pool = open_store(cfg)?;
            let id = RosterLogic::add(&mut pool, name, admin)?;

            audit(
                &pool.conn,
                "employee_add",
                &id,
                &format!("Added employee '{}'", name.trim()),
            )?;

            success(format!("Employee added: {} (id {})", name.trim(), id));
        }
        EmployeeAction::List => {
            let mut pool = open_store(cfg)?;
            let employees = RosterLogic::list(&mut pool)?;

            if employees.is_empty() {
                info("No employees in the roster.");
                return Ok(());
            }

            let mut table = Table::new(&["Name", "Created By", "Created At", "Id"]);
            for e in &employees {
                table.add_row(vec![
                    e.name.clone(),
                    e.created_by.clone(),
                    e.created_at.clone(),
                    e.id.clone(),
                ]);
            }
            print!("{}", table.render());
        }
    }

    Ok(())
}
