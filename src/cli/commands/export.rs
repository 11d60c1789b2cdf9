use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::audit;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::session::{Session, require_admin};

pub fn handle(cmd: &Commands, cfg: &Config, session: &Option<Session>) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        window,
        employee,
        force,
    } = cmd
    {
        require_admin(session)?;

        let mut pool = open_store(cfg)?;
        let rows = ExportLogic::export(
            &mut pool,
            *format,
            file,
            *window,
            employee.as_deref(),
            *force,
            &cfg.datetime_format,
        )?;

        audit(
            &pool.conn,
            "export",
            format.as_str(),
            &format!("Exported {rows} rows to {file}"),
        )?;
    }

    Ok(())
}
