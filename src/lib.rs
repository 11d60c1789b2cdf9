//! punchlog library root.
//! Exposes the CLI parser, the high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod session;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use session::{Session, SessionStore};

/// Central command dispatcher.
pub fn dispatch(
    cli: &Cli,
    cfg: &Config,
    sessions: &SessionStore,
    session: &Option<Session>,
) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Login { .. } => cli::commands::login::handle(&cli.command, cfg, sessions),
        Commands::Logout => cli::commands::logout::handle(sessions),
        Commands::Status => cli::commands::status::handle(session),
        Commands::Employee { action } => cli::commands::employee::handle(action, cfg, session),
        Commands::Mark { .. } => cli::commands::mark::handle(&cli.command, cfg, session),
        Commands::Records { .. } => cli::commands::records::handle(&cli.command, cfg, session),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg, session),
        Commands::Clear { .. } => cli::commands::clear::handle(&cli.command, cfg, session),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg),
        Commands::Db { .. } => cli::commands::db::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs.
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let mut cfg = Config::load()?;

    // Command-line overrides (also what keeps tests isolated).
    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }
    if let Some(custom_session) = &cli.session {
        cfg.session_file = custom_session.clone();
    }

    // The session is loaded once here and threaded into the handlers as an
    // explicit context value.
    let sessions = SessionStore::new(&cfg.session_file);
    let session = sessions.current()?;

    dispatch(&cli, &cfg, &sessions, &session)
}
