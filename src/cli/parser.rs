use crate::export::ExportFormat;
use crate::models::punch_type::PunchType;
use crate::models::role::Role;
use crate::models::window::Window;
use clap::{Parser, Subcommand};

/// Command-line interface definition for punchlog
/// CLI application to record employee entry/exit attendance with SQLite
#[derive(Parser)]
#[command(
    name = "punchlog",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple attendance CLI: roster, entry/exit punches, filtered records and spreadsheet export using SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Override session file path (useful for tests)
    #[arg(global = true, long = "session", hide = true)]
    pub session: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Inspect the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,
    },

    /// Log in as security guard or admin
    Login {
        /// Role to log in as
        role: Role,

        /// Guard display name (required for security logins)
        #[arg(long)]
        name: Option<String>,

        /// Admin password (required for admin logins)
        #[arg(long)]
        password: Option<String>,
    },

    /// Clear the current session
    Logout,

    /// Show the current session
    Status,

    /// Manage the employee roster (admin only)
    Employee {
        #[command(subcommand)]
        action: EmployeeAction,
    },

    /// Record an entry/exit punch for an employee
    Mark {
        /// Employee id (as printed by `employee list`)
        employee_id: String,

        /// Punch type
        kind: PunchType,
    },

    /// View attendance records, filtered by window and employee (admin only)
    Records {
        #[arg(long, value_enum, default_value = "all", help = "Time window filter")]
        window: Window,

        #[arg(long = "employee", help = "Restrict to one employee id")]
        employee: Option<String>,
    },

    /// Export filtered attendance records to a spreadsheet (admin only)
    Export {
        /// Export format: csv, json, xlsx
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        /// Output file path (absolute path required)
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, value_enum, default_value = "all", help = "Time window filter")]
        window: Window,

        #[arg(long = "employee", help = "Restrict to one employee id")]
        employee: Option<String>,

        /// Overwrite the output file without asking
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Delete the filtered set of attendance records (admin only)
    Clear {
        #[arg(long, value_enum, default_value = "all", help = "Time window filter")]
        window: Window,

        #[arg(long = "employee", help = "Restrict to one employee id")]
        employee: Option<String>,

        /// Skip the confirmation prompt
        #[arg(long = "yes", short = 'y')]
        yes: bool,
    },

    /// Print the internal audit log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },
}

#[derive(Subcommand)]
pub enum EmployeeAction {
    /// Add an employee to the roster
    Add {
        /// Full name (required non-empty)
        #[arg(long)]
        name: String,
    },

    /// List the roster
    List,
}
