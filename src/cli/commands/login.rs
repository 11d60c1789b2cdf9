use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::audit;
use crate::errors::{AppError, AppResult};
use crate::models::role::Role;
use crate::session::{Session, SessionStore};
use crate::ui::messages::success;

/// Handle the `login` command.
///
/// Security guards log in with a non-empty display name; admins with the
/// configured password. Both validations run before anything is persisted.
pub fn handle(cmd: &Commands, cfg: &Config, store: &SessionStore) -> AppResult<()> {
    if let Commands::Login {
        role,
        name,
        password,
    } = cmd
    {
        let session = match role {
            Role::Security => {
                let display_name = name
                    .as_deref()
                    .map(str::trim)
                    .filter(|n| !n.is_empty())
                    .ok_or_else(|| {
                        AppError::Validation("please enter your name (--name)".to_string())
                    })?;

                Session {
                    role: Role::Security,
                    display_name: Some(display_name.to_string()),
                }
            }
            Role::Admin => {
                let supplied = password.as_deref().unwrap_or_default();
                if supplied != cfg.admin_password {
                    return Err(AppError::Validation("incorrect admin password".to_string()));
                }

                Session {
                    role: Role::Admin,
                    display_name: None,
                }
            }
        };

        // Audit before persisting: a store failure must not leave a live
        // session behind a reported error.
        let pool = open_store(cfg)?;
        audit(
            &pool.conn,
            "login",
            session.role.as_str(),
            &format!("Logged in as {}", session.recorder_identity()),
        )?;

        store.save(&session)?;

        success(format!("Logged in as {}", session.recorder_identity()));
    }

    Ok(())
}
