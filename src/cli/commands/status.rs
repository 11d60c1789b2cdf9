use crate::errors::AppResult;
use crate::models::role::Role;
use crate::session::Session;
use crate::ui::messages::info;

pub fn handle(session: &Option<Session>) -> AppResult<()> {
    match session {
        None => info("Not logged in."),
        Some(s) => match s.role {
            Role::Admin => info("Logged in as admin."),
            Role::Security => info(format!(
                "Logged in as security guard: {}",
                s.recorder_identity()
            )),
        },
    }
    Ok(())
}
