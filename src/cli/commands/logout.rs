use crate::errors::AppResult;
use crate::session::SessionStore;
use crate::ui::messages::success;

pub fn handle(store: &SessionStore) -> AppResult<()> {
    store.clear()?;
    success("Logged out.");
    Ok(())
}
