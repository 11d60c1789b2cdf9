use crate::db::store::{ATTENDANCE, DocumentStore};
use crate::errors::AppResult;

pub struct PurgeLogic;

impl PurgeLogic {
    /// Delete a filtered set of punches by id.
    ///
    /// The batch runs as a single transaction: either every id is removed or
    /// none are. An empty id list never reaches the store and reports zero
    /// affected records. The returned count is always surfaced to the caller
    /// for display.
    pub fn apply(store: &mut impl DocumentStore, ids: &[String]) -> AppResult<usize> {
        if ids.is_empty() {
            return Ok(0);
        }
        store.delete_batch(ATTENDANCE, ids)
    }
}
