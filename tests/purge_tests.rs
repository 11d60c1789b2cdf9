//! Bulk-delete contract of the purge logic.

mod common;
use common::{seed_punch, setup_test_db};
use punchlog::core::purge::PurgeLogic;
use punchlog::db::initialize::init_db;
use punchlog::db::pool::DbPool;
use punchlog::db::store::{Document, DocumentStore};
use punchlog::errors::AppResult;
use punchlog::models::punch_type::PunchType;
use serde_json::{Map, Value};

/// Store double that counts every `delete_batch` call.
struct CountingStore {
    delete_calls: usize,
}

impl DocumentStore for CountingStore {
    fn list(&mut self, _collection: &str) -> AppResult<Vec<Document>> {
        Ok(Vec::new())
    }

    fn create(&mut self, _collection: &str, _fields: Map<String, Value>) -> AppResult<String> {
        Ok("unused".to_string())
    }

    fn delete_batch(&mut self, _collection: &str, ids: &[String]) -> AppResult<usize> {
        self.delete_calls += 1;
        Ok(ids.len())
    }
}

#[test]
fn empty_id_list_reports_zero_without_touching_the_store() {
    let mut store = CountingStore { delete_calls: 0 };

    let deleted = PurgeLogic::apply(&mut store, &[]).expect("purge");

    assert_eq!(deleted, 0);
    assert_eq!(store.delete_calls, 0);
}

#[test]
fn non_empty_id_list_is_forwarded_in_one_batch() {
    let mut store = CountingStore { delete_calls: 0 };
    let ids = vec!["a".to_string(), "b".to_string()];

    let deleted = PurgeLogic::apply(&mut store, &ids).expect("purge");

    assert_eq!(deleted, 2);
    assert_eq!(store.delete_calls, 1);
}

#[test]
fn deleting_missing_ids_counts_only_removed_rows() {
    let db = setup_test_db("purge_missing_ids");
    let id = seed_punch(&db, "e1", PunchType::Entry, "2024-03-01T09:00:00Z");

    let mut pool = DbPool::new(&db).expect("open db");
    init_db(&pool.conn).expect("init db");

    let ids = vec![id, "no-such-id".to_string()];
    let deleted = PurgeLogic::apply(&mut pool, &ids).expect("purge");
    assert_eq!(deleted, 1);
}
