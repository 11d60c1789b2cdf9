use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the internal `log` table exists.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Check if the `documents` table exists.
fn documents_table_exists(conn: &Connection) -> Result<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name='documents'")?;
    let exists: Option<String> = stmt.query_row([], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Create the `documents` table.
///
/// Every collection (employees, attendance, notifications) shares this one
/// schemaless table: `fields` holds the JSON field map, `sort_key` holds the
/// value listings are ordered by (punch timestamp / creation instant), so a
/// plain `ORDER BY sort_key DESC` gives the newest-first order the filter
/// engine assumes.
fn create_documents_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS documents (
            id         TEXT PRIMARY KEY,
            collection TEXT NOT NULL,
            fields     TEXT NOT NULL,
            sort_key   TEXT NOT NULL,
            created_at TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_documents_collection_sort
            ON documents(collection, sort_key);
        "#,
    )?;
    Ok(())
}

/// Public entry point: run all pending migrations.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;

    if !documents_table_exists(conn)? {
        create_documents_table(conn)?;
        conn.execute(
            "INSERT INTO log (date, operation, target, message)
             VALUES (datetime('now'), 'migration_applied', 'documents', 'Created documents table')",
            [],
        )?;
    }

    Ok(())
}
