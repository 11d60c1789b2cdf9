use crate::db::pool::DbPool;
use crate::db::store::{ATTENDANCE, EMPLOYEES, NOTIFICATIONS};
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use rusqlite::OptionalExtension;
use std::fs;

pub fn print_store_info(pool: &mut DbPool, db_path: &str) -> rusqlite::Result<()> {
    println!();

    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);

    for collection in [EMPLOYEES, ATTENDANCE, NOTIFICATIONS] {
        let count: i64 = pool.conn.query_row(
            "SELECT COUNT(*) FROM documents WHERE collection = ?1",
            [collection],
            |row| row.get(0),
        )?;
        println!(
            "{}• {}:{} {}{}{}",
            CYAN, collection, RESET, GREEN, count, RESET
        );
    }

    let first: Option<String> = pool
        .conn
        .query_row(
            "SELECT sort_key FROM documents WHERE collection = ?1
             ORDER BY sort_key ASC LIMIT 1",
            [ATTENDANCE],
            |row| row.get(0),
        )
        .optional()?;

    let last: Option<String> = pool
        .conn
        .query_row(
            "SELECT sort_key FROM documents WHERE collection = ?1
             ORDER BY sort_key DESC LIMIT 1",
            [ATTENDANCE],
            |row| row.get(0),
        )
        .optional()?;

    let fmt_first = first.unwrap_or_else(|| format!("{GREY}--{RESET}"));
    let fmt_last = last.unwrap_or_else(|| format!("{GREY}--{RESET}"));

    println!("{}• Punch range:{}", CYAN, RESET);
    println!("    from: {}", fmt_first);
    println!("    to:   {}", fmt_last);

    println!();
    Ok(())
}
