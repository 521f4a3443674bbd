use crate::db::log::ttlog;
use crate::errors::AppResult;
use rusqlite::{Connection, OptionalExtension, params};

/// Ordered schema migrations: (version, description, SQL).
/// Every statement is idempotent so an interrupted run can simply be repeated.
const MIGRATIONS: &[(i64, &str, &str)] = &[
    (
        1,
        "create log table",
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    ),
    (
        2,
        "create kv_store table",
        r#"
        CREATE TABLE IF NOT EXISTS kv_store (
            key        TEXT PRIMARY KEY,
            value      TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );
        "#,
    ),
];

/// Ensure the bookkeeping table exists.
fn ensure_migrations_table(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS schema_migrations (
            version    INTEGER PRIMARY KEY,
            applied_at TEXT NOT NULL
        );
        "#,
    )
}

fn is_applied(conn: &Connection, version: i64) -> rusqlite::Result<bool> {
    let found: Option<i64> = conn
        .query_row(
            "SELECT version FROM schema_migrations WHERE version = ?1",
            [version],
            |row| row.get(0),
        )
        .optional()?;
    Ok(found.is_some())
}

/// Current schema version (0 for a fresh file).
pub fn schema_version(conn: &Connection) -> AppResult<i64> {
    ensure_migrations_table(conn)?;
    let v: Option<i64> =
        conn.query_row("SELECT MAX(version) FROM schema_migrations", [], |row| {
            row.get(0)
        })?;
    Ok(v.unwrap_or(0))
}

/// Apply every migration not yet recorded. Returns how many ran.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<usize> {
    ensure_migrations_table(conn)?;

    let mut applied = 0;
    for (version, description, sql) in MIGRATIONS {
        if is_applied(conn, *version)? {
            continue;
        }

        conn.execute_batch(sql)?;
        conn.execute(
            "INSERT INTO schema_migrations (version, applied_at) VALUES (?1, ?2)",
            params![version, chrono::Local::now().to_rfc3339()],
        )?;

        // log table exists from version 1 on
        ttlog(
            conn,
            "migration_applied",
            &format!("v{version}"),
            description,
        )?;
        applied += 1;
    }

    Ok(applied)
}
