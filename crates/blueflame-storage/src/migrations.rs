//! Database schema migrations.

use rusqlite::Connection;
use tracing::info;

use blueflame_core::error::BlueflameError;

/// Run all pending database migrations.
pub fn run_migrations(conn: &Connection) -> Result<(), BlueflameError> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS schema_migrations (
            version     INTEGER PRIMARY KEY NOT NULL,
            name        TEXT NOT NULL,
            applied_at  INTEGER NOT NULL DEFAULT (strftime('%s', 'now'))
        );",
    )
    .map_err(|e| BlueflameError::Storage(format!("Failed to create migrations table: {}", e)))?;

    let current_version: i64 = conn
        .query_row(
            "SELECT COALESCE(MAX(version), 0) FROM schema_migrations",
            [],
            |row| row.get(0),
        )
        .map_err(|e| {
            BlueflameError::Storage(format!("Failed to query migration version: {}", e))
        })?;

    if current_version < 1 {
        apply_v1(conn)?;
        info!("Applied migration v1: documents");
    }

    Ok(())
}

/// Version 1: generic document table keyed by collection.
fn apply_v1(conn: &Connection) -> Result<(), BlueflameError> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS documents (
            seq         INTEGER PRIMARY KEY AUTOINCREMENT,
            id          TEXT NOT NULL UNIQUE,
            collection  TEXT NOT NULL,
            body        TEXT NOT NULL CHECK (json_valid(body)),
            created_at  INTEGER NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_documents_collection
            ON documents (collection, seq);

        INSERT INTO schema_migrations (version, name) VALUES (1, 'documents');
        ",
    )
    .map_err(|e| BlueflameError::Storage(format!("Migration v1 failed: {}", e)))
}
