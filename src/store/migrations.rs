//! Version-tracked database migrations for the libSQL backend.
//!
//! Each migration has a version number and SQL. `run_migrations()` checks
//! the current version and applies only the new ones sequentially.

use libsql::Connection;

use crate::error::DatabaseError;

/// A single migration step.
struct Migration {
    version: i64,
    name: &'static str,
    sql: &'static str,
}

/// All migrations in order. Add new versions to the end.
static MIGRATIONS: &[Migration] = &[
    Migration {
        version: 1,
        name: "profile_records",
        sql: r#"
            CREATE TABLE IF NOT EXISTS profile_records (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL,
                updated_at TEXT NOT NULL DEFAULT (datetime('now'))
            );
        "#,
    },
    Migration {
        // Records imported from the browser build were keyed
        // `healthai_user_profile_<id>`; move them into the `profile:` namespace.
        // An already-namespaced record for the same identity wins.
        version: 2,
        name: "namespace_legacy_profile_keys",
        sql: r#"
            INSERT OR IGNORE INTO profile_records (key, value, updated_at)
                SELECT 'profile:' || substr(key, 23), value, updated_at
                FROM profile_records
                WHERE key LIKE 'healthai\_user\_profile\_%' ESCAPE '\'
                  AND length(key) > 22;
            DELETE FROM profile_records
                WHERE key LIKE 'healthai\_user\_profile\_%' ESCAPE '\';
        "#,
    },
];

/// Run all pending migrations against the given connection.
///
/// Creates the `_migrations` table if it doesn't exist.
pub async fn run_migrations(conn: &Connection) -> Result<(), DatabaseError> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS _migrations (
            version INTEGER PRIMARY KEY,
            name TEXT NOT NULL,
            applied_at TEXT NOT NULL DEFAULT (datetime('now'))
        )",
        (),
    )
    .await
    .map_err(|e| DatabaseError::Migration(format!("Failed to create _migrations table: {e}")))?;

    let current_version = get_current_version(conn).await?;

    for migration in MIGRATIONS {
        if migration.version > current_version {
            tracing::info!(
                version = migration.version,
                name = migration.name,
                "Applying migration"
            );
            conn.execute_batch(migration.sql).await.map_err(|e| {
                DatabaseError::Migration(format!(
                    "Migration V{} ({}) failed: {e}",
                    migration.version, migration.name
                ))
            })?;
            record_version(conn, migration.version, migration.name).await?;
        }
    }

    tracing::info!(
        version = get_current_version(conn).await?,
        "Database migrations complete"
    );

    Ok(())
}

/// Get the highest applied migration version, or 0 if none.
async fn get_current_version(conn: &Connection) -> Result<i64, DatabaseError> {
    let mut rows = conn
        .query("SELECT COALESCE(MAX(version), 0) FROM _migrations", ())
        .await
        .map_err(|e| DatabaseError::Migration(format!("Failed to query migration version: {e}")))?;

    let row = rows
        .next()
        .await
        .map_err(|e| DatabaseError::Migration(format!("Failed to read migration version: {e}")))?;

    match row {
        Some(row) => row.get::<i64>(0).map_err(|e| {
            DatabaseError::Migration(format!("Failed to parse migration version: {e}"))
        }),
        None => Ok(0),
    }
}

/// Insert a version record into `_migrations`.
async fn record_version(conn: &Connection, version: i64, name: &str) -> Result<(), DatabaseError> {
    conn.execute(
        "INSERT OR IGNORE INTO _migrations (version, name) VALUES (?1, ?2)",
        libsql::params![version, name],
    )
    .await
    .map_err(|e| DatabaseError::Migration(format!("Failed to record migration V{version}: {e}")))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn test_conn() -> Connection {
        let db = libsql::Builder::new_local(":memory:")
            .build()
            .await
            .unwrap();
        db.connect().unwrap()
    }

    async fn count(conn: &Connection, sql: &str) -> i64 {
        let mut rows = conn.query(sql, ()).await.unwrap();
        let row = rows.next().await.unwrap().unwrap();
        row.get(0).unwrap()
    }

    #[tokio::test]
    async fn migrations_create_tables() {
        let conn = test_conn().await;
        run_migrations(&conn).await.unwrap();

        for table in &["_migrations", "profile_records"] {
            let mut rows = conn
                .query(
                    "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name=?1",
                    libsql::params![*table],
                )
                .await
                .unwrap();
            let row = rows.next().await.unwrap().unwrap();
            let count: i64 = row.get(0).unwrap();
            assert_eq!(count, 1, "Table '{}' should exist", table);
        }
    }

    #[tokio::test]
    async fn migrations_are_idempotent() {
        let conn = test_conn().await;
        run_migrations(&conn).await.unwrap();
        run_migrations(&conn).await.unwrap();

        let version = get_current_version(&conn).await.unwrap();
        assert_eq!(version, 2);
    }

    #[tokio::test]
    async fn legacy_keys_are_namespaced() {
        let conn = test_conn().await;

        // A database that only has V1 applied, holding legacy-keyed rows
        conn.execute_batch(MIGRATIONS[0].sql).await.unwrap();
        conn.execute(
            "CREATE TABLE _migrations (version INTEGER PRIMARY KEY, name TEXT NOT NULL, applied_at TEXT NOT NULL DEFAULT (datetime('now')))",
            (),
        )
        .await
        .unwrap();
        record_version(&conn, 1, "profile_records").await.unwrap();
        conn.execute_batch(
            "INSERT INTO profile_records (key, value) VALUES ('healthai_user_profile_u1', '{\"legacy\":1}');
             INSERT INTO profile_records (key, value) VALUES ('healthai_user_profile_u2', '{\"legacy\":2}');
             INSERT INTO profile_records (key, value) VALUES ('profile:u2', '{\"current\":2}');",
        )
        .await
        .unwrap();

        run_migrations(&conn).await.unwrap();

        assert_eq!(
            count(&conn, "SELECT COUNT(*) FROM profile_records WHERE key LIKE 'healthai%'").await,
            0
        );
        assert_eq!(
            count(&conn, "SELECT COUNT(*) FROM profile_records WHERE key = 'profile:u1'").await,
            1
        );

        // The existing namespaced record is not overwritten
        let mut rows = conn
            .query("SELECT value FROM profile_records WHERE key = 'profile:u2'", ())
            .await
            .unwrap();
        let value: String = rows.next().await.unwrap().unwrap().get(0).unwrap();
        assert_eq!(value, "{\"current\":2}");
    }

    #[tokio::test]
    async fn version_tracking() {
        let conn = test_conn().await;
        run_migrations(&conn).await.unwrap();

        let mut rows = conn
            .query("SELECT version, name FROM _migrations ORDER BY version", ())
            .await
            .unwrap();
        let row1 = rows.next().await.unwrap().unwrap();
        assert_eq!(row1.get::<i64>(0).unwrap(), 1);
        assert_eq!(row1.get::<String>(1).unwrap(), "profile_records");

        let row2 = rows.next().await.unwrap().unwrap();
        assert_eq!(row2.get::<i64>(0).unwrap(), 2);
        assert_eq!(row2.get::<String>(1).unwrap(), "namespace_legacy_profile_keys");
    }
}
