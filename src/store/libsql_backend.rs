//! libSQL-backed `ProfileStore`.
//!
//! Supports local file and in-memory databases.

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use libsql::{Connection, Database as LibSqlDatabase, params};
use tracing::{debug, info};

use crate::error::DatabaseError;
use crate::identity::Identity;
use crate::profile::UserProfile;
use crate::store::migrations;
use crate::store::traits::{ProfileStore, decode_record, encode_record};

/// libSQL database backend.
///
/// Stores a single connection that is reused for all operations.
/// `libsql::Connection` is `Send + Sync` and safe for concurrent async use.
pub struct LibSqlBackend {
    #[allow(dead_code)]
    db: Arc<LibSqlDatabase>,
    conn: Connection,
}

impl LibSqlBackend {
    /// Open (or create) a local database file and run migrations.
    pub async fn new_local(path: &Path) -> Result<Self, DatabaseError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                DatabaseError::Pool(format!("Failed to create database directory: {e}"))
            })?;
        }

        let db = libsql::Builder::new_local(path)
            .build()
            .await
            .map_err(|e| DatabaseError::Pool(format!("Failed to open libSQL database: {e}")))?;

        let backend = Self::from_database(db)?;
        backend.run_migrations().await?;
        info!(path = %path.display(), "Database opened");
        Ok(backend)
    }

    /// Create an in-memory database (for tests).
    pub async fn new_memory() -> Result<Self, DatabaseError> {
        let db = libsql::Builder::new_local(":memory:")
            .build()
            .await
            .map_err(|e| {
                DatabaseError::Pool(format!("Failed to create in-memory database: {e}"))
            })?;

        let backend = Self::from_database(db)?;
        backend.run_migrations().await?;
        Ok(backend)
    }

    fn from_database(db: LibSqlDatabase) -> Result<Self, DatabaseError> {
        let conn = db
            .connect()
            .map_err(|e| DatabaseError::Pool(format!("Failed to create connection: {e}")))?;
        Ok(Self {
            db: Arc::new(db),
            conn,
        })
    }

    /// Run all pending schema migrations.
    pub async fn run_migrations(&self) -> Result<(), DatabaseError> {
        migrations::run_migrations(&self.conn).await
    }

    /// Raw record text stored under `key`.
    pub async fn get_raw(&self, key: &str) -> Result<Option<String>, DatabaseError> {
        let mut rows = self
            .conn
            .query(
                "SELECT value FROM profile_records WHERE key = ?1",
                params![key],
            )
            .await
            .map_err(|e| DatabaseError::Query(format!("get_raw: {e}")))?;

        match rows.next().await {
            Ok(Some(row)) => {
                let value: String = row
                    .get(0)
                    .map_err(|e| DatabaseError::Query(format!("get_raw: {e}")))?;
                Ok(Some(value))
            }
            Ok(None) => Ok(None),
            Err(e) => Err(DatabaseError::Query(format!("get_raw: {e}"))),
        }
    }

    /// Upsert raw record text under `key`, bypassing serialization.
    pub async fn put_raw(&self, key: &str, raw: &str) -> Result<(), DatabaseError> {
        let now = Utc::now().to_rfc3339();
        self.conn
            .execute(
                "INSERT INTO profile_records (key, value, updated_at) VALUES (?1, ?2, ?3)
                 ON CONFLICT (key) DO UPDATE SET value = ?2, updated_at = ?3",
                params![key, raw, now],
            )
            .await
            .map_err(|e| DatabaseError::Query(format!("put_raw: {e}")))?;
        Ok(())
    }
}

#[async_trait]
impl ProfileStore for LibSqlBackend {
    async fn read(&self, identity: &Identity) -> Result<Option<UserProfile>, DatabaseError> {
        let key = identity.storage_key();
        let raw = self.get_raw(&key).await?;
        Ok(raw.and_then(|raw| decode_record(&key, &raw)))
    }

    async fn write(&self, identity: &Identity, profile: &UserProfile) -> Result<(), DatabaseError> {
        let key = identity.storage_key();
        let raw = encode_record(profile)?;
        self.put_raw(&key, &raw).await?;
        debug!(key = %key, "Profile record written");
        Ok(())
    }

    async fn delete(&self, identity: &Identity) -> Result<bool, DatabaseError> {
        let key = identity.storage_key();
        let count = self
            .conn
            .execute(
                "DELETE FROM profile_records WHERE key = ?1",
                params![key.as_str()],
            )
            .await
            .map_err(|e| DatabaseError::Query(format!("delete: {e}")))?;
        debug!(key = %key, deleted = count > 0, "Profile record deleted");
        Ok(count > 0)
    }
}

// ── Tests ───────────────────────────────────────────────────────────
