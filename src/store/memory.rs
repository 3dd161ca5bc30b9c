//! In-process profile store backed by a `HashMap` of raw record text.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::DatabaseError;
use crate::identity::Identity;
use crate::profile::UserProfile;
use crate::store::traits::{ProfileStore, decode_record, encode_record};

/// Volatile store keeping records as the same JSON text the durable
/// backend would, so malformed records behave identically.
#[derive(Default)]
pub struct MemoryStore {
    records: RwLock<HashMap<String, String>>,
    writes: AtomicUsize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Put raw record text under `key`, bypassing serialization.
    pub async fn put_raw(&self, key: impl Into<String>, raw: impl Into<String>) {
        self.records.write().await.insert(key.into(), raw.into());
    }

    /// Raw record text stored under `key`.
    pub async fn get_raw(&self, key: &str) -> Option<String> {
        self.records.read().await.get(key).cloned()
    }

    /// Number of `write` calls served so far.
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl ProfileStore for MemoryStore {
    async fn read(&self, identity: &Identity) -> Result<Option<UserProfile>, DatabaseError> {
        let key = identity.storage_key();
        let records = self.records.read().await;
        Ok(records.get(&key).and_then(|raw| decode_record(&key, raw)))
    }

    async fn write(&self, identity: &Identity, profile: &UserProfile) -> Result<(), DatabaseError> {
        let raw = encode_record(profile)?;
        self.records.write().await.insert(identity.storage_key(), raw);
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn delete(&self, identity: &Identity) -> Result<bool, DatabaseError> {
        Ok(self
            .records
            .write()
            .await
            .remove(&identity.storage_key())
            .is_some())
    }
}
