//! The durable, identity-keyed profile record store.

use async_trait::async_trait;

use crate::error::DatabaseError;
use crate::identity::Identity;
use crate::profile::UserProfile;

/// Backend-agnostic persistence of one profile record per identity.
///
/// Keys are derived with [`Identity::storage_key`], so operations on one
/// identity never touch another identity's record.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// The saved profile for `identity`.
    ///
    /// Returns `Ok(None)` when no record exists *or* the stored record fails
    /// to parse. Corrupt records are left in place.
    async fn read(&self, identity: &Identity) -> Result<Option<UserProfile>, DatabaseError>;

    /// Store `profile` under `identity`, replacing any prior record.
    async fn write(&self, identity: &Identity, profile: &UserProfile) -> Result<(), DatabaseError>;

    /// Remove the record for `identity`. Returns whether one existed.
    async fn delete(&self, identity: &Identity) -> Result<bool, DatabaseError>;
}

/// Serialize a profile into its stored text form.
pub fn encode_record(profile: &UserProfile) -> Result<String, DatabaseError> {
    serde_json::to_string(profile).map_err(|e| DatabaseError::Serialization(e.to_string()))
}

/// Parse a stored record, treating anything malformed as absent.
pub fn decode_record(key: &str, raw: &str) -> Option<UserProfile> {
    match serde_json::from_str(raw) {
        Ok(profile) => Some(profile),
        Err(e) => {
            tracing::warn!(key, error = %e, "Ignoring unparseable profile record");
            None
        }
    }
}
