//! Caller identity and the identity-provider seam.
//!
//! Authentication itself is delegated to an external provider. The profile
//! layer only needs to know who the caller is and how to sign them out.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use crate::error::IdentityError;

/// Namespace prefix for profile record keys.
pub const PROFILE_KEY_PREFIX: &str = "profile:";

/// Opaque, non-empty identifier of an authenticated caller.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Identity(String);

impl Identity {
    pub fn new(id: impl Into<String>) -> Result<Self, IdentityError> {
        let id = id.into();
        if id.is_empty() {
            return Err(IdentityError::Invalid("identity must not be empty".into()));
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Storage key of this identity's profile record.
    pub fn storage_key(&self) -> String {
        format!("{PROFILE_KEY_PREFIX}{}", self.0)
    }
}

impl std::fmt::Display for Identity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Identity {
    type Error = IdentityError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Identity> for String {
    fn from(value: Identity) -> Self {
        value.0
    }
}

/// External source of the caller's identity.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// The currently signed-in identity, or `None` when signed out.
    async fn current_identity(&self) -> Result<Option<Identity>, IdentityError>;

    /// End the provider-side session.
    async fn sign_out(&self) -> Result<(), IdentityError>;
}

/// Provider that hands out a fixed, configured identity until sign-out.
pub struct StaticIdentityProvider {
    current: RwLock<Option<Identity>>,
}

impl StaticIdentityProvider {
    pub fn new(identity: Option<Identity>) -> Self {
        Self {
            current: RwLock::new(identity),
        }
    }

    /// Build from an optional raw user id; empty ids mean signed out.
    pub fn from_user_id(user_id: Option<&str>) -> Self {
        Self::new(user_id.and_then(|id| Identity::new(id).ok()))
    }

    /// Sign a (new) identity in.
    pub async fn sign_in(&self, identity: Identity) {
        tracing::info!(identity = %identity, "Identity signed in");
        *self.current.write().await = Some(identity);
    }
}

#[async_trait]
impl IdentityProvider for StaticIdentityProvider {
    async fn current_identity(&self) -> Result<Option<Identity>, IdentityError> {
        Ok(self.current.read().await.clone())
    }

    async fn sign_out(&self) -> Result<(), IdentityError> {
        if let Some(identity) = self.current.write().await.take() {
            tracing::info!(identity = %identity, "Identity signed out");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_key_is_namespaced() {
        let id = Identity::new("u1").unwrap();
        assert_eq!(id.storage_key(), "profile:u1");
    }

    #[test]
    fn distinct_identities_have_distinct_keys() {
        let a = Identity::new("u1").unwrap();
        let b = Identity::new("u2").unwrap();
        assert_ne!(a.storage_key(), b.storage_key());
        assert_eq!(a.storage_key(), Identity::new("u1").unwrap().storage_key());
    }

    #[test]
    fn empty_identity_rejected() {
        assert!(Identity::new("").is_err());
        assert!(serde_json::from_str::<Identity>("\"\"").is_err());
    }

    #[test]
    fn identity_serializes_as_plain_string() {
        let id = Identity::new("abc").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"abc\"");
    }

    #[tokio::test]
    async fn static_provider_sign_out_clears_identity() {
        let provider = StaticIdentityProvider::from_user_id(Some("u1"));
        assert_eq!(
            provider.current_identity().await.unwrap(),
            Some(Identity::new("u1").unwrap())
        );

        provider.sign_out().await.unwrap();
        assert!(provider.current_identity().await.unwrap().is_none());

        // Signing out twice is fine
        provider.sign_out().await.unwrap();
    }

    #[tokio::test]
    async fn static_provider_sign_in() {
        let provider = StaticIdentityProvider::from_user_id(None);
        assert!(provider.current_identity().await.unwrap().is_none());

        provider.sign_in(Identity::new("u9").unwrap()).await;
        assert_eq!(
            provider.current_identity().await.unwrap().unwrap().as_str(),
            "u9"
        );
    }
}
