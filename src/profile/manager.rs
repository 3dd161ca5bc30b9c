//! Owns the session's in-memory profile and coordinates
//! identity resolution with the profile store.

use std::sync::Arc;

use serde::Serialize;
use tokio::sync::RwLock;

use crate::identity::{Identity, IdentityProvider};
use crate::store::ProfileStore;

use super::model::{OnboardingData, ProfileUpdate, UserProfile};
use super::state::SessionPhase;

/// Mutable session data guarded by the manager's lock.
#[derive(Debug, Default)]
struct Session {
    phase: SessionPhase,
    identity: Option<Identity>,
    profile: UserProfile,
}

impl Session {
    fn status(&self) -> ProfileStatus {
        ProfileStatus {
            phase: self.phase,
            identity: self.identity.clone(),
            onboarding_complete: self.profile.onboarding_complete,
            profile: self.profile.clone(),
        }
    }

    fn transition(&mut self, target: SessionPhase) {
        debug_assert!(
            self.phase.can_transition_to(target),
            "invalid session transition {} -> {}",
            self.phase,
            target
        );
        tracing::debug!(from = %self.phase, to = %target, "Session phase transition");
        self.phase = target;
    }
}

/// Session-scoped owner of the authoritative [`UserProfile`].
///
/// Store failures are logged and dropped; no operation here returns an error.
pub struct ProfileManager {
    store: Arc<dyn ProfileStore>,
    identity_provider: Arc<dyn IdentityProvider>,
    session: RwLock<Session>,
}

impl ProfileManager {
    /// Create a manager in the `Unresolved` phase holding the default profile.
    pub fn new(store: Arc<dyn ProfileStore>, identity_provider: Arc<dyn IdentityProvider>) -> Self {
        Self {
            store,
            identity_provider,
            session: RwLock::new(Session::default()),
        }
    }

    /// Resolve the caller's identity and load their profile.
    ///
    /// Runs at most once per session: when the session already has an
    /// identity this returns the current phase without touching the store.
    /// When the provider has no identity (or fails) the session stays
    /// `Unresolved`.
    pub async fn resolve(&self) -> SessionPhase {
        {
            let session = self.session.read().await;
            if session.phase.has_identity() {
                return session.phase;
            }
        }

        let identity = match self.identity_provider.current_identity().await {
            Ok(Some(identity)) => identity,
            Ok(None) => {
                tracing::debug!("No identity available, profile stays unresolved");
                return SessionPhase::Unresolved;
            }
            Err(e) => {
                tracing::warn!(error = %e, "Identity resolution failed");
                return SessionPhase::Unresolved;
            }
        };

        let mut session = self.session.write().await;
        if session.phase.has_identity() {
            // Another caller resolved while we were waiting on the provider
            return session.phase;
        }

        let stored = match self.store.read(&identity).await {
            Ok(stored) => stored,
            Err(e) => {
                tracing::warn!(identity = %identity, error = %e, "Failed to read stored profile");
                None
            }
        };
        let found = stored.is_some();
        session.profile = stored.unwrap_or_default();
        session.identity = Some(identity);
        session.transition(SessionPhase::Loaded);
        session.transition(SessionPhase::Active);

        tracing::info!(
            identity = %session.identity.as_ref().map(Identity::as_str).unwrap_or_default(),
            stored_profile = found,
            onboarding_complete = session.profile.onboarding_complete,
            "Profile session resolved"
        );
        session.phase
    }

    /// Snapshot of the current profile.
    pub async fn profile(&self) -> UserProfile {
        self.session.read().await.profile.clone()
    }

    pub async fn is_onboarding_complete(&self) -> bool {
        self.session.read().await.profile.onboarding_complete
    }

    pub async fn phase(&self) -> SessionPhase {
        self.session.read().await.phase
    }

    pub async fn identity(&self) -> Option<Identity> {
        self.session.read().await.identity.clone()
    }

    /// Merge `update` into the profile.
    ///
    /// The result is persisted only when it is marked onboarding-complete.
    pub async fn update(&self, update: ProfileUpdate) -> UserProfile {
        let mut session = self.session.write().await;
        self.apply_update(&mut session, update).await
    }

    /// Replace the profile with `data` and mark onboarding complete.
    pub async fn complete_onboarding(&self, data: OnboardingData) -> UserProfile {
        let mut session = self.session.write().await;
        self.apply_onboarding(&mut session, data).await
    }

    /// Restore the default profile and forget the stored record.
    pub async fn reset(&self) {
        let mut session = self.session.write().await;
        self.apply_reset(&mut session).await;
    }

    /// Like [`update`](Self::update), but only while `Active`.
    ///
    /// The phase is checked under the same lock as the mutation, so a
    /// concurrent sign-out either lands before (returns `None`) or after.
    pub async fn update_if_active(&self, update: ProfileUpdate) -> Option<UserProfile> {
        let mut session = self.session.write().await;
        if !session.phase.has_identity() {
            return None;
        }
        Some(self.apply_update(&mut session, update).await)
    }

    /// Like [`complete_onboarding`](Self::complete_onboarding), but only while `Active`.
    pub async fn complete_onboarding_if_active(&self, data: OnboardingData) -> Option<UserProfile> {
        let mut session = self.session.write().await;
        if !session.phase.has_identity() {
            return None;
        }
        Some(self.apply_onboarding(&mut session, data).await)
    }

    /// Like [`reset`](Self::reset), but only while `Active`. Returns the
    /// status after the reset.
    pub async fn reset_if_active(&self) -> Option<ProfileStatus> {
        let mut session = self.session.write().await;
        if !session.phase.has_identity() {
            return None;
        }
        self.apply_reset(&mut session).await;
        Some(session.status())
    }

    async fn apply_update(&self, session: &mut Session, update: ProfileUpdate) -> UserProfile {
        update.apply_to(&mut session.profile);

        if session.profile.onboarding_complete {
            self.persist(session).await;
        } else {
            tracing::debug!("Profile updated before onboarding completed, not persisted");
        }
        session.profile.clone()
    }

    async fn apply_onboarding(&self, session: &mut Session, data: OnboardingData) -> UserProfile {
        session.profile = data.into_profile();
        self.persist(session).await;
        tracing::info!(name = %session.profile.name, "Onboarding completed");
        session.profile.clone()
    }

    async fn apply_reset(&self, session: &mut Session) {
        session.profile = UserProfile::default();

        if let Some(identity) = session.identity.as_ref() {
            match self.store.delete(identity).await {
                Ok(existed) => {
                    tracing::info!(identity = %identity, existed, "Profile reset");
                }
                Err(e) => {
                    tracing::warn!(identity = %identity, error = %e, "Failed to delete profile record");
                }
            }
        }
    }

    /// Sign the caller out and drop back to `Unresolved`.
    ///
    /// Leaves the manager in the same state as a freshly created one; the
    /// stored record is kept for the next sign-in.
    pub async fn sign_out(&self) {
        if let Err(e) = self.identity_provider.sign_out().await {
            tracing::warn!(error = %e, "Identity provider sign-out failed");
        }

        let mut session = self.session.write().await;
        if session.phase.has_identity() {
            session.transition(SessionPhase::Unresolved);
        }
        session.identity = None;
        session.profile = UserProfile::default();
    }

    /// Everything presentation needs to render the session.
    pub async fn status(&self) -> ProfileStatus {
        self.session.read().await.status()
    }

    async fn persist(&self, session: &Session) {
        let Some(identity) = session.identity.as_ref() else {
            tracing::debug!("No identity resolved, profile kept in memory only");
            return;
        };
        if let Err(e) = self.store.write(identity, &session.profile).await {
            tracing::warn!(identity = %identity, error = %e, "Failed to persist user profile");
        }
    }
}

/// Session snapshot returned by the REST endpoint.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileStatus {
    pub phase: SessionPhase,
    pub identity: Option<Identity>,
    pub onboarding_complete: bool,
    pub profile: UserProfile,
}
