//! Session phase state machine for the profile manager.

use serde::{Deserialize, Serialize};

/// Where a profile session is in its lifecycle.
///
/// Progresses Unresolved → Loaded → Active. `Loaded` is transient: the
/// manager moves on to `Active` as soon as the stored profile is adopted.
/// Sign-out drops a session back to `Unresolved`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SessionPhase {
    /// No identity known yet; the profile is not authoritative.
    #[default]
    Unresolved,
    /// Identity known and profile fetched from the store (or defaulted).
    Loaded,
    /// Profile may be mutated and persisted.
    Active,
}

impl SessionPhase {
    /// Check if a transition from `self` to `target` is valid.
    pub fn can_transition_to(&self, target: SessionPhase) -> bool {
        use SessionPhase::*;
        matches!(
            (self, target),
            (Unresolved, Loaded) | (Loaded, Active) | (Active, Unresolved)
        )
    }

    /// Whether an identity is attached to this phase.
    pub fn has_identity(&self) -> bool {
        !matches!(self, Self::Unresolved)
    }
}

impl std::fmt::Display for SessionPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Unresolved => "unresolved",
            Self::Loaded => "loaded",
            Self::Active => "active",
        };
        write!(f, "{s}")
    }
}
