//! User profile lifecycle: model, validation, session manager and REST routes.

pub mod manager;
pub mod model;
pub mod routes;
pub mod state;
pub mod validation;

pub use manager::{ProfileManager, ProfileStatus};
pub use model::{BloodGroup, OnboardingData, ProfileUpdate, UserProfile};
pub use routes::{ProfileRouteState, profile_routes};
pub use state::SessionPhase;
pub use validation::{ProfileEditForm, ProfileForm, ValidationErrors, validate_edit, validate_onboarding};
