//! REST endpoints for the profile session and the pages built from it.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, patch, post},
};
use serde::Deserialize;
use tower_http::cors::{Any, CorsLayer};
use tracing::{debug, info};

use super::manager::ProfileManager;
use super::model::ProfileUpdate;
use super::validation::{ProfileEditForm, ProfileForm, validate_edit, validate_onboarding};
use crate::config::GoalsConfig;
use crate::health::{DailyMetrics, DietPlan, SAMPLE_WEEK, TipsPage, WeeklySummary, dashboard_summary};

/// State shared across handlers.
#[derive(Clone)]
pub struct ProfileRouteState {
    pub manager: Arc<ProfileManager>,
    pub goals: GoalsConfig,
}

/// Build the Axum router with the profile, session and dashboard routes.
pub fn profile_routes(manager: Arc<ProfileManager>, goals: GoalsConfig) -> Router {
    let state = ProfileRouteState { manager, goals };

    Router::new()
        .route("/health", get(health))
        .route(
            "/api/profile",
            get(get_profile).patch(edit_profile).delete(reset_profile),
        )
        .route("/api/profile/diet", patch(set_diet))
        .route("/api/onboarding", post(complete_onboarding))
        .route("/api/session/resolve", post(resolve_session))
        .route("/api/session/sign-out", post(sign_out))
        .route("/api/dashboard", get(dashboard))
        .route("/api/diet-plan", get(diet_plan))
        .route("/api/activity", get(activity))
        .route("/api/health-tips", get(health_tips))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

// ── Health ──────────────────────────────────────────────────────────────

async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "service": "healthai-profile"
    }))
}

// ── Session ─────────────────────────────────────────────────────────────

async fn resolve_session(State(state): State<ProfileRouteState>) -> impl IntoResponse {
    state.manager.resolve().await;
    Json(state.manager.status().await)
}

async fn sign_out(State(state): State<ProfileRouteState>) -> impl IntoResponse {
    state.manager.sign_out().await;
    info!("Session signed out");
    Json(state.manager.status().await)
}

fn unresolved() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::CONFLICT,
        Json(serde_json::json!({"error": "No signed-in user"})),
    )
}

// ── Profile ─────────────────────────────────────────────────────────────

async fn get_profile(State(state): State<ProfileRouteState>) -> impl IntoResponse {
    Json(state.manager.status().await)
}

async fn complete_onboarding(
    State(state): State<ProfileRouteState>,
    Json(form): Json<ProfileForm>,
) -> impl IntoResponse {
    match validate_onboarding(&form) {
        Ok(data) => match state.manager.complete_onboarding_if_active(data).await {
            Some(profile) => (StatusCode::OK, Json(serde_json::json!(profile))),
            None => unresolved(),
        },
        Err(errors) => {
            debug!(%errors, "Onboarding form rejected");
            (StatusCode::UNPROCESSABLE_ENTITY, Json(serde_json::json!(errors)))
        }
    }
}

async fn edit_profile(
    State(state): State<ProfileRouteState>,
    Json(form): Json<ProfileEditForm>,
) -> impl IntoResponse {
    match validate_edit(&form) {
        Ok(update) => match state.manager.update_if_active(update).await {
            Some(profile) => (StatusCode::OK, Json(serde_json::json!(profile))),
            None => unresolved(),
        },
        Err(errors) => {
            debug!(%errors, "Profile edit rejected");
            (StatusCode::UNPROCESSABLE_ENTITY, Json(serde_json::json!(errors)))
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct DietRequest {
    is_veg: bool,
}

async fn set_diet(
    State(state): State<ProfileRouteState>,
    Json(body): Json<DietRequest>,
) -> impl IntoResponse {
    match state.manager.update_if_active(ProfileUpdate::is_veg(body.is_veg)).await {
        Some(profile) => (StatusCode::OK, Json(serde_json::json!(profile))),
        None => unresolved(),
    }
}

async fn reset_profile(State(state): State<ProfileRouteState>) -> impl IntoResponse {
    match state.manager.reset_if_active().await {
        Some(status) => (StatusCode::OK, Json(serde_json::json!(status))),
        None => unresolved(),
    }
}

// ── Pages ───────────────────────────────────────────────────────────────

async fn dashboard(State(state): State<ProfileRouteState>) -> impl IntoResponse {
    let profile = state.manager.profile().await;
    let now = chrono::Local::now();
    let summary = {
        let mut rng = rand::thread_rng();
        dashboard_summary(
            &profile,
            &DailyMetrics::simulated(now.with_timezone(&chrono::Utc)),
            &state.goals,
            &now,
            &mut rng,
        )
    };
    Json(summary)
}

async fn diet_plan(State(state): State<ProfileRouteState>) -> impl IntoResponse {
    let profile = state.manager.profile().await;
    Json(DietPlan::for_profile(profile.is_veg))
}

async fn activity(State(state): State<ProfileRouteState>) -> impl IntoResponse {
    Json(WeeklySummary::from_days(&SAMPLE_WEEK, state.goals.steps))
}

async fn health_tips() -> impl IntoResponse {
    Json(TipsPage::new())
}
