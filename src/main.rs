use std::sync::Arc;

use healthai::config::AppConfig;
use healthai::error::Result;
use healthai::identity::StaticIdentityProvider;
use healthai::profile::{ProfileManager, profile_routes};
use healthai::store::LibSqlBackend;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config = AppConfig::from_env();
    config.validate()?;

    eprintln!("🩺 HealthAI v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("   Database: {}", config.db_path.display());
    eprintln!("   API: http://0.0.0.0:{}/api/profile", config.port);
    match config.user_id.as_deref() {
        Some(user) => eprintln!("   User: {}", user),
        None => eprintln!("   User: (signed out)"),
    }

    // ── Database ─────────────────────────────────────────────────────────
    let store = Arc::new(LibSqlBackend::new_local(&config.db_path).await?);

    // ── Profile session ──────────────────────────────────────────────────
    let identity = Arc::new(StaticIdentityProvider::from_user_id(config.user_id.as_deref()));
    let manager = Arc::new(ProfileManager::new(store, identity));
    let phase = manager.resolve().await;
    tracing::info!(%phase, "Profile session started");

    // ── HTTP ─────────────────────────────────────────────────────────────
    let app = profile_routes(Arc::clone(&manager), config.goals);
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
    tracing::info!(port = config.port, "Profile API server started");
    axum::serve(listener, app).await?;

    Ok(())
}
