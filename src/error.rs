//! Error types for HealthAI.

/// Top-level error type for the service.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] DatabaseError),

    #[error("Identity error: {0}")]
    Identity(#[from] IdentityError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-related errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// Database-related errors.
#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    #[error("Connection pool error: {0}")]
    Pool(String),

    #[error("Query failed: {0}")]
    Query(String),

    #[error("Migration failed: {0}")]
    Migration(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Errors reported by an identity provider.
#[derive(Debug, thiserror::Error)]
pub enum IdentityError {
    #[error("Identity provider {provider} unavailable: {reason}")]
    Unavailable { provider: String, reason: String },

    #[error("Invalid identity: {0}")]
    Invalid(String),
}

/// Result type alias for the service.
pub type Result<T> = std::result::Result<T, Error>;
