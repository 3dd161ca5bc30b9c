//! Configuration types.

use std::path::PathBuf;

use crate::error::ConfigError;

/// Daily goals for the dashboard metric widgets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GoalsConfig {
    pub steps: u32,
    /// Glasses of water per day.
    pub water: u32,
    /// Kilocalories per day.
    pub calories: u32,
}

impl Default for GoalsConfig {
    fn default() -> Self {
        Self {
            steps: 10_000,
            water: 8,
            calories: 2_000,
        }
    }
}

/// Service configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Path of the libSQL database file.
    pub db_path: PathBuf,
    /// Port for the HTTP API.
    pub port: u16,
    /// User id handed to the static identity provider. `None` means the
    /// session starts signed out.
    pub user_id: Option<String>,
    pub goals: GoalsConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from("./data/healthai.db"),
            port: 8080,
            user_id: None,
            goals: GoalsConfig::default(),
        }
    }
}

impl AppConfig {
    /// Build config from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup.
    ///
    /// Values that fail to parse are logged and replaced by their default.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let db_path = lookup("HEALTHAI_DB_PATH")
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.db_path);

        let user_id = lookup("HEALTHAI_USER_ID")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        Self {
            db_path,
            port: parse_or(&lookup, "HEALTHAI_PORT", defaults.port),
            user_id,
            goals: GoalsConfig {
                steps: parse_or(&lookup, "HEALTHAI_STEPS_GOAL", defaults.goals.steps),
                water: parse_or(&lookup, "HEALTHAI_WATER_GOAL", defaults.goals.water),
                calories: parse_or(&lookup, "HEALTHAI_CALORIES_GOAL", defaults.goals.calories),
            },
        }
    }

    /// Reject values that parse but make no sense, such as a zero goal.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let goals = [
            ("HEALTHAI_STEPS_GOAL", self.goals.steps),
            ("HEALTHAI_WATER_GOAL", self.goals.water),
            ("HEALTHAI_CALORIES_GOAL", self.goals.calories),
        ];
        for (key, value) in goals {
            if value == 0 {
                return Err(ConfigError::InvalidValue {
                    key: key.to_string(),
                    message: "goal must be greater than zero".to_string(),
                });
            }
        }
        Ok(())
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr + std::fmt::Display + Copy,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!(key, value = %raw, default = %default, "Invalid config value, using default");
            default
        }),
        None => default,
    }
}
