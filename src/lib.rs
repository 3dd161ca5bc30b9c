//! HealthAI: profile service behind the health dashboard.

pub mod config;
pub mod error;
pub mod health;
pub mod identity;
pub mod profile;
pub mod store;
