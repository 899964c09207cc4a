//! Configuration loader and schema types.
//!
//! This module exposes the option types consumed by the player and the
//! cinema overlay, the recursive merge used to lay user options over the
//! defaults, and helpers to load configuration from disk.

mod load;
pub mod merge;
mod schema;

pub use schema::*;

/// Errors raised while loading or merging settings.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error(transparent)]
    Source(#[from] ::config::ConfigError),
    #[error("failed to serialize defaults: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("invalid option value: {0}")]
    Deserialize(#[from] toml::de::Error),
    #[error("invalid setting: {0}")]
    Invalid(String),
}

#[cfg(test)]
mod tests;
