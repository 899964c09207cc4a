use std::{env, path::PathBuf};

use super::SettingsError;
use super::merge::with_defaults;
use super::schema::Settings;

/// Configuration loading helpers.
///
/// `Settings::load` reads an optional config file, lays environment
/// variables (prefix `PLAYDECK__`) over it and merges the result over the
/// struct defaults.
impl Settings {
    /// Load settings from an optional config file and the environment.
    pub fn load() -> Result<Self, SettingsError> {
        let config_path = resolve_config_path();

        let mut builder = ::config::Config::builder();

        if let Some(path) = &config_path {
            builder = builder.add_source(::config::File::from(path.as_path()).required(false));
        }

        builder = builder.add_source(
            ::config::Environment::with_prefix("PLAYDECK")
                .separator("__")
                .try_parsing(true),
        );

        let cfg = builder.build()?;
        let overrides: toml::Value = cfg.try_deserialize()?;
        log::debug!("loaded configuration from {config_path:?}");
        with_defaults(overrides)
    }

    /// Perform basic validation checks on loaded settings.
    pub fn validate(&self) -> Result<(), SettingsError> {
        let volume = self.cinema.volume;
        if !volume.is_finite() || !(0.0..=1.0).contains(&volume) {
            return Err(SettingsError::Invalid(format!(
                "cinema.volume must be within 0..=1, got {volume}"
            )));
        }
        if self.library.extensions.iter().all(|e| e.trim().is_empty()) {
            return Err(SettingsError::Invalid(
                "library.extensions must name at least one extension".to_string(),
            ));
        }
        Ok(())
    }
}

/// Resolve the config path from `PLAYDECK_CONFIG_PATH` or XDG defaults.
pub fn resolve_config_path() -> Option<PathBuf> {
    if let Some(p) = env::var_os("PLAYDECK_CONFIG_PATH") {
        return Some(PathBuf::from(p));
    }
    default_config_path()
}

/// Compute the default config path under `$XDG_CONFIG_HOME/playdeck/config.toml`
/// or `~/.config/playdeck/config.toml` when `XDG_CONFIG_HOME` is not set.
pub fn default_config_path() -> Option<PathBuf> {
    let config_home = if let Some(xdg) = env::var_os("XDG_CONFIG_HOME") {
        Some(PathBuf::from(xdg))
    } else {
        env::var_os("HOME").map(|home| PathBuf::from(home).join(".config"))
    };

    config_home.map(|d| d.join("playdeck").join("config.toml"))
}
