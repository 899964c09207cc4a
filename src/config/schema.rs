use serde::{Deserialize, Serialize};

use super::SettingsError;
use super::merge::with_defaults;

/// Top-level application settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/playdeck/config.toml` or `~/.config/playdeck/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `PLAYDECK__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub player: PlayerOptions,
    pub cinema: CinemaOptions,
    pub library: LibrarySettings,
}

/// Options recognised by the playlist player.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerOptions {
    /// Start playing the first track as soon as the player is built.
    pub autoplay: bool,
}

impl PlayerOptions {
    /// Defaults with `overrides` merged on top.
    pub fn merged(overrides: toml::Value) -> Result<Self, SettingsError> {
        with_defaults(overrides)
    }
}

/// Options recognised by the cinema overlay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CinemaOptions {
    /// Start playback once the overlay is attached.
    pub autoplay: bool,
    /// Initial volume in `0..=1`.
    pub volume: f64,
    /// Which toolbar parts are rendered.
    pub display: DisplayOptions,
    /// Which toolbar parts hide until hovered.
    pub animate: AnimateOptions,
}

impl Default for CinemaOptions {
    fn default() -> Self {
        Self {
            autoplay: false,
            volume: 1.0,
            display: DisplayOptions::default(),
            animate: AnimateOptions::default(),
        }
    }
}

impl CinemaOptions {
    /// Defaults with `overrides` merged on top.
    pub fn merged(overrides: toml::Value) -> Result<Self, SettingsError> {
        with_defaults(overrides)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayOptions {
    pub full_screen_btn: bool,
    pub times: bool,
    pub progress_bar: bool,
    pub volume_bar: bool,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            full_screen_btn: true,
            times: true,
            progress_bar: true,
            volume_bar: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimateOptions {
    /// Hide the toolbar until the pointer is over the media.
    pub toolbar: bool,
    /// Hide the volume bar until the pointer is over the volume button.
    pub volume_bar: bool,
}

impl Default for AnimateOptions {
    fn default() -> Self {
        Self {
            toolbar: true,
            volume_bar: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LibrarySettings {
    /// File extensions to treat as playable media (case-insensitive, without dot).
    pub extensions: Vec<String>,
    /// Whether to follow symlinks during scanning.
    pub follow_links: bool,
    /// Whether to include hidden files/directories (dotfiles).
    pub include_hidden: bool,
    /// Whether to recurse into subdirectories.
    pub recursive: bool,
    /// Optional cap on directory recursion depth.
    pub max_depth: Option<usize>,
}

impl Default for LibrarySettings {
    fn default() -> Self {
        Self {
            extensions: vec!["mp3".into(), "flac".into(), "wav".into(), "ogg".into()],
            follow_links: true,
            include_hidden: true,
            recursive: true,
            max_depth: None,
        }
    }
}
