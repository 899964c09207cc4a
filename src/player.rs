//! Playlist player: a track list, one media element, prev/next/select
//! navigation and a play/pause toggle.

mod action;
mod model;

pub use action::SongAction;
pub use model::*;

/// Errors returned by player operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlayerError {
    #[error("invalid song action: {0}")]
    InvalidAction(String),
}

#[cfg(test)]
mod tests;
