use std::str::FromStr;

use super::PlayerError;

/// Where `Player::change_song` should move to.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SongAction {
    Prev,
    Next,
    /// Jump straight to a list position.
    Index(usize),
}

impl FromStr for SongAction {
    type Err = PlayerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "prev" => Ok(Self::Prev),
            "next" => Ok(Self::Next),
            other => other
                .parse::<usize>()
                .map(Self::Index)
                .map_err(|_| PlayerError::InvalidAction(s.to_string())),
        }
    }
}
