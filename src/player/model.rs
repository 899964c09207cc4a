//! Player state and operations.

use crate::config::PlayerOptions;
use crate::library::{Track, sample_tracks};
use crate::media::{MediaElement, MediaEvent};

use super::PlayerError;
use super::action::SongAction;

/// Label of the play/pause button: the action a click will perform.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PlayLabel {
    Play,
    Pause,
}

impl PlayLabel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Play => "Play",
            Self::Pause => "Pause",
        }
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct PlayerState {
    pub playing: bool,
    /// Always within `0..tracks.len()`.
    pub index: usize,
}

pub struct Player<M> {
    media: M,
    tracks: Vec<Track>,
    state: PlayerState,
    /// One flag per list entry; exactly one is set.
    active: Vec<bool>,
    play_label: PlayLabel,
}

impl<M: MediaElement> Player<M> {
    /// Build a player around `media`. Falls back to the sample playlist when
    /// `tracks` is `None` or empty.
    pub fn new(media: M, options: PlayerOptions, tracks: Option<Vec<Track>>) -> Self {
        let tracks = match tracks {
            Some(t) if !t.is_empty() => t,
            _ => sample_tracks(),
        };
        let autoplay = options.autoplay;

        let mut player = Self {
            media,
            active: vec![false; tracks.len()],
            tracks,
            state: PlayerState {
                playing: autoplay,
                index: 0,
            },
            play_label: if autoplay {
                PlayLabel::Pause
            } else {
                PlayLabel::Play
            },
        };

        player.load_current();
        if autoplay {
            player.media.play();
        }
        player.set_active(0);
        player
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn state(&self) -> PlayerState {
        self.state
    }

    pub fn current_track(&self) -> &Track {
        &self.tracks[self.state.index]
    }

    pub fn play_label(&self) -> PlayLabel {
        self.play_label
    }

    /// Whether list entry `index` carries the active marker.
    pub fn is_active(&self, index: usize) -> bool {
        self.active.get(index).copied().unwrap_or(false)
    }

    #[cfg(test)]
    pub fn media(&self) -> &M {
        &self.media
    }

    #[cfg(test)]
    pub fn media_mut(&mut self) -> &mut M {
        &mut self.media
    }

    /// Toggle between playing and paused.
    pub fn play(&mut self) {
        self.state.playing = !self.state.playing;
        if self.state.playing {
            self.media.play();
            self.play_label = PlayLabel::Pause;
        } else {
            self.media.pause();
            self.play_label = PlayLabel::Play;
        }
        log::debug!("player playing={}", self.state.playing);
    }

    /// The current track ran out; a later toggle replays it.
    pub fn media_end_update(&mut self) {
        self.state.playing = false;
        self.play_label = PlayLabel::Play;
        log::debug!("track {} ended", self.state.index);
    }

    /// Drain the element's signals. Only the end of a track changes state.
    pub fn pump_media_events(&mut self) {
        for event in self.media.poll_events() {
            if event == MediaEvent::Ended {
                self.media_end_update();
            }
        }
    }

    /// Move to another track and start playing it.
    ///
    /// `Index(i)` accepts `i == tracks.len()`, which lands on the first
    /// track; anything past that is rejected without touching state.
    pub fn change_song(&mut self, action: SongAction) -> Result<(), PlayerError> {
        let n = self.tracks.len();
        let index = match action {
            SongAction::Prev => (self.state.index + n - 1) % n,
            SongAction::Next => (self.state.index + 1) % n,
            SongAction::Index(i) if i <= n => i % n,
            SongAction::Index(i) => {
                return Err(PlayerError::InvalidAction(format!(
                    "index {i} out of range for {n} tracks"
                )));
            }
        };

        self.state.index = index;
        self.set_active(index);
        self.load_current();
        self.state.playing = false;
        self.play();
        Ok(())
    }

    /// Parse a textual action (`"prev"`, `"next"` or an index) and apply it.
    pub fn change_song_str(&mut self, action: &str) -> Result<(), PlayerError> {
        self.change_song(action.parse()?)
    }

    /// A click on list entry `index`.
    pub fn select(&mut self, index: usize) -> Result<(), PlayerError> {
        self.change_song(SongAction::Index(index))
    }

    fn set_active(&mut self, index: usize) {
        for (i, flag) in self.active.iter_mut().enumerate() {
            *flag = i == index;
        }
    }

    fn load_current(&mut self) {
        let file = self.tracks[self.state.index].file.clone();
        if let Err(e) = self.media.load(&file) {
            log::warn!("failed to load {file}: {e}");
        }
    }
}
