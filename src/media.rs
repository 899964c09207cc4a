//! The native media element the widgets drive.
//!
//! Widgets never create or decode media themselves; they talk to a
//! `MediaElement` and react to the `MediaEvent`s it reports.

use std::path::PathBuf;
use std::time::Duration;

mod rodio_media;

pub use rodio_media::RodioMedia;

#[cfg(test)]
pub(crate) mod fake;

/// Signals delivered by a media element.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MediaEvent {
    /// Playback position moved.
    TimeUpdate,
    /// The total duration became known or changed.
    DurationChange,
    /// More of the resource became available.
    Progress,
    /// Playback reached the end of the resource.
    Ended,
}

/// A contiguous buffered span of the resource.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct TimeRange {
    pub start: Duration,
    pub end: Duration,
}

#[derive(Debug, thiserror::Error)]
pub enum MediaError {
    #[error("failed to open {path:?}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to decode {path:?}: {reason}")]
    Decode { path: PathBuf, reason: String },
    #[error("no media source loaded")]
    NoSource,
}

/// Playback primitives of a media element.
pub trait MediaElement {
    /// Point the element at a new resource, replacing the current one.
    fn load(&mut self, source: &str) -> Result<(), MediaError>;
    fn play(&mut self);
    fn pause(&mut self);
    fn current_time(&self) -> Duration;
    fn seek(&mut self, to: Duration) -> Result<(), MediaError>;
    /// `None` while the duration is unknown or the source is unbounded.
    fn duration(&self) -> Option<Duration>;
    fn set_volume(&mut self, volume: f64);
    /// Buffered spans ordered by start time.
    fn buffered(&self) -> Vec<TimeRange>;
    /// Drain the signals emitted since the last call. While playing, every
    /// position update is paired with a `Progress`.
    fn poll_events(&mut self) -> Vec<MediaEvent>;
}
