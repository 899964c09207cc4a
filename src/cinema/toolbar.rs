//! Rendered state of the overlay toolbar.

use std::time::Duration;

/// Label shown when the media has no usable duration.
pub const NOT_APPLICABLE: &str = "Not Applicable";

/// Volume at or above which the loud icon is shown.
const HIGH_VOLUME: f64 = 0.6;

/// Icon on the play button: the action a click performs, or replay after the end.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PlayIcon {
    Play,
    Pause,
    Replay,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum VolumeIcon {
    Mute,
    Low,
    High,
}

impl VolumeIcon {
    pub fn for_volume(volume: f64) -> Self {
        if volume == 0.0 {
            Self::Mute
        } else if volume >= HIGH_VOLUME {
            Self::High
        } else {
            Self::Low
        }
    }
}

/// Format a position as `M:SS`, truncating partial seconds.
pub fn format_time(t: Duration) -> String {
    let secs = t.as_secs();
    format!("{}:{:02}", secs / 60, secs % 60)
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toolbar {
    pub play_icon: PlayIcon,
    pub elapsed: String,
    pub duration: String,
    /// Played share of the media, `0..=100`.
    pub progress_percent: f64,
    /// Buffered share of the media, `0..=100`.
    pub buffered_percent: f64,
    pub volume_icon: VolumeIcon,
    pub volume: f64,
    pub visible: bool,
    pub volume_bar_visible: bool,
}

impl Toolbar {
    pub(super) fn new(visible: bool, volume_bar_visible: bool) -> Self {
        Self {
            play_icon: PlayIcon::Play,
            elapsed: format_time(Duration::ZERO),
            duration: NOT_APPLICABLE.to_string(),
            progress_percent: 0.0,
            buffered_percent: 0.0,
            volume_icon: VolumeIcon::High,
            volume: 1.0,
            visible,
            volume_bar_visible,
        }
    }
}
