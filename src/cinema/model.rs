use std::time::Duration;

use crate::config::CinemaOptions;
use crate::media::{MediaElement, MediaEvent};

use super::toolbar::{NOT_APPLICABLE, PlayIcon, Toolbar, VolumeIcon, format_time};

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CinemaState {
    pub playing: bool,
    /// Presentation-only enlargement of the overlay.
    pub full_screen: bool,
    pub volume: f64,
}

pub struct Cinema<M> {
    media: M,
    options: CinemaOptions,
    state: CinemaState,
    toolbar: Toolbar,
}

impl<M: MediaElement> Cinema<M> {
    /// Attach an overlay to `media`.
    ///
    /// `playing` starts as the inverse of `autoplay` and the constructor
    /// toggles once, so the element ends up playing exactly when
    /// `autoplay` is set.
    pub fn new(media: M, options: CinemaOptions) -> Self {
        let mut cinema = Self {
            media,
            state: CinemaState {
                playing: !options.autoplay,
                full_screen: false,
                volume: options.volume,
            },
            toolbar: Toolbar::new(!options.animate.toolbar, !options.animate.volume_bar),
            options,
        };

        cinema.set_volume(cinema.options.volume);
        cinema.duration_update();
        cinema.play_pause();
        cinema
    }

    pub fn state(&self) -> CinemaState {
        self.state
    }

    pub fn toolbar(&self) -> &Toolbar {
        &self.toolbar
    }

    pub fn options(&self) -> &CinemaOptions {
        &self.options
    }

    #[cfg(test)]
    pub fn media(&self) -> &M {
        &self.media
    }

    #[cfg(test)]
    pub fn media_mut(&mut self) -> &mut M {
        &mut self.media
    }

    pub fn play_pause(&mut self) {
        if self.state.playing {
            self.pause();
        } else {
            self.play();
        }
    }

    pub fn play(&mut self) {
        self.media.play();
        self.toolbar.play_icon = PlayIcon::Pause;
        self.state.playing = true;
    }

    pub fn pause(&mut self) {
        self.media.pause();
        self.toolbar.play_icon = PlayIcon::Play;
        self.state.playing = false;
    }

    pub fn full_screen(&mut self) {
        self.state.full_screen = !self.state.full_screen;
        log::debug!("cinema full_screen={}", self.state.full_screen);
    }

    /// Time-update render: elapsed label and progress fill.
    pub fn media_playing(&mut self) {
        let now = self.media.current_time();
        self.toolbar.elapsed = format_time(now);
        self.toolbar.progress_percent = self.percent_of_duration(now);
    }

    /// Seek to the position under a click `offset_x` cells into a bar `bar_width` wide.
    pub fn progress_bar_update(&mut self, offset_x: u16, bar_width: u16) {
        if bar_width == 0 {
            return;
        }
        let Some(duration) = self.known_duration() else {
            return;
        };

        let ratio = (f64::from(offset_x) / f64::from(bar_width)).clamp(0.0, 1.0);
        if let Err(e) = self.media.seek(duration.mul_f64(ratio)) {
            log::warn!("seek failed: {e}");
            return;
        }
        self.media_playing();
    }

    /// Render the latest buffered range that starts before the playback position.
    pub fn buffer_update(&mut self) {
        let now = self.media.current_time();
        let ranges = self.media.buffered();
        if let Some(range) = ranges.iter().rev().find(|r| r.start < now) {
            self.toolbar.buffered_percent = self.percent_of_duration(range.end);
        }
    }

    pub fn duration_update(&mut self) {
        self.toolbar.duration = match self.known_duration() {
            Some(d) => format_time(d),
            None => NOT_APPLICABLE.to_string(),
        };
    }

    /// Set the element volume, clamped to `0..=1`.
    pub fn set_volume(&mut self, volume: f64) {
        if volume.is_nan() {
            log::warn!("ignoring NaN volume");
            return;
        }
        let volume = volume.clamp(0.0, 1.0);
        self.media.set_volume(volume);
        self.state.volume = volume;
        self.toolbar.volume = volume;
        self.toolbar.volume_icon = VolumeIcon::for_volume(volume);
    }

    /// Volume slider input: a click `offset_x` cells into a bar `width` wide.
    pub fn set_volume_from_input(&mut self, offset_x: u16, width: u16) {
        if width == 0 {
            return;
        }
        self.set_volume(f64::from(offset_x) / f64::from(width));
    }

    pub fn media_mouseover(&mut self) {
        if self.options.animate.toolbar {
            self.toolbar.visible = true;
        }
    }

    pub fn media_mouseout(&mut self) {
        if self.options.animate.toolbar {
            self.toolbar.visible = false;
        }
    }

    pub fn volume_mouseover(&mut self) {
        if self.options.animate.volume_bar {
            self.toolbar.volume_bar_visible = true;
        }
    }

    pub fn volume_mouseout(&mut self) {
        if self.options.animate.volume_bar {
            self.toolbar.volume_bar_visible = false;
        }
    }

    pub fn media_end_update(&mut self) {
        self.state.playing = false;
        self.toolbar.play_icon = PlayIcon::Replay;
    }

    /// Route a native media signal to its render callback.
    pub fn handle_media_event(&mut self, event: MediaEvent) {
        match event {
            MediaEvent::TimeUpdate => self.media_playing(),
            MediaEvent::DurationChange => self.duration_update(),
            MediaEvent::Progress => self.buffer_update(),
            MediaEvent::Ended => self.media_end_update(),
        }
    }

    /// Drain and handle everything the element reported since the last call.
    pub fn pump_media_events(&mut self) {
        for event in self.media.poll_events() {
            self.handle_media_event(event);
        }
    }

    fn known_duration(&self) -> Option<Duration> {
        self.media.duration().filter(|d| !d.is_zero())
    }

    fn percent_of_duration(&self, t: Duration) -> f64 {
        match self.known_duration() {
            Some(d) => (t.as_secs_f64() * 100.0 / d.as_secs_f64()).clamp(0.0, 100.0),
            None => 0.0,
        }
    }
}
