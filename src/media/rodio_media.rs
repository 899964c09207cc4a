//! `MediaElement` backed by a rodio `Sink` on the shared output mixer.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::time::Duration;

use lofty::prelude::AudioFile;
use rodio::mixer::Mixer;
use rodio::{Decoder, Sink, Source};

use super::{MediaElement, MediaError, MediaEvent, TimeRange};

/// Create a paused `Sink` for `path` that starts playback at `start_at`.
///
/// Also returns the decoder's own idea of the total duration.
fn create_sink_at(
    mixer: &Mixer,
    path: &Path,
    start_at: Duration,
) -> Result<(Sink, Option<Duration>), MediaError> {
    let file = File::open(path).map_err(|source| MediaError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let decoder = Decoder::new(BufReader::new(file)).map_err(|e| MediaError::Decode {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    let total = decoder.total_duration();

    let sink = Sink::connect_new(mixer);
    // `skip_duration` is our seeking primitive; even Duration::ZERO is fine.
    sink.append(decoder.skip_duration(start_at));
    sink.pause();
    Ok((sink, total))
}

/// Signals raised by each poll of a playing element. The buffered range is
/// re-reported with every position update, since its fill is looked up
/// relative to the current time.
fn playing_tick(drained: bool) -> &'static [MediaEvent] {
    if drained {
        &[MediaEvent::Ended]
    } else {
        &[MediaEvent::TimeUpdate, MediaEvent::Progress]
    }
}

fn probe_duration(path: &Path) -> Option<Duration> {
    lofty::read_from_path(path)
        .ok()
        .map(|tagged| tagged.properties().duration())
}

pub struct RodioMedia {
    mixer: Mixer,
    path: Option<PathBuf>,
    sink: Option<Sink>,
    // `Sink::get_pos` counts from the offset the sink was created at.
    offset: Duration,
    duration: Option<Duration>,
    volume: f64,
    paused: bool,
    ended: bool,
    events: Vec<MediaEvent>,
}

impl RodioMedia {
    pub fn new(mixer: Mixer) -> Self {
        Self {
            mixer,
            path: None,
            sink: None,
            offset: Duration::ZERO,
            duration: None,
            volume: 1.0,
            paused: true,
            ended: false,
            events: Vec::new(),
        }
    }

    /// Build an element with `path` already loaded.
    pub fn open(mixer: Mixer, path: &Path) -> Result<Self, MediaError> {
        let mut media = Self::new(mixer);
        media.load(&path.display().to_string())?;
        Ok(media)
    }

    fn stop_sink(&mut self) {
        if let Some(s) = self.sink.take() {
            s.stop();
        }
    }

    /// Replace the sink with a fresh one positioned at `at`, keeping play state and volume.
    fn rebuild_at(&mut self, at: Duration) -> Result<(), MediaError> {
        let path = self.path.clone().ok_or(MediaError::NoSource)?;
        let (sink, _) = create_sink_at(&self.mixer, &path, at)?;
        sink.set_volume(self.volume as f32);
        self.stop_sink();
        if !self.paused {
            sink.play();
        }
        self.sink = Some(sink);
        self.offset = at;
        self.ended = false;
        Ok(())
    }
}

impl MediaElement for RodioMedia {
    fn load(&mut self, source: &str) -> Result<(), MediaError> {
        self.stop_sink();
        self.path = None;
        self.duration = None;
        self.offset = Duration::ZERO;
        self.paused = true;
        self.ended = false;

        let path = PathBuf::from(source);
        let (sink, total) = create_sink_at(&self.mixer, &path, Duration::ZERO)?;
        sink.set_volume(self.volume as f32);

        self.duration = probe_duration(&path)
            .or(total)
            .filter(|d| !d.is_zero());
        self.sink = Some(sink);
        self.path = Some(path);
        self.events.push(MediaEvent::DurationChange);
        self.events.push(MediaEvent::Progress);
        log::debug!("loaded {source} (duration {:?})", self.duration);
        Ok(())
    }

    fn play(&mut self) {
        self.paused = false;
        if self.ended || self.sink.is_none() {
            if let Err(e) = self.rebuild_at(Duration::ZERO) {
                log::warn!("cannot start playback: {e}");
                self.paused = true;
                return;
            }
        }
        if let Some(s) = &self.sink {
            s.play();
        }
    }

    fn pause(&mut self) {
        self.paused = true;
        if let Some(s) = &self.sink {
            s.pause();
        }
    }

    fn current_time(&self) -> Duration {
        match &self.sink {
            Some(s) => self.offset + s.get_pos(),
            None => Duration::ZERO,
        }
    }

    fn seek(&mut self, to: Duration) -> Result<(), MediaError> {
        let to = match self.duration {
            Some(d) => to.min(d),
            None => to,
        };
        self.rebuild_at(to)?;
        self.events.extend([MediaEvent::TimeUpdate, MediaEvent::Progress]);
        Ok(())
    }

    fn duration(&self) -> Option<Duration> {
        self.duration
    }

    fn set_volume(&mut self, volume: f64) {
        self.volume = volume;
        if let Some(s) = &self.sink {
            s.set_volume(volume as f32);
        }
    }

    fn buffered(&self) -> Vec<TimeRange> {
        // Local files are readable end to end as soon as they open.
        match (&self.sink, self.duration) {
            (Some(_), Some(end)) => vec![TimeRange {
                start: Duration::ZERO,
                end,
            }],
            _ => Vec::new(),
        }
    }

    fn poll_events(&mut self) -> Vec<MediaEvent> {
        if !self.paused && !self.ended {
            if let Some(drained) = self.sink.as_ref().map(Sink::empty) {
                if drained {
                    self.ended = true;
                    self.paused = true;
                }
                self.events.extend_from_slice(playing_tick(drained));
            }
        }
        std::mem::take(&mut self.events)
    }
}
