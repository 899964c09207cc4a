//! Recording `MediaElement` used by the widget tests.

use std::time::Duration;

use super::{MediaElement, MediaError, MediaEvent, TimeRange};

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Load(String),
    Play,
    Pause,
    Seek(Duration),
    SetVolume(f64),
}

#[derive(Debug, Default)]
pub struct FakeMedia {
    pub calls: Vec<Call>,
    pub current_time: Duration,
    pub duration: Option<Duration>,
    pub volume: f64,
    pub buffered: Vec<TimeRange>,
    pub events: Vec<MediaEvent>,
    pub fail_loads: bool,
}

impl FakeMedia {
    pub fn new() -> Self {
        Self {
            volume: 1.0,
            ..Self::default()
        }
    }

    pub fn with_duration(secs: u64) -> Self {
        Self {
            duration: Some(Duration::from_secs(secs)),
            ..Self::new()
        }
    }

    pub fn last_call(&self) -> Option<&Call> {
        self.calls.last()
    }

    pub fn count(&self, call: &Call) -> usize {
        self.calls.iter().filter(|c| *c == call).count()
    }
}

impl MediaElement for FakeMedia {
    fn load(&mut self, source: &str) -> Result<(), MediaError> {
        self.calls.push(Call::Load(source.to_string()));
        if self.fail_loads {
            return Err(MediaError::NoSource);
        }
        self.current_time = Duration::ZERO;
        Ok(())
    }

    fn play(&mut self) {
        self.calls.push(Call::Play);
    }

    fn pause(&mut self) {
        self.calls.push(Call::Pause);
    }

    fn current_time(&self) -> Duration {
        self.current_time
    }

    fn seek(&mut self, to: Duration) -> Result<(), MediaError> {
        self.calls.push(Call::Seek(to));
        self.current_time = to;
        Ok(())
    }

    fn duration(&self) -> Option<Duration> {
        self.duration
    }

    fn set_volume(&mut self, volume: f64) {
        self.calls.push(Call::SetVolume(volume));
        self.volume = volume;
    }

    fn buffered(&self) -> Vec<TimeRange> {
        self.buffered.clone()
    }

    fn poll_events(&mut self) -> Vec<MediaEvent> {
        std::mem::take(&mut self.events)
    }
}
