use std::time::{Duration, Instant};

/// Tracks frame timing for the render loop.
#[derive(Debug, Default)]
pub struct FrameClock {
    start: Option<Instant>,
    last: Option<Instant>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a frame at `now` and returns the seconds since the previous one. The first frame
    /// returns zero.
    pub fn tick(&mut self, now: Instant) -> f32 {
        self.start.get_or_insert(now);
        let delta = self
            .last
            .replace(now)
            .map_or(Duration::ZERO, |last| now.saturating_duration_since(last));
        delta.as_secs_f32()
    }

    /// Seconds between the first and the latest tick.
    pub fn elapsed(&self) -> f32 {
        match (self.start, self.last) {
            (Some(start), Some(last)) => last.duration_since(start).as_secs_f32(),
            _ => 0.0,
        }
    }
}
