use std::time::Instant;

/// Monotonic millisecond timestamps for engine ticks, measured from the
/// moment the clock was created.
#[derive(Debug, Clone, Copy)]
pub struct FrameClock {
    start: Instant,
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    pub fn now_ms(&self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
