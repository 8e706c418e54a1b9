use std::time::{Duration, Instant};

/// Monotonic time source for elapsed-time math.
///
/// Returns an offset on a forward-only timeline rather than wall-clock
/// time, so DST changes and NTP adjustments cannot corrupt the timers
/// built on top of it.
pub trait Clock: Send {
    fn now(&self) -> Duration;
}

/// Process-lifetime monotonic clock anchored at construction.
pub struct ProcessClock {
    origin: Instant,
}

impl ProcessClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for ProcessClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ProcessClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}
