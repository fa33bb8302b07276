//! Elapsed-time measurement for whole runs and individual requests.

use std::time::{Duration, Instant};

/// One-shot interval timer: idle, running, stopped.
///
/// [`start`](Self::start) may be called again to restart the interval.
/// [`elapsed`](Self::elapsed) stays zero until a stop happens. Stopping a
/// watch that was never explicitly started measures from construction:
/// there is no zero-valued instant to fall back to, so construction time is
/// the documented stand-in.
///
/// A watch is never shared between concurrent timers; every timed unit of
/// work owns its own instance.
#[derive(Debug, Clone, Copy)]
pub struct StopWatch {
    start: Instant,
    elapsed: Duration,
}

impl StopWatch {
    #[must_use]
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
            elapsed: Duration::ZERO,
        }
    }

    /// Records the current instant as the start of the interval, discarding
    /// any previously recorded start.
    pub fn start(&mut self) {
        self.start = Instant::now();
    }

    /// Records the current instant as the end of the interval and stores the
    /// elapsed duration.
    pub fn stop(&mut self) {
        self.elapsed = self.start.elapsed();
    }

    #[must_use]
    pub const fn elapsed(&self) -> Duration {
        self.elapsed
    }
}

impl Default for StopWatch {
    fn default() -> Self {
        Self::new()
    }
}
