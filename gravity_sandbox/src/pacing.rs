//! Fixed-rate frame scheduling

use std::time::{Duration, Instant};

/// Hands out frame deadlines at a fixed rate.
///
/// Late frames are not caught up: after a stall the next deadline is the
/// first period boundary still in the future.
#[derive(Debug, Clone)]
pub struct FramePacer {
    period: Duration,
    next: Instant,
}

impl FramePacer {
    pub fn new(fps: u32, now: Instant) -> Self {
        Self {
            period: Duration::from_secs_f64(1.0 / fps.max(1) as f64),
            next: now,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// When the next frame is due
    pub fn deadline(&self) -> Instant {
        self.next
    }

    /// Returns true if a frame is due at `now`, scheduling the one after it.
    pub fn poll(&mut self, now: Instant) -> bool {
        if now < self.next {
            return false;
        }

        let behind = (now - self.next).as_nanos() / self.period.as_nanos().max(1);
        let skipped = u32::try_from(behind).unwrap_or(u32::MAX - 1);
        self.next += self.period * (skipped + 1);
        true
    }
}
