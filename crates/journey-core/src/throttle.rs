//! Coalescing for high-frequency scroll events.
//!
//! A lane runs at most one pass per interval. An event arriving inside the
//! interval is remembered and flushed by a later frame, so the final scroll
//! position is always processed.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct ScrollCoalescer {
    interval: Duration,
    last_pass: Option<Instant>,
    pending: bool,
}

impl ScrollCoalescer {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_pass: None,
            pending: false,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Register an event; true means the pass should run right now.
    pub fn offer(&mut self, now: Instant) -> bool {
        if self.ready(now) {
            self.mark_pass(now);
            true
        } else {
            self.pending = true;
            false
        }
    }

    /// Run the deferred pass once its interval has elapsed.
    pub fn flush_due(&mut self, now: Instant) -> bool {
        if self.pending && self.ready(now) {
            self.mark_pass(now);
            true
        } else {
            false
        }
    }

    fn ready(&self, now: Instant) -> bool {
        match self.last_pass {
            Some(last) => now.saturating_duration_since(last) >= self.interval,
            None => true,
        }
    }

    fn mark_pass(&mut self, now: Instant) {
        self.last_pass = Some(now);
        self.pending = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bursts_collapse_into_leading_and_trailing_pass() {
        let start = Instant::now();
        let mut lane = ScrollCoalescer::new(Duration::from_millis(50));
        let mut passes = 0;
        for ms in 0..40 {
            if lane.offer(start + Duration::from_millis(ms)) {
                passes += 1;
            }
        }
        assert_eq!(passes, 1);
        assert!(lane.is_pending());

        assert!(!lane.flush_due(start + Duration::from_millis(49)));
        assert!(lane.flush_due(start + Duration::from_millis(50)));
        assert!(!lane.is_pending());
        assert!(!lane.flush_due(start + Duration::from_millis(200)));
    }

    #[test]
    fn spaced_events_all_pass() {
        let start = Instant::now();
        let mut lane = ScrollCoalescer::new(Duration::from_millis(100));
        for step in 0..5 {
            assert!(lane.offer(start + Duration::from_millis(step * 100)));
        }
    }
}
