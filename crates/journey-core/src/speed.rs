//! Display-only scroll speed with a coasting decay.

use serde::Serialize;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeedTuning {
    pub scale: f32,
    pub cap: f32,
    pub decay_step: f32,
    pub decay_delay: Duration,
}

/// What the speedometer shows.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SpeedSnapshot {
    pub value: f32,
    /// `value / cap`, in `[0, 1]`.
    pub fill_ratio: f32,
}

#[derive(Debug, Clone)]
pub struct SpeedEstimator {
    tuning: SpeedTuning,
    value: f32,
    previous_offset: f32,
    decay_due: Option<Instant>,
}

impl SpeedEstimator {
    pub fn new(tuning: SpeedTuning, initial_offset: f32) -> Self {
        Self {
            tuning,
            value: 0.0,
            previous_offset: initial_offset,
            decay_due: None,
        }
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn decay_pending(&self) -> bool {
        self.decay_due.is_some()
    }

    pub fn snapshot(&self) -> SpeedSnapshot {
        let fill_ratio = if self.tuning.cap > 0.0 {
            (self.value / self.tuning.cap).clamp(0.0, 1.0)
        } else {
            0.0
        };
        SpeedSnapshot {
            value: self.value,
            fill_ratio,
        }
    }

    /// Record a new offset and schedule the next decay step.
    pub fn sample(&mut self, offset: f32, now: Instant) -> SpeedSnapshot {
        let delta = (offset - self.previous_offset).abs();
        let raw = delta * self.tuning.scale;
        self.value = if raw.is_finite() {
            raw.clamp(0.0, self.tuning.cap.max(0.0))
        } else {
            0.0
        };
        self.previous_offset = offset;
        self.decay_due = if self.value > 0.0 {
            Some(now + self.tuning.decay_delay)
        } else {
            None
        };
        self.snapshot()
    }

    /// Apply one decay step if its deadline has passed.
    ///
    /// Returns true when the value changed. The deadline re-arms until the
    /// value reaches zero.
    pub fn decay_if_due(&mut self, now: Instant) -> bool {
        let Some(due) = self.decay_due else {
            return false;
        };
        if now < due {
            return false;
        }
        self.value = (self.value - self.tuning.decay_step).max(0.0);
        // A non-positive step would never reach zero.
        if self.tuning.decay_step <= 0.0 {
            self.value = 0.0;
        }
        self.decay_due = if self.value > 0.0 {
            Some(now + self.tuning.decay_delay)
        } else {
            None
        };
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tuning() -> SpeedTuning {
        SpeedTuning {
            scale: 2.0,
            cap: 200.0,
            decay_step: 10.0,
            decay_delay: Duration::from_millis(100),
        }
    }

    #[test]
    fn sample_scales_and_caps() {
        let now = Instant::now();
        let mut speed = SpeedEstimator::new(tuning(), 0.0);
        assert_eq!(speed.sample(30.0, now).value, 60.0);
        assert_eq!(speed.sample(10.0, now).value, 40.0);
        let capped = speed.sample(5000.0, now);
        assert_eq!(capped.value, 200.0);
        assert_eq!(capped.fill_ratio, 1.0);
    }

    #[test]
    fn decay_waits_for_deadline() {
        let start = Instant::now();
        let mut speed = SpeedEstimator::new(tuning(), 0.0);
        speed.sample(50.0, start);
        assert!(!speed.decay_if_due(start + Duration::from_millis(99)));
        assert!(speed.decay_if_due(start + Duration::from_millis(100)));
        assert_eq!(speed.value(), 90.0);
    }

    #[test]
    fn decay_reaches_zero_within_bounded_steps() {
        let start = Instant::now();
        let mut speed = SpeedEstimator::new(tuning(), 0.0);
        speed.sample(1000.0, start);
        let max_steps = (tuning().cap / tuning().decay_step).ceil() as u32;

        let mut now = start;
        let mut steps = 0;
        while speed.decay_pending() {
            now += tuning().decay_delay;
            assert!(speed.decay_if_due(now));
            assert!(speed.value() >= 0.0);
            steps += 1;
            assert!(steps <= max_steps, "decay did not settle");
        }
        assert_eq!(speed.value(), 0.0);
        assert_eq!(speed.snapshot().fill_ratio, 0.0);
    }

    #[test]
    fn idle_sample_reports_zero_without_decay() {
        let now = Instant::now();
        let mut speed = SpeedEstimator::new(tuning(), 120.0);
        assert_eq!(speed.sample(120.0, now).value, 0.0);
        assert!(!speed.decay_pending());
    }
}
