//! Touch swipes and the key-sequence easter egg.

use crate::bindings::KeyToken;
use std::collections::VecDeque;

/// Vertical swipe recognizer.
#[derive(Debug, Clone)]
pub struct SwipeDetector {
    threshold: f32,
    distance: f32,
    start_y: Option<f32>,
}

impl SwipeDetector {
    pub fn new(threshold: f32, distance: f32) -> Self {
        Self {
            threshold,
            distance,
            start_y: None,
        }
    }

    pub fn touch_start(&mut self, y: f32) {
        self.start_y = Some(y);
    }

    /// Scroll delta for a finished touch, if it travelled far enough.
    ///
    /// Swiping up (finger moving toward the top) scrolls the document down.
    pub fn touch_end(&mut self, y: f32) -> Option<f32> {
        let start = self.start_y.take()?;
        let diff = start - y;
        if !diff.is_finite() || diff.abs() <= self.threshold {
            return None;
        }
        Some(if diff > 0.0 {
            self.distance
        } else {
            -self.distance
        })
    }
}

const SEQUENCE: [KeyToken; 10] = [
    KeyToken::ArrowUp,
    KeyToken::ArrowUp,
    KeyToken::ArrowDown,
    KeyToken::ArrowDown,
    KeyToken::ArrowLeft,
    KeyToken::ArrowRight,
    KeyToken::ArrowLeft,
    KeyToken::ArrowRight,
    KeyToken::Char('b'),
    KeyToken::Char('a'),
];

/// Watches the last ten keys for ↑↑↓↓←→←→BA.
#[derive(Debug, Clone, Default)]
pub struct KonamiTracker {
    recent: VecDeque<KeyToken>,
}

impl KonamiTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key; true when the sequence just completed.
    pub fn push(&mut self, key: &KeyToken) -> bool {
        let key = match key {
            KeyToken::Char(ch) => KeyToken::Char(ch.to_ascii_lowercase()),
            other => other.clone(),
        };
        self.recent.push_back(key);
        while self.recent.len() > SEQUENCE.len() {
            self.recent.pop_front();
        }
        let matched = self.recent.iter().eq(SEQUENCE.iter());
        if matched {
            self.recent.clear();
        }
        matched
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn swipe_direction_and_threshold() {
        let mut swipe = SwipeDetector::new(50.0, 200.0);
        swipe.touch_start(400.0);
        assert_eq!(swipe.touch_end(300.0), Some(200.0));

        swipe.touch_start(100.0);
        assert_eq!(swipe.touch_end(260.0), Some(-200.0));

        swipe.touch_start(100.0);
        assert_eq!(swipe.touch_end(150.0), None);
    }

    #[test]
    fn lift_without_press_is_ignored() {
        let mut swipe = SwipeDetector::new(50.0, 200.0);
        assert_eq!(swipe.touch_end(10.0), None);
    }

    #[test]
    fn konami_requires_exact_tail() {
        let mut tracker = KonamiTracker::new();
        let mut keys = vec![KeyToken::Space, KeyToken::Char('x')];
        keys.extend(SEQUENCE.iter().cloned());
        let hits: Vec<bool> = keys.iter().map(|key| tracker.push(key)).collect();
        assert_eq!(hits.iter().filter(|hit| **hit).count(), 1);
        assert!(*hits.last().unwrap_or(&false));
    }

    #[test]
    fn konami_accepts_uppercase_letters() {
        let mut tracker = KonamiTracker::new();
        let mut last = false;
        for key in SEQUENCE.iter().take(8) {
            last = tracker.push(key);
        }
        assert!(!last);
        assert!(!tracker.push(&KeyToken::Char('B')));
        assert!(tracker.push(&KeyToken::Char('A')));
    }

    #[test]
    fn broken_sequence_does_not_trigger() {
        let mut tracker = KonamiTracker::new();
        for key in SEQUENCE.iter().take(9) {
            assert!(!tracker.push(key));
        }
        assert!(!tracker.push(&KeyToken::Char('z')));
    }
}
