//! Frame-driven smooth scrolling toward a target offset.

/// Offsets closer than this to the target snap onto it.
const SNAP_DISTANCE: f32 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollGlide {
    target: f32,
    fraction: f32,
}

impl ScrollGlide {
    /// `fraction` is the share of the remaining distance covered per frame.
    pub fn new(target: f32, fraction: f32) -> Self {
        let fraction = if fraction.is_finite() {
            fraction.clamp(0.01, 1.0)
        } else {
            1.0
        };
        Self { target, fraction }
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    /// Next offset from `current`, and whether the glide has arrived.
    pub fn advance(&self, current: f32) -> (f32, bool) {
        let remaining = self.target - current;
        if remaining.abs() <= SNAP_DISTANCE || !current.is_finite() {
            return (self.target, true);
        }
        let next = current + remaining * self.fraction;
        if (self.target - next).abs() <= SNAP_DISTANCE {
            (self.target, true)
        } else {
            (next, false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converges_downward_and_upward() {
        for (start, target) in [(0.0f32, 640.0f32), (900.0, 0.0)] {
            let glide = ScrollGlide::new(target, 0.2);
            let mut current = start;
            let mut frames = 0;
            loop {
                let (next, done) = glide.advance(current);
                let before = (target - current).abs();
                assert!((target - next).abs() < before || done);
                current = next;
                frames += 1;
                if done {
                    break;
                }
                assert!(frames < 200, "glide never arrived");
            }
            assert_eq!(current, target);
        }
    }

    #[test]
    fn full_fraction_jumps_immediately() {
        let glide = ScrollGlide::new(300.0, 1.0);
        assert_eq!(glide.advance(10.0), (300.0, true));
    }
}
