//! Auto-scroll state machine and its repeating advance loop.
//!
//! The controller owns the only recurring timer in the engine. The timer
//! itself lives in the host runtime; the controller hands out a generation
//! number and a [`CancellationToken`] for it and ignores ticks from any loop
//! it has since replaced or cancelled.

use crate::cancellation::CancellationToken;
use crate::metrics::ScrollMetrics;
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaybackState {
    #[default]
    Idle,
    Playing,
    Paused,
}

impl PlaybackState {
    pub fn is_playing(self) -> bool {
        matches!(self, PlaybackState::Playing)
    }
}

/// Timer bookkeeping the host runtime has to mirror.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopEffect {
    Started { generation: u64, interval: Duration },
    Cancelled { generation: u64 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TickOutcome {
    /// Tick from a replaced or cancelled loop.
    Stale,
    Advanced { offset: f32 },
    /// End of document reached; the loop cancelled itself.
    Finished { offset: f32, cancelled: LoopEffect },
}

#[derive(Debug, Clone)]
struct AdvanceLoop {
    generation: u64,
    token: CancellationToken,
}

#[derive(Debug, Clone)]
pub struct AutoScrollController {
    state: PlaybackState,
    active: Option<AdvanceLoop>,
    last_generation: u64,
    step: f32,
    interval: Duration,
}

impl AutoScrollController {
    pub fn new(step: f32, interval: Duration) -> Self {
        Self {
            state: PlaybackState::Idle,
            active: None,
            last_generation: 0,
            step: if step.is_finite() && step > 0.0 {
                step
            } else {
                1.0
            },
            interval,
        }
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state.is_playing()
    }

    pub fn step(&self) -> f32 {
        self.step
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Generation of the live advance loop, if any.
    pub fn active_generation(&self) -> Option<u64> {
        self.active
            .as_ref()
            .filter(|active| !active.token.is_cancelled())
            .map(|active| active.generation)
    }

    pub fn toggle(&mut self) -> Vec<LoopEffect> {
        if self.is_playing() {
            self.pause()
        } else {
            self.start()
        }
    }

    pub fn start(&mut self) -> Vec<LoopEffect> {
        if self.is_playing() && self.active_generation().is_some() {
            debug!("Auto-scroll already playing");
            return Vec::new();
        }
        let mut effects = Vec::new();
        if let Some(cancelled) = self.cancel_loop() {
            effects.push(cancelled);
        }
        self.last_generation = self.last_generation.wrapping_add(1);
        let generation = self.last_generation;
        self.active = Some(AdvanceLoop {
            generation,
            token: CancellationToken::new(),
        });
        self.state = PlaybackState::Playing;
        info!(generation, step = self.step, "Auto-scroll started");
        effects.push(LoopEffect::Started {
            generation,
            interval: self.interval,
        });
        effects
    }

    pub fn pause(&mut self) -> Vec<LoopEffect> {
        if self.is_playing() {
            info!("Auto-scroll paused");
        }
        self.state = PlaybackState::Paused;
        self.cancel_loop().into_iter().collect()
    }

    /// Stop playback; the caller is responsible for scrolling back to the top.
    pub fn reset(&mut self) -> Vec<LoopEffect> {
        info!("Auto-scroll reset");
        self.pause()
    }

    /// Advance one step for the loop identified by `generation`.
    ///
    /// `max_offset` is re-read from `metrics` every tick so content that
    /// grows or shrinks while playing is honoured.
    pub fn tick(&mut self, generation: u64, metrics: &mut ScrollMetrics) -> TickOutcome {
        if self.active_generation() != Some(generation) || !self.is_playing() {
            return TickOutcome::Stale;
        }

        let max_offset = metrics.max_offset();
        if metrics.at_end() {
            let clamped = metrics.offset.min(max_offset);
            metrics.set_offset(clamped);
            return self.finish(clamped);
        }

        let next = (metrics.offset + self.step).min(max_offset);
        metrics.set_offset(next);
        if next >= max_offset {
            return self.finish(next);
        }
        TickOutcome::Advanced { offset: next }
    }

    fn finish(&mut self, offset: f32) -> TickOutcome {
        self.state = PlaybackState::Paused;
        let cancelled = self.cancel_loop().unwrap_or(LoopEffect::Cancelled {
            generation: self.last_generation,
        });
        info!(offset, "Auto-scroll reached the end of the journey");
        TickOutcome::Finished { offset, cancelled }
    }

    fn cancel_loop(&mut self) -> Option<LoopEffect> {
        let active = self.active.take()?;
        active.token.cancel();
        debug!(generation = active.generation, "Cancelled advance loop");
        Some(LoopEffect::Cancelled {
            generation: active.generation,
        })
    }
}
