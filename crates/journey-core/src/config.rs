//! Tunables for the engine. Every constant the viewer uses lives here so the
//! two journey variants differ only in data.

use crate::bindings::KeyBindings;
use crate::speed::SpeedTuning;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Cosmetic theme of the journey readouts.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum JourneyVariant {
    #[default]
    Classic,
    Game,
}

impl std::fmt::Display for JourneyVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            JourneyVariant::Classic => "Classic",
            JourneyVariant::Game => "Game",
        };
        write!(f, "{}", label)
    }
}

impl JourneyVariant {
    pub fn default_scroll_step(self) -> f32 {
        match self {
            JourneyVariant::Classic => 2.0,
            JourneyVariant::Game => 3.0,
        }
    }

    pub fn start_label(self) -> &'static str {
        match self {
            JourneyVariant::Classic => "Starting Point",
            JourneyVariant::Game => "Starting Line",
        }
    }

    pub fn speed_unit(self) -> &'static str {
        match self {
            JourneyVariant::Classic => "km/h",
            JourneyVariant::Game => "MPH",
        }
    }

    pub fn distance_unit(self) -> &'static str {
        match self {
            JourneyVariant::Classic => "km",
            JourneyVariant::Game => "mi",
        }
    }

    pub fn finish_banner(self) -> &'static str {
        match self {
            JourneyVariant::Classic => "Journey complete",
            JourneyVariant::Game => "FINISH LINE!",
        }
    }
}

#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub variant: JourneyVariant,
    pub scroll_step: f32,
    pub tick_interval: Duration,
    pub frame_interval: Duration,
    pub total_distance: u32,
    pub checkpoint_lookahead: f32,
    pub speed: SpeedTuning,
    pub progress_throttle: Duration,
    pub checkpoint_throttle: Duration,
    pub glide_fraction: f32,
    pub swipe_threshold: f32,
    pub swipe_distance: f32,
    pub car_base_top: f32,
    pub car_wobble: f32,
    pub parallax_factor: f32,
    pub reveal_margin: f32,
    pub hint_delay: Duration,
    pub hint_dismiss_offset: f32,
    pub easter_egg_duration: Duration,
    pub bindings: KeyBindings,
}

impl EngineConfig {
    pub fn for_variant(variant: JourneyVariant) -> Self {
        Self {
            variant,
            scroll_step: variant.default_scroll_step(),
            tick_interval: Duration::from_millis(16),
            frame_interval: Duration::from_millis(16),
            total_distance: 100,
            checkpoint_lookahead: 300.0,
            speed: SpeedTuning {
                scale: 2.0,
                cap: 200.0,
                decay_step: 10.0,
                decay_delay: Duration::from_millis(100),
            },
            progress_throttle: Duration::from_millis(50),
            checkpoint_throttle: Duration::from_millis(100),
            glide_fraction: 0.18,
            swipe_threshold: 50.0,
            swipe_distance: 200.0,
            car_base_top: 100.0,
            car_wobble: 10.0,
            parallax_factor: 0.05,
            reveal_margin: 100.0,
            hint_delay: Duration::from_secs(2),
            hint_dismiss_offset: 50.0,
            easter_egg_duration: Duration::from_secs(3),
            bindings: KeyBindings::default(),
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::for_variant(JourneyVariant::default())
    }
}
