use crate::config::defaults;
use journey_core::{EngineConfig, JourneyVariant, KeyBindings, KeyChord, SpeedTuning};
use serde::Deserialize;
use std::time::Duration;

/// High-level app configuration; deserializable from TOML.
#[derive(Debug, Clone, Deserialize, serde::Serialize)]
pub struct AppConfig {
    #[serde(default)]
    pub theme: ThemeMode,
    #[serde(default = "crate::config::defaults::default_font_size")]
    pub font_size: u32,
    #[serde(default = "crate::config::defaults::default_line_spacing")]
    pub line_spacing: f32,
    #[serde(default = "crate::config::defaults::default_window_width")]
    pub window_width: f32,
    #[serde(default = "crate::config::defaults::default_window_height")]
    pub window_height: f32,
    #[serde(default)]
    pub window_pos_x: Option<f32>,
    #[serde(default)]
    pub window_pos_y: Option<f32>,
    #[serde(default = "crate::config::defaults::default_hud_width")]
    pub hud_width: f32,
    #[serde(default = "crate::config::defaults::default_car_base_top")]
    pub car_base_top: f32,
    #[serde(default = "crate::config::defaults::default_car_wobble")]
    pub car_wobble: f32,
    #[serde(default = "crate::config::defaults::default_parallax_factor")]
    pub parallax_factor: f32,
    #[serde(default = "crate::config::defaults::default_variant")]
    pub variant: JourneyVariant,
    /// Pixels per auto-scroll tick; the variant decides when unset.
    #[serde(default)]
    pub scroll_step: Option<f32>,
    #[serde(default = "crate::config::defaults::default_tick_interval_ms")]
    pub tick_interval_ms: u64,
    #[serde(default = "crate::config::defaults::default_frame_interval_ms")]
    pub frame_interval_ms: u64,
    #[serde(default = "crate::config::defaults::default_glide_fraction")]
    pub glide_fraction: f32,
    #[serde(default = "crate::config::defaults::default_total_distance")]
    pub total_distance: u32,
    #[serde(default = "crate::config::defaults::default_checkpoint_lookahead")]
    pub checkpoint_lookahead: f32,
    #[serde(default = "crate::config::defaults::default_progress_throttle_ms")]
    pub progress_throttle_ms: u64,
    #[serde(default = "crate::config::defaults::default_checkpoint_throttle_ms")]
    pub checkpoint_throttle_ms: u64,
    #[serde(default = "crate::config::defaults::default_reveal_margin")]
    pub reveal_margin: f32,
    #[serde(default = "crate::config::defaults::default_speed_scale")]
    pub speed_scale: f32,
    #[serde(default = "crate::config::defaults::default_speed_cap")]
    pub speed_cap: f32,
    #[serde(default = "crate::config::defaults::default_speed_decay_step")]
    pub speed_decay_step: f32,
    #[serde(default = "crate::config::defaults::default_speed_decay_delay_ms")]
    pub speed_decay_delay_ms: u64,
    #[serde(default = "crate::config::defaults::default_swipe_threshold")]
    pub swipe_threshold: f32,
    #[serde(default = "crate::config::defaults::default_swipe_distance")]
    pub swipe_distance: f32,
    #[serde(default = "crate::config::defaults::default_hint_delay_ms")]
    pub hint_delay_ms: u64,
    #[serde(default = "crate::config::defaults::default_hint_dismiss_offset")]
    pub hint_dismiss_offset: f32,
    #[serde(default = "crate::config::defaults::default_easter_egg_ms")]
    pub easter_egg_ms: u64,
    #[serde(default = "crate::config::defaults::default_log_level")]
    pub log_level: LogLevel,
    #[serde(default = "crate::config::defaults::default_key_toggle_autoplay")]
    pub key_toggle_autoplay: String,
    #[serde(default = "crate::config::defaults::default_key_pause")]
    pub key_pause: String,
    #[serde(default = "crate::config::defaults::default_key_reset")]
    pub key_reset: String,
    #[serde(default = "crate::config::defaults::default_key_scroll_down")]
    pub key_scroll_down: String,
    #[serde(default = "crate::config::defaults::default_key_scroll_up")]
    pub key_scroll_up: String,
    #[serde(default = "crate::config::defaults::default_key_quit")]
    pub key_quit: String,
    #[serde(default = "crate::config::defaults::default_arrow_scroll_step")]
    pub arrow_scroll_step: f32,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            theme: ThemeMode::Night,
            font_size: crate::config::defaults::default_font_size(),
            line_spacing: crate::config::defaults::default_line_spacing(),
            window_width: crate::config::defaults::default_window_width(),
            window_height: crate::config::defaults::default_window_height(),
            window_pos_x: None,
            window_pos_y: None,
            hud_width: crate::config::defaults::default_hud_width(),
            car_base_top: crate::config::defaults::default_car_base_top(),
            car_wobble: crate::config::defaults::default_car_wobble(),
            parallax_factor: crate::config::defaults::default_parallax_factor(),
            variant: crate::config::defaults::default_variant(),
            scroll_step: None,
            tick_interval_ms: crate::config::defaults::default_tick_interval_ms(),
            frame_interval_ms: crate::config::defaults::default_frame_interval_ms(),
            glide_fraction: crate::config::defaults::default_glide_fraction(),
            total_distance: crate::config::defaults::default_total_distance(),
            checkpoint_lookahead: crate::config::defaults::default_checkpoint_lookahead(),
            progress_throttle_ms: crate::config::defaults::default_progress_throttle_ms(),
            checkpoint_throttle_ms: crate::config::defaults::default_checkpoint_throttle_ms(),
            reveal_margin: crate::config::defaults::default_reveal_margin(),
            speed_scale: crate::config::defaults::default_speed_scale(),
            speed_cap: crate::config::defaults::default_speed_cap(),
            speed_decay_step: crate::config::defaults::default_speed_decay_step(),
            speed_decay_delay_ms: crate::config::defaults::default_speed_decay_delay_ms(),
            swipe_threshold: crate::config::defaults::default_swipe_threshold(),
            swipe_distance: crate::config::defaults::default_swipe_distance(),
            hint_delay_ms: crate::config::defaults::default_hint_delay_ms(),
            hint_dismiss_offset: crate::config::defaults::default_hint_dismiss_offset(),
            easter_egg_ms: crate::config::defaults::default_easter_egg_ms(),
            log_level: crate::config::defaults::default_log_level(),
            key_toggle_autoplay: crate::config::defaults::default_key_toggle_autoplay(),
            key_pause: crate::config::defaults::default_key_pause(),
            key_reset: crate::config::defaults::default_key_reset(),
            key_scroll_down: crate::config::defaults::default_key_scroll_down(),
            key_scroll_up: crate::config::defaults::default_key_scroll_up(),
            key_quit: crate::config::defaults::default_key_quit(),
            arrow_scroll_step: crate::config::defaults::default_arrow_scroll_step(),
        }
    }
}

impl AppConfig {
    /// Engine tunables for the session; invalid chords fall back to the
    /// default bindings.
    pub fn engine_config(&self) -> EngineConfig {
        let base = EngineConfig::for_variant(self.variant);
        EngineConfig {
            scroll_step: self
                .scroll_step
                .filter(|step| step.is_finite() && *step > 0.0)
                .unwrap_or(base.scroll_step),
            tick_interval: Duration::from_millis(self.tick_interval_ms.max(1)),
            frame_interval: Duration::from_millis(self.frame_interval_ms.max(1)),
            total_distance: self.total_distance,
            checkpoint_lookahead: self.checkpoint_lookahead,
            speed: SpeedTuning {
                scale: self.speed_scale,
                cap: self.speed_cap,
                decay_step: self.speed_decay_step,
                decay_delay: Duration::from_millis(self.speed_decay_delay_ms),
            },
            progress_throttle: Duration::from_millis(self.progress_throttle_ms),
            checkpoint_throttle: Duration::from_millis(self.checkpoint_throttle_ms),
            glide_fraction: self.glide_fraction,
            swipe_threshold: self.swipe_threshold,
            swipe_distance: self.swipe_distance,
            car_base_top: self.car_base_top,
            car_wobble: self.car_wobble,
            parallax_factor: self.parallax_factor,
            reveal_margin: self.reveal_margin,
            hint_delay: Duration::from_millis(self.hint_delay_ms),
            hint_dismiss_offset: self.hint_dismiss_offset,
            easter_egg_duration: Duration::from_millis(self.easter_egg_ms),
            bindings: KeyBindings {
                toggle_autoplay: KeyChord::parse(
                    &self.key_toggle_autoplay,
                    &defaults::default_key_toggle_autoplay(),
                ),
                pause: KeyChord::parse(&self.key_pause, &defaults::default_key_pause()),
                reset: KeyChord::parse(&self.key_reset, &defaults::default_key_reset()),
                scroll_down: KeyChord::parse(
                    &self.key_scroll_down,
                    &defaults::default_key_scroll_down(),
                ),
                scroll_up: KeyChord::parse(&self.key_scroll_up, &defaults::default_key_scroll_up()),
                quit: KeyChord::parse(&self.key_quit, &defaults::default_key_quit()),
                arrow_step: self.arrow_scroll_step,
            },
            ..base
        }
    }
}

/// Theme mode.
#[derive(Debug, Clone, Copy, Deserialize, serde::Serialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeMode {
    Day,
    Night,
}

impl Default for ThemeMode {
    fn default() -> Self {
        ThemeMode::Night
    }
}

impl std::fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ThemeMode::Day => "Day",
            ThemeMode::Night => "Night",
        };
        write!(f, "{}", label)
    }
}

/// Supported logging verbosity levels.
#[derive(Debug, Clone, Copy, Deserialize, serde::Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl Default for LogLevel {
    fn default() -> Self {
        LogLevel::Debug
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

impl LogLevel {
    pub fn as_filter_str(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}
