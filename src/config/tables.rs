use super::defaults;
use super::models::{AppConfig, LogLevel, ThemeMode};
use journey_core::JourneyVariant;
use serde::Deserialize;

/// Section names that mark a file as using the grouped layout.
pub(super) const TABLE_NAMES: [&str; 7] = [
    "appearance",
    "autoplay",
    "progress",
    "speed",
    "gestures",
    "keys",
    "logging",
];

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
pub(super) struct ConfigTables {
    #[serde(default)]
    appearance: AppearanceConfig,
    #[serde(default)]
    autoplay: AutoplayConfig,
    #[serde(default)]
    progress: ProgressConfig,
    #[serde(default)]
    speed: SpeedConfig,
    #[serde(default)]
    gestures: GesturesConfig,
    #[serde(default)]
    keys: KeysConfig,
    #[serde(default)]
    logging: LoggingConfig,
}

impl From<ConfigTables> for AppConfig {
    fn from(tables: ConfigTables) -> Self {
        AppConfig {
            theme: tables.appearance.theme,
            font_size: tables.appearance.font_size,
            line_spacing: tables.appearance.line_spacing,
            window_width: tables.appearance.window_width,
            window_height: tables.appearance.window_height,
            window_pos_x: tables.appearance.window_pos_x,
            window_pos_y: tables.appearance.window_pos_y,
            hud_width: tables.appearance.hud_width,
            car_base_top: tables.appearance.car_base_top,
            car_wobble: tables.appearance.car_wobble,
            parallax_factor: tables.appearance.parallax_factor,
            variant: tables.autoplay.variant,
            scroll_step: tables.autoplay.scroll_step,
            tick_interval_ms: tables.autoplay.tick_interval_ms,
            frame_interval_ms: tables.autoplay.frame_interval_ms,
            glide_fraction: tables.autoplay.glide_fraction,
            total_distance: tables.progress.total_distance,
            checkpoint_lookahead: tables.progress.checkpoint_lookahead,
            progress_throttle_ms: tables.progress.progress_throttle_ms,
            checkpoint_throttle_ms: tables.progress.checkpoint_throttle_ms,
            reveal_margin: tables.progress.reveal_margin,
            speed_scale: tables.speed.scale,
            speed_cap: tables.speed.cap,
            speed_decay_step: tables.speed.decay_step,
            speed_decay_delay_ms: tables.speed.decay_delay_ms,
            swipe_threshold: tables.gestures.swipe_threshold,
            swipe_distance: tables.gestures.swipe_distance,
            hint_delay_ms: tables.gestures.hint_delay_ms,
            hint_dismiss_offset: tables.gestures.hint_dismiss_offset,
            easter_egg_ms: tables.gestures.easter_egg_ms,
            log_level: tables.logging.log_level,
            key_toggle_autoplay: tables.keys.toggle_autoplay,
            key_pause: tables.keys.pause,
            key_reset: tables.keys.reset,
            key_scroll_down: tables.keys.scroll_down,
            key_scroll_up: tables.keys.scroll_up,
            key_quit: tables.keys.quit,
            arrow_scroll_step: tables.keys.arrow_step,
        }
    }
}

impl From<&AppConfig> for ConfigTables {
    fn from(config: &AppConfig) -> Self {
        ConfigTables {
            appearance: AppearanceConfig {
                theme: config.theme,
                font_size: config.font_size,
                line_spacing: config.line_spacing,
                window_width: config.window_width,
                window_height: config.window_height,
                window_pos_x: config.window_pos_x,
                window_pos_y: config.window_pos_y,
                hud_width: config.hud_width,
                car_base_top: config.car_base_top,
                car_wobble: config.car_wobble,
                parallax_factor: config.parallax_factor,
            },
            autoplay: AutoplayConfig {
                variant: config.variant,
                scroll_step: config.scroll_step,
                tick_interval_ms: config.tick_interval_ms,
                frame_interval_ms: config.frame_interval_ms,
                glide_fraction: config.glide_fraction,
            },
            progress: ProgressConfig {
                total_distance: config.total_distance,
                checkpoint_lookahead: config.checkpoint_lookahead,
                progress_throttle_ms: config.progress_throttle_ms,
                checkpoint_throttle_ms: config.checkpoint_throttle_ms,
                reveal_margin: config.reveal_margin,
            },
            speed: SpeedConfig {
                scale: config.speed_scale,
                cap: config.speed_cap,
                decay_step: config.speed_decay_step,
                decay_delay_ms: config.speed_decay_delay_ms,
            },
            gestures: GesturesConfig {
                swipe_threshold: config.swipe_threshold,
                swipe_distance: config.swipe_distance,
                hint_delay_ms: config.hint_delay_ms,
                hint_dismiss_offset: config.hint_dismiss_offset,
                easter_egg_ms: config.easter_egg_ms,
            },
            keys: KeysConfig {
                toggle_autoplay: config.key_toggle_autoplay.clone(),
                pause: config.key_pause.clone(),
                reset: config.key_reset.clone(),
                scroll_down: config.key_scroll_down.clone(),
                scroll_up: config.key_scroll_up.clone(),
                quit: config.key_quit.clone(),
                arrow_step: config.arrow_scroll_step,
            },
            logging: LoggingConfig {
                log_level: config.log_level,
            },
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct AppearanceConfig {
    #[serde(default)]
    theme: ThemeMode,
    #[serde(default = "defaults::default_font_size")]
    font_size: u32,
    #[serde(default = "defaults::default_line_spacing")]
    line_spacing: f32,
    #[serde(default = "defaults::default_window_width")]
    window_width: f32,
    #[serde(default = "defaults::default_window_height")]
    window_height: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    window_pos_x: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    window_pos_y: Option<f32>,
    #[serde(default = "defaults::default_hud_width")]
    hud_width: f32,
    #[serde(default = "defaults::default_car_base_top")]
    car_base_top: f32,
    #[serde(default = "defaults::default_car_wobble")]
    car_wobble: f32,
    #[serde(default = "defaults::default_parallax_factor")]
    parallax_factor: f32,
}

impl Default for AppearanceConfig {
    fn default() -> Self {
        AppearanceConfig {
            theme: ThemeMode::default(),
            font_size: defaults::default_font_size(),
            line_spacing: defaults::default_line_spacing(),
            window_width: defaults::default_window_width(),
            window_height: defaults::default_window_height(),
            window_pos_x: None,
            window_pos_y: None,
            hud_width: defaults::default_hud_width(),
            car_base_top: defaults::default_car_base_top(),
            car_wobble: defaults::default_car_wobble(),
            parallax_factor: defaults::default_parallax_factor(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct AutoplayConfig {
    #[serde(default = "defaults::default_variant")]
    variant: JourneyVariant,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    scroll_step: Option<f32>,
    #[serde(default = "defaults::default_tick_interval_ms")]
    tick_interval_ms: u64,
    #[serde(default = "defaults::default_frame_interval_ms")]
    frame_interval_ms: u64,
    #[serde(default = "defaults::default_glide_fraction")]
    glide_fraction: f32,
}

impl Default for AutoplayConfig {
    fn default() -> Self {
        AutoplayConfig {
            variant: defaults::default_variant(),
            scroll_step: None,
            tick_interval_ms: defaults::default_tick_interval_ms(),
            frame_interval_ms: defaults::default_frame_interval_ms(),
            glide_fraction: defaults::default_glide_fraction(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct ProgressConfig {
    #[serde(default = "defaults::default_total_distance")]
    total_distance: u32,
    #[serde(default = "defaults::default_checkpoint_lookahead")]
    checkpoint_lookahead: f32,
    #[serde(default = "defaults::default_progress_throttle_ms")]
    progress_throttle_ms: u64,
    #[serde(default = "defaults::default_checkpoint_throttle_ms")]
    checkpoint_throttle_ms: u64,
    #[serde(default = "defaults::default_reveal_margin")]
    reveal_margin: f32,
}

impl Default for ProgressConfig {
    fn default() -> Self {
        ProgressConfig {
            total_distance: defaults::default_total_distance(),
            checkpoint_lookahead: defaults::default_checkpoint_lookahead(),
            progress_throttle_ms: defaults::default_progress_throttle_ms(),
            checkpoint_throttle_ms: defaults::default_checkpoint_throttle_ms(),
            reveal_margin: defaults::default_reveal_margin(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct SpeedConfig {
    #[serde(default = "defaults::default_speed_scale")]
    scale: f32,
    #[serde(default = "defaults::default_speed_cap")]
    cap: f32,
    #[serde(default = "defaults::default_speed_decay_step")]
    decay_step: f32,
    #[serde(default = "defaults::default_speed_decay_delay_ms")]
    decay_delay_ms: u64,
}

impl Default for SpeedConfig {
    fn default() -> Self {
        SpeedConfig {
            scale: defaults::default_speed_scale(),
            cap: defaults::default_speed_cap(),
            decay_step: defaults::default_speed_decay_step(),
            decay_delay_ms: defaults::default_speed_decay_delay_ms(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct GesturesConfig {
    #[serde(default = "defaults::default_swipe_threshold")]
    swipe_threshold: f32,
    #[serde(default = "defaults::default_swipe_distance")]
    swipe_distance: f32,
    #[serde(default = "defaults::default_hint_delay_ms")]
    hint_delay_ms: u64,
    #[serde(default = "defaults::default_hint_dismiss_offset")]
    hint_dismiss_offset: f32,
    #[serde(default = "defaults::default_easter_egg_ms")]
    easter_egg_ms: u64,
}

impl Default for GesturesConfig {
    fn default() -> Self {
        GesturesConfig {
            swipe_threshold: defaults::default_swipe_threshold(),
            swipe_distance: defaults::default_swipe_distance(),
            hint_delay_ms: defaults::default_hint_delay_ms(),
            hint_dismiss_offset: defaults::default_hint_dismiss_offset(),
            easter_egg_ms: defaults::default_easter_egg_ms(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct KeysConfig {
    #[serde(default = "defaults::default_key_toggle_autoplay")]
    toggle_autoplay: String,
    #[serde(default = "defaults::default_key_pause")]
    pause: String,
    #[serde(default = "defaults::default_key_reset")]
    reset: String,
    #[serde(default = "defaults::default_key_scroll_down")]
    scroll_down: String,
    #[serde(default = "defaults::default_key_scroll_up")]
    scroll_up: String,
    #[serde(default = "defaults::default_key_quit")]
    quit: String,
    #[serde(default = "defaults::default_arrow_scroll_step")]
    arrow_step: f32,
}

impl Default for KeysConfig {
    fn default() -> Self {
        KeysConfig {
            toggle_autoplay: defaults::default_key_toggle_autoplay(),
            pause: defaults::default_key_pause(),
            reset: defaults::default_key_reset(),
            scroll_down: defaults::default_key_scroll_down(),
            scroll_up: defaults::default_key_scroll_up(),
            quit: defaults::default_key_quit(),
            arrow_step: defaults::default_arrow_scroll_step(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct LoggingConfig {
    #[serde(default = "defaults::default_log_level")]
    log_level: LogLevel,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            log_level: defaults::default_log_level(),
        }
    }
}
