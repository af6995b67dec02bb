pub(crate) fn default_font_size() -> u32 {
    18
}

pub(crate) fn default_line_spacing() -> f32 {
    1.4
}

pub(crate) fn default_window_width() -> f32 {
    1100.0
}

pub(crate) fn default_window_height() -> f32 {
    760.0
}

pub(crate) fn default_hud_width() -> f32 {
    280.0
}

pub(crate) fn default_car_base_top() -> f32 {
    100.0
}

pub(crate) fn default_car_wobble() -> f32 {
    10.0
}

pub(crate) fn default_parallax_factor() -> f32 {
    0.05
}

pub(crate) fn default_variant() -> journey_core::JourneyVariant {
    journey_core::JourneyVariant::Classic
}

pub(crate) fn default_tick_interval_ms() -> u64 {
    16
}

pub(crate) fn default_frame_interval_ms() -> u64 {
    16
}

pub(crate) fn default_glide_fraction() -> f32 {
    0.18
}

pub(crate) fn default_total_distance() -> u32 {
    100
}

pub(crate) fn default_checkpoint_lookahead() -> f32 {
    300.0
}

pub(crate) fn default_progress_throttle_ms() -> u64 {
    50
}

pub(crate) fn default_checkpoint_throttle_ms() -> u64 {
    100
}

pub(crate) fn default_reveal_margin() -> f32 {
    100.0
}

pub(crate) fn default_speed_scale() -> f32 {
    2.0
}

pub(crate) fn default_speed_cap() -> f32 {
    200.0
}

pub(crate) fn default_speed_decay_step() -> f32 {
    10.0
}

pub(crate) fn default_speed_decay_delay_ms() -> u64 {
    100
}

pub(crate) fn default_swipe_threshold() -> f32 {
    50.0
}

pub(crate) fn default_swipe_distance() -> f32 {
    200.0
}

pub(crate) fn default_hint_delay_ms() -> u64 {
    2000
}

pub(crate) fn default_hint_dismiss_offset() -> f32 {
    50.0
}

pub(crate) fn default_easter_egg_ms() -> u64 {
    3000
}

pub(crate) fn default_log_level() -> crate::config::LogLevel {
    crate::config::LogLevel::Debug
}

pub(crate) fn default_key_toggle_autoplay() -> String {
    "space".to_string()
}

pub(crate) fn default_key_pause() -> String {
    "escape".to_string()
}

pub(crate) fn default_key_reset() -> String {
    "home".to_string()
}

pub(crate) fn default_key_scroll_down() -> String {
    "arrowdown".to_string()
}

pub(crate) fn default_key_scroll_up() -> String {
    "arrowup".to_string()
}

pub(crate) fn default_key_quit() -> String {
    "q".to_string()
}

pub(crate) fn default_arrow_scroll_step() -> f32 {
    100.0
}
