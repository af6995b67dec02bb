use iced::widget::scrollable::Id as ScrollId;
use once_cell::sync::Lazy;
use std::time::Duration;

/// Limits for viewer controls.
pub(crate) const MIN_FONT_SIZE: u32 = 10;
pub(crate) const MAX_FONT_SIZE: u32 = 48;
pub(crate) const MIN_HUD_WIDTH: f32 = 180.0;
pub(crate) const MAX_HUD_WIDTH: f32 = 640.0;
pub(crate) const CAR_TRACK_HEIGHT_PX: f32 = 150.0;
pub(crate) const CAR_GLYPH_SIZE_PX: f32 = 32.0;
pub(crate) const ROAD_DASH_PERIOD_PX: f32 = 40.0;
pub(crate) const SIGNAL_POLL_INTERVAL: Duration = Duration::from_millis(250);
pub(crate) static JOURNEY_SCROLL_ID: Lazy<ScrollId> =
    Lazy::new(|| ScrollId::new("journey-scroll"));
