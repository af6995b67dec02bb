mod constants;
mod ui;

use crate::config::AppConfig;
use crate::geometry::layout_model;
use crate::signals::ShutdownSignal;
use iced::Task;
use journey_core::{Journey, JourneySession};
use std::time::Instant;
use tracing::info;

use super::messages::Message;

pub(crate) use constants::*;
pub(in crate::app) use ui::UiState;

/// Core application state: the journey session plus window-level UI state.
pub struct App {
    pub(super) session: JourneySession,
    pub(super) config: AppConfig,
    pub(super) ui: UiState,
    pub(super) shutdown: ShutdownSignal,
}

impl App {
    pub(super) fn bootstrap(
        journey: Journey,
        mut config: AppConfig,
        shutdown: ShutdownSignal,
    ) -> (App, Task<Message>) {
        clamp_config(&mut config);
        let session = JourneySession::new(
            journey,
            layout_model(&config, config.window_width),
            config.engine_config(),
            config.window_height,
            Instant::now(),
        );
        let app = App {
            ui: UiState {
                theme: config.theme,
                window_width: config.window_width,
                window_height: config.window_height,
                window_position: config.window_pos_x.zip(config.window_pos_y),
                focused: true,
            },
            session,
            config,
            shutdown,
        };
        info!(
            title = %app.session.journey().title,
            variant = %app.config.variant,
            theme = %app.ui.theme,
            "Initialized app state"
        );
        (app, Task::none())
    }

    /// Re-estimate stop positions for the current window size.
    pub(super) fn relayout(&mut self) {
        self.session
            .relayout(layout_model(&self.config, self.ui.window_width));
    }
}

pub(in crate::app) fn clamp_config(config: &mut AppConfig) {
    let fallback = AppConfig::default();
    config.font_size = config.font_size.clamp(MIN_FONT_SIZE, MAX_FONT_SIZE);
    config.line_spacing = finite_or(config.line_spacing, fallback.line_spacing).clamp(1.0, 2.5);
    config.window_width =
        finite_or(config.window_width, fallback.window_width).clamp(320.0, 7680.0);
    config.window_height =
        finite_or(config.window_height, fallback.window_height).clamp(240.0, 4320.0);
    config.window_pos_x = config.window_pos_x.filter(|v| v.is_finite());
    config.window_pos_y = config.window_pos_y.filter(|v| v.is_finite());
    config.hud_width =
        finite_or(config.hud_width, fallback.hud_width).clamp(MIN_HUD_WIDTH, MAX_HUD_WIDTH);
    config.glide_fraction =
        finite_or(config.glide_fraction, fallback.glide_fraction).clamp(0.01, 1.0);
    config.speed_cap = finite_or(config.speed_cap, fallback.speed_cap).max(1.0);
    config.total_distance = config.total_distance.max(1);
}

/// `f32::clamp` passes NaN through, so non-finite values are replaced first.
fn finite_or(value: f32, fallback: f32) -> f32 {
    if value.is_finite() { value } else { fallback }
}
