use super::super::state::App;
use crate::config::ThemeMode;
use tracing::{debug, info};

impl App {
    pub(super) fn handle_toggle_theme(&mut self) {
        self.ui.theme = match self.ui.theme {
            ThemeMode::Day => ThemeMode::Night,
            ThemeMode::Night => ThemeMode::Day,
        };
        info!(theme = %self.ui.theme, "Toggled theme");
    }

    pub(super) fn handle_window_resized(&mut self, width: f32, height: f32) {
        if !width.is_finite() || !height.is_finite() || width <= 0.0 || height <= 0.0 {
            return;
        }
        let width_changed = (width - self.ui.window_width).abs() > 0.5;
        self.ui.window_width = width;
        self.ui.window_height = height;
        debug!(width, height, "Window resized");
        if width_changed {
            self.relayout();
        }
    }

    pub(super) fn handle_window_moved(&mut self, x: f32, y: f32) {
        if x.is_finite() && y.is_finite() {
            self.ui.window_position = Some((x, y));
        }
    }
}
