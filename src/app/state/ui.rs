use crate::config::ThemeMode;

/// Window and presentation state that never reaches the engine.
pub struct UiState {
    pub(in crate::app) theme: ThemeMode,
    pub(in crate::app) window_width: f32,
    pub(in crate::app) window_height: f32,
    pub(in crate::app) window_position: Option<(f32, f32)>,
    pub(in crate::app) focused: bool,
}
