mod messages;
mod state;
mod update;
mod view;

pub use state::App;

use crate::config::AppConfig;
use crate::signals::ShutdownSignal;
use crate::theme::Theme;
use iced::{Point, Size, window};
use journey_core::Journey;

/// Launch the windowed viewer for a loaded journey.
pub fn run_app(journey: Journey, mut config: AppConfig, shutdown: ShutdownSignal) -> iced::Result {
    state::clamp_config(&mut config);
    let window_settings = window::Settings {
        size: Size::new(config.window_width, config.window_height),
        position: match (config.window_pos_x, config.window_pos_y) {
            (Some(x), Some(y)) if x.is_finite() && y.is_finite() => {
                window::Position::Specific(Point::new(x, y))
            }
            _ => window::Position::Default,
        },
        ..window::Settings::default()
    };
    iced::application(App::title, App::update, App::view)
        .window(window_settings)
        .subscription(App::subscription)
        .theme(|app: &App| Theme::from(app.ui.theme).into())
        .run_with(move || App::bootstrap(journey, config, shutdown))
}

impl App {
    fn title(&self) -> String {
        self.session.journey().title.clone()
    }
}
