use iced::keyboard::{Key, Modifiers};
use std::time::Instant;

/// Messages emitted by the UI and the runtime subscriptions.
#[derive(Debug, Clone)]
pub enum Message {
    ToggleAutoplay,
    Reset,
    NavigateTo(String),
    ToggleTheme,
    KeyPressed {
        key: Key,
        modifiers: Modifiers,
    },
    Scrolled {
        offset_y: f32,
        viewport_height: f32,
        content_height: f32,
    },
    WindowResized {
        width: f32,
        height: f32,
    },
    WindowMoved {
        x: f32,
        y: f32,
    },
    WindowFocusChanged(bool),
    TouchPressed {
        y: f32,
    },
    TouchLifted {
        y: f32,
    },
    AdvanceTick {
        generation: u64,
    },
    Frame(Instant),
    SignalPoll,
}
