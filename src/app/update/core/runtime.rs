use super::super::super::messages::Message;
use super::super::super::state::{App, JOURNEY_SCROLL_ID};
use super::super::Effect;
use iced::Event;
use iced::Task;
use iced::event;
use iced::keyboard;
use iced::touch;
use iced::widget::scrollable::{self, AbsoluteOffset};
use iced::window;
use tracing::info;

impl App {
    pub(super) fn run_effect(&mut self, effect: Effect) -> Task<Message> {
        match effect {
            Effect::ScrollTo(y) => {
                scrollable::scroll_to(JOURNEY_SCROLL_ID.clone(), AbsoluteOffset { x: 0.0, y })
            }
            Effect::Quit => {
                let snapshot = self.session.snapshot(std::time::Instant::now());
                info!(
                    percent = snapshot.progress.percent,
                    checkpoint = %snapshot.progress.checkpoint_label,
                    window = ?self.ui.window_position,
                    "Closing journey viewer"
                );
                iced::exit()
            }
        }
    }
}

pub(super) fn runtime_event_to_message(
    event: Event,
    status: event::Status,
    _window_id: window::Id,
) -> Option<Message> {
    // The scrollable captures touches it scrolls with; swipes are still
    // recognized from them.
    match event {
        Event::Touch(touch::Event::FingerPressed { position, .. }) => {
            return Some(Message::TouchPressed { y: position.y });
        }
        Event::Touch(touch::Event::FingerLifted { position, .. }) => {
            return Some(Message::TouchLifted { y: position.y });
        }
        _ => {}
    }
    if status == event::Status::Captured {
        return None;
    }
    match event {
        Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized {
            width: size.width,
            height: size.height,
        }),
        Event::Window(window::Event::Moved(position)) => Some(Message::WindowMoved {
            x: position.x,
            y: position.y,
        }),
        Event::Window(window::Event::Focused) => Some(Message::WindowFocusChanged(true)),
        Event::Window(window::Event::Unfocused) => Some(Message::WindowFocusChanged(false)),
        Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) => {
            Some(Message::KeyPressed { key, modifiers })
        }
        _ => None,
    }
}
