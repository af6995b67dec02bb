use super::super::super::messages::Message;
use super::super::super::state::App;
use super::super::Effect;
use journey_core::{JourneyCommand, JourneyEvent};
use std::time::Instant;
use tracing::{debug, warn};

impl App {
    pub(super) fn reduce(&mut self, message: Message) -> Vec<Effect> {
        let mut effects = Vec::new();
        let now = match &message {
            Message::Frame(at) => *at,
            _ => Instant::now(),
        };

        match message {
            Message::ToggleAutoplay => self.dispatch(
                JourneyEvent::Command(JourneyCommand::ToggleAutoplay),
                now,
                &mut effects,
            ),
            Message::Reset => {
                self.dispatch(JourneyEvent::Command(JourneyCommand::Reset), now, &mut effects)
            }
            Message::NavigateTo(id) => self.dispatch(
                JourneyEvent::Command(JourneyCommand::NavigateTo(id)),
                now,
                &mut effects,
            ),
            Message::ToggleTheme => self.handle_toggle_theme(),
            Message::KeyPressed { key, modifiers } => {
                if let Some(press) = Self::key_press_for(key, modifiers) {
                    self.dispatch(JourneyEvent::Key(press), now, &mut effects);
                }
            }
            Message::Scrolled {
                offset_y,
                viewport_height,
                content_height,
            } => self.dispatch(
                JourneyEvent::Scrolled {
                    offset: offset_y,
                    viewport_height,
                    content_height,
                },
                now,
                &mut effects,
            ),
            Message::WindowResized { width, height } => self.handle_window_resized(width, height),
            Message::WindowMoved { x, y } => self.handle_window_moved(x, y),
            Message::WindowFocusChanged(focused) => {
                self.handle_focus_changed(focused, now, &mut effects)
            }
            Message::TouchPressed { y } => {
                self.dispatch(JourneyEvent::TouchStart { y }, now, &mut effects)
            }
            Message::TouchLifted { y } => {
                self.dispatch(JourneyEvent::TouchEnd { y }, now, &mut effects)
            }
            Message::AdvanceTick { generation } => {
                self.dispatch(JourneyEvent::AdvanceTick { generation }, now, &mut effects)
            }
            Message::Frame(_) => self.dispatch(JourneyEvent::Frame, now, &mut effects),
            Message::SignalPoll => {
                if self.shutdown.is_requested() {
                    warn!("Ctrl-C received; closing viewer");
                    effects.push(Effect::Quit);
                }
            }
        }

        if !effects.is_empty() {
            debug!(count = effects.len(), "Reducer produced effects");
        }
        effects
    }
}
