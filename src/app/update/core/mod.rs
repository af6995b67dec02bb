mod reducer;
mod runtime;
mod shortcuts;

use super::super::messages::Message;
use super::super::state::{App, SIGNAL_POLL_INTERVAL};
use iced::event;
use iced::time;
use iced::{Subscription, Task};
use std::time::Instant;

impl App {
    pub fn subscription(app: &App) -> Subscription<Message> {
        let mut subscriptions: Vec<Subscription<Message>> = vec![
            event::listen_with(runtime::runtime_event_to_message),
            time::every(SIGNAL_POLL_INTERVAL).map(|_| Message::SignalPoll),
        ];

        // Keyed by generation so a restarted loop gets a fresh timer.
        if let Some(generation) = app.session.advance_generation() {
            subscriptions.push(
                time::every(app.session.tick_interval())
                    .with(generation)
                    .map(|(generation, _)| Message::AdvanceTick { generation }),
            );
        }

        if app.session.needs_frames(Instant::now()) {
            subscriptions.push(time::every(app.session.frame_interval()).map(Message::Frame));
        }

        Subscription::batch(subscriptions)
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let effects = self.reduce(message);
        if effects.is_empty() {
            Task::none()
        } else {
            Task::batch(effects.into_iter().map(|effect| self.run_effect(effect)))
        }
    }
}
