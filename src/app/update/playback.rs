use super::super::state::App;
use super::Effect;
use journey_core::{JourneyEffect, JourneyEvent};
use std::time::Instant;
use tracing::{debug, info};

impl App {
    /// Feed one event to the session and translate what it asks for.
    pub(super) fn dispatch(&mut self, event: JourneyEvent, now: Instant, effects: &mut Vec<Effect>) {
        for effect in self.session.handle(event, now) {
            match effect {
                JourneyEffect::ScrollTo { offset } => effects.push(Effect::ScrollTo(offset)),
                JourneyEffect::LoopStarted {
                    generation,
                    interval,
                } => {
                    debug!(generation, ?interval, "Advance loop subscribed");
                }
                JourneyEffect::LoopCancelled { generation } => {
                    debug!(generation, "Advance loop unsubscribed");
                }
                JourneyEffect::EasterEgg => info!("Rainbow mode engaged"),
                JourneyEffect::Quit => effects.push(Effect::Quit),
            }
        }
    }

    pub(super) fn handle_focus_changed(
        &mut self,
        focused: bool,
        now: Instant,
        effects: &mut Vec<Effect>,
    ) {
        if self.ui.focused == focused {
            return;
        }
        self.ui.focused = focused;
        debug!(focused, "Window focus changed");
        self.dispatch(JourneyEvent::VisibilityChanged { visible: focused }, now, effects);
    }
}
