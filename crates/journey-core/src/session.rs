//! The journey actor.
//!
//! `JourneySession` owns every piece of engine state for one viewing session
//! and processes one [`JourneyEvent`] at a time. Each call to
//! [`JourneySession::handle`] fully applies the event and returns the effects
//! the host has to carry out (scroll the viewport, mirror timer changes,
//! quit). Time is always supplied by the caller.

use crate::autoscroll::{AutoScrollController, LoopEffect, PlaybackState, TickOutcome};
use crate::bindings::KeyPress;
use crate::checkpoints::{CheckpointTable, TrackedSections};
use crate::config::EngineConfig;
use crate::gestures::{KonamiTracker, SwipeDetector};
use crate::glide::ScrollGlide;
use crate::journey::Journey;
use crate::layout::{EstimatedLayout, LayoutModel, RevealTracker};
use crate::metrics::ScrollMetrics;
use crate::progress::{ProgressCalculator, ProgressSnapshot, percent};
use crate::speed::{SpeedEstimator, SpeedSnapshot};
use crate::throttle::ScrollCoalescer;
use serde::Serialize;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Offsets this close to the tracked one are treated as the viewport echoing
/// a scroll the session already applied.
const ECHO_TOLERANCE: f32 = 0.5;
const RAINBOW_STEP: Duration = Duration::from_millis(50);
const RAINBOW_DEGREES_PER_STEP: u128 = 5;

#[derive(Debug, Clone, PartialEq)]
pub enum JourneyCommand {
    ToggleAutoplay,
    Start,
    Pause,
    Reset,
    ScrollBy { delta: f32, smooth: bool },
    ScrollTo { offset: f32, smooth: bool },
    NavigateTo(String),
    Quit,
}

#[derive(Debug, Clone, PartialEq)]
pub enum JourneyEvent {
    Scrolled {
        offset: f32,
        viewport_height: f32,
        content_height: f32,
    },
    Key(KeyPress),
    TouchStart { y: f32 },
    TouchEnd { y: f32 },
    VisibilityChanged { visible: bool },
    AdvanceTick { generation: u64 },
    Frame,
    Command(JourneyCommand),
}

#[derive(Debug, Clone, PartialEq)]
pub enum JourneyEffect {
    ScrollTo { offset: f32 },
    LoopStarted { generation: u64, interval: Duration },
    LoopCancelled { generation: u64 },
    EasterEgg,
    Quit,
}

impl From<LoopEffect> for JourneyEffect {
    fn from(effect: LoopEffect) -> Self {
        match effect {
            LoopEffect::Started {
                generation,
                interval,
            } => JourneyEffect::LoopStarted {
                generation,
                interval,
            },
            LoopEffect::Cancelled { generation } => JourneyEffect::LoopCancelled { generation },
        }
    }
}

/// Everything the HUD renders, computed from the last coalesced passes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JourneySnapshot {
    pub playback: PlaybackState,
    pub offset: f32,
    pub max_offset: f32,
    pub progress: ProgressSnapshot,
    pub total_distance: u32,
    pub distance_unit: &'static str,
    pub speed: SpeedSnapshot,
    pub speed_unit: &'static str,
    pub car_top: f32,
    pub progress_fill: f32,
    pub parallax: f32,
    pub revealed: Vec<bool>,
    pub show_hint: bool,
    pub rainbow_hue: Option<f32>,
    pub scroll_target: Option<f32>,
    pub finished: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HintState {
    Pending { show_at: Instant },
    Visible,
    Dismissed,
}

pub struct JourneySession {
    config: EngineConfig,
    journey: Journey,
    table: CheckpointTable,
    layout: EstimatedLayout,
    sections: TrackedSections,
    metrics: ScrollMetrics,
    autoscroll: AutoScrollController,
    calculator: ProgressCalculator,
    progress: ProgressSnapshot,
    display_offset: f32,
    speed: SpeedEstimator,
    progress_lane: ScrollCoalescer,
    checkpoint_lane: ScrollCoalescer,
    glide: Option<ScrollGlide>,
    swipe: SwipeDetector,
    konami: KonamiTracker,
    reveal: RevealTracker,
    hint: HintState,
    easter_egg_since: Option<Instant>,
    finished: bool,
}

impl JourneySession {
    /// `viewport_height` seeds the metrics until the viewport reports real
    /// geometry; the content height starts from the layout estimate.
    pub fn new(
        journey: Journey,
        layout_model: LayoutModel,
        config: EngineConfig,
        viewport_height: f32,
        now: Instant,
    ) -> Self {
        let layout = layout_model.estimate(&journey);
        let metrics = ScrollMetrics::new(0.0, viewport_height, layout.total_height());
        let sections = layout.sections_for(metrics.content_height);
        let table = journey.checkpoint_table(config.variant.start_label());
        let progress = ProgressSnapshot::start(table.start_label());
        let reveal = RevealTracker::new(journey.stops.len(), config.reveal_margin);

        let mut session = Self {
            autoscroll: AutoScrollController::new(config.scroll_step, config.tick_interval),
            calculator: ProgressCalculator::new(config.total_distance),
            speed: SpeedEstimator::new(config.speed, metrics.offset),
            progress_lane: ScrollCoalescer::new(config.progress_throttle),
            checkpoint_lane: ScrollCoalescer::new(config.checkpoint_throttle),
            swipe: SwipeDetector::new(config.swipe_threshold, config.swipe_distance),
            konami: KonamiTracker::new(),
            hint: HintState::Pending {
                show_at: now + config.hint_delay,
            },
            glide: None,
            easter_egg_since: None,
            finished: false,
            display_offset: 0.0,
            journey,
            table,
            layout,
            sections,
            metrics,
            progress,
            reveal,
            config,
        };
        // The start label stays up until the first scroll sample.
        session.refresh_display();
        info!(
            stops = session.journey.stops.len(),
            variant = %session.config.variant,
            step = session.autoscroll.step(),
            "Journey session ready"
        );
        session
    }

    pub fn journey(&self) -> &Journey {
        &self.journey
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn metrics(&self) -> ScrollMetrics {
        self.metrics
    }

    pub fn playback(&self) -> PlaybackState {
        self.autoscroll.state()
    }

    /// Generation of the advance loop the host should be ticking.
    pub fn advance_generation(&self) -> Option<u64> {
        self.autoscroll.active_generation()
    }

    pub fn tick_interval(&self) -> Duration {
        self.autoscroll.interval()
    }

    pub fn frame_interval(&self) -> Duration {
        self.config.frame_interval
    }

    /// True while anything time-based is in flight and frames must keep
    /// arriving.
    pub fn needs_frames(&self, now: Instant) -> bool {
        self.glide.is_some()
            || self.progress_lane.is_pending()
            || self.checkpoint_lane.is_pending()
            || self.speed.decay_pending()
            || matches!(self.hint, HintState::Pending { .. })
            || self.easter_egg_active(now)
    }

    /// Re-estimate stop positions, e.g. after the window width changed.
    pub fn relayout(&mut self, model: LayoutModel) {
        self.layout = model.estimate(&self.journey);
        self.sections = self.layout.sections_for(self.metrics.content_height);
        self.checkpoint_pass();
    }

    pub fn handle(&mut self, event: JourneyEvent, now: Instant) -> Vec<JourneyEffect> {
        let mut effects = Vec::new();
        match event {
            JourneyEvent::Scrolled {
                offset,
                viewport_height,
                content_height,
            } => self.on_scrolled(offset, viewport_height, content_height, now),
            JourneyEvent::Key(press) => self.on_key(press, now, &mut effects),
            JourneyEvent::TouchStart { y } => self.swipe.touch_start(y),
            JourneyEvent::TouchEnd { y } => {
                if let Some(delta) = self.swipe.touch_end(y) {
                    debug!(delta, "Swipe recognized");
                    self.scroll_by(delta, true, now, &mut effects);
                }
            }
            JourneyEvent::VisibilityChanged { visible } => {
                if !visible && self.autoscroll.is_playing() {
                    info!("Viewer hidden; pausing auto-scroll");
                    effects.extend(self.autoscroll.pause().into_iter().map(JourneyEffect::from));
                }
            }
            JourneyEvent::AdvanceTick { generation } => {
                self.on_advance_tick(generation, now, &mut effects)
            }
            JourneyEvent::Frame => self.on_frame(now, &mut effects),
            JourneyEvent::Command(command) => self.apply_command(command, now, &mut effects),
        }
        self.update_hint(now);
        effects
    }

    pub fn snapshot(&self, now: Instant) -> JourneySnapshot {
        let percent = self.progress.percent;
        JourneySnapshot {
            playback: self.autoscroll.state(),
            offset: self.metrics.offset,
            max_offset: self.metrics.max_offset(),
            progress: self.progress.clone(),
            total_distance: self.calculator.total_distance(),
            distance_unit: self.config.variant.distance_unit(),
            speed: self.speed.snapshot(),
            speed_unit: self.config.variant.speed_unit(),
            car_top: self.config.car_base_top + (percent / 10.0).sin() * self.config.car_wobble,
            progress_fill: (percent / 100.0).clamp(0.0, 1.0),
            parallax: self.display_offset * self.config.parallax_factor,
            revealed: self.reveal.revealed().to_vec(),
            show_hint: matches!(self.hint, HintState::Visible),
            rainbow_hue: self.rainbow_hue(now),
            scroll_target: self.glide.map(|glide| glide.target()),
            finished: self.finished,
        }
    }

    fn apply_command(
        &mut self,
        command: JourneyCommand,
        now: Instant,
        effects: &mut Vec<JourneyEffect>,
    ) {
        debug!(?command, "Journey command");
        match command {
            JourneyCommand::ToggleAutoplay => {
                effects.extend(self.autoscroll.toggle().into_iter().map(JourneyEffect::from));
            }
            JourneyCommand::Start => {
                effects.extend(self.autoscroll.start().into_iter().map(JourneyEffect::from));
            }
            JourneyCommand::Pause => {
                effects.extend(self.autoscroll.pause().into_iter().map(JourneyEffect::from));
            }
            JourneyCommand::Reset => {
                effects.extend(self.autoscroll.reset().into_iter().map(JourneyEffect::from));
                self.finished = false;
                self.scroll_to(0.0, true, now, effects);
            }
            JourneyCommand::ScrollBy { delta, smooth } => {
                self.scroll_by(delta, smooth, now, effects)
            }
            JourneyCommand::ScrollTo { offset, smooth } => {
                self.scroll_to(offset, smooth, now, effects)
            }
            JourneyCommand::NavigateTo(id) => self.navigate_to(&id, now, effects),
            JourneyCommand::Quit => effects.push(JourneyEffect::Quit),
        }
    }

    fn on_key(&mut self, press: KeyPress, now: Instant, effects: &mut Vec<JourneyEffect>) {
        if self.konami.push(&press.key) {
            info!("Rainbow car activated");
            self.easter_egg_since = Some(now);
            effects.push(JourneyEffect::EasterEgg);
        }
        if let Some(command) = self.config.bindings.command_for(&press) {
            self.apply_command(command, now, effects);
        }
    }

    fn on_scrolled(&mut self, offset: f32, viewport_height: f32, content_height: f32, now: Instant) {
        let sample = ScrollMetrics::new(offset, viewport_height, content_height);
        let geometry_changed = (sample.content_height - self.metrics.content_height).abs()
            > ECHO_TOLERANCE
            || (sample.viewport_height - self.metrics.viewport_height).abs() > ECHO_TOLERANCE;
        let moved = (sample.offset - self.metrics.offset).abs() > ECHO_TOLERANCE;

        if geometry_changed {
            debug!(
                content_height = sample.content_height,
                viewport_height = sample.viewport_height,
                "Viewport geometry changed"
            );
            self.sections = self.layout.sections_for(sample.content_height);
        }
        self.metrics = sample;

        if moved || geometry_changed {
            self.observe(now);
        }
    }

    fn on_advance_tick(&mut self, generation: u64, now: Instant, effects: &mut Vec<JourneyEffect>) {
        match self.autoscroll.tick(generation, &mut self.metrics) {
            TickOutcome::Stale => {
                debug!(generation, "Ignoring stale advance tick");
            }
            TickOutcome::Advanced { offset } => {
                effects.push(JourneyEffect::ScrollTo { offset });
                self.observe(now);
            }
            TickOutcome::Finished { offset, cancelled } => {
                self.finished = true;
                effects.push(JourneyEffect::ScrollTo { offset });
                effects.push(cancelled.into());
                self.observe(now);
            }
        }
    }

    fn on_frame(&mut self, now: Instant, effects: &mut Vec<JourneyEffect>) {
        if let Some(glide) = self.glide {
            let (next, arrived) = glide.advance(self.metrics.offset);
            let next = self.metrics.clamp_offset(next);
            if arrived {
                self.glide = None;
            }
            if (next - self.metrics.offset).abs() > f32::EPSILON {
                self.metrics.set_offset(next);
                effects.push(JourneyEffect::ScrollTo { offset: next });
                self.observe(now);
            }
        }

        if self.progress_lane.flush_due(now) {
            self.progress_pass(now);
        }
        if self.checkpoint_lane.flush_due(now) {
            self.checkpoint_pass();
        }
        self.speed.decay_if_due(now);

        if let Some(since) = self.easter_egg_since {
            if now.saturating_duration_since(since) >= self.config.easter_egg_duration {
                debug!("Rainbow car finished");
                self.easter_egg_since = None;
            }
        }
    }

    fn scroll_by(&mut self, delta: f32, smooth: bool, now: Instant, effects: &mut Vec<JourneyEffect>) {
        let base = self
            .glide
            .map(|glide| glide.target())
            .unwrap_or(self.metrics.offset);
        self.scroll_to(base + delta, smooth, now, effects);
    }

    fn scroll_to(&mut self, offset: f32, smooth: bool, now: Instant, effects: &mut Vec<JourneyEffect>) {
        let target = self.metrics.clamp_offset(offset);
        if smooth {
            self.glide = Some(ScrollGlide::new(target, self.config.glide_fraction));
            debug!(target, "Smooth scroll requested");
            return;
        }
        self.glide = None;
        if (target - self.metrics.offset).abs() > f32::EPSILON {
            self.metrics.set_offset(target);
            effects.push(JourneyEffect::ScrollTo { offset: target });
            self.observe(now);
        }
    }

    fn navigate_to(&mut self, id: &str, now: Instant, effects: &mut Vec<JourneyEffect>) {
        let Some(top) = self.sections.top_of(id) else {
            debug!(id, "Navigation target not found; ignoring");
            return;
        };
        if self.autoscroll.is_playing() {
            effects.extend(self.autoscroll.pause().into_iter().map(JourneyEffect::from));
        }
        info!(id, top, "Navigating to stop");
        self.scroll_to(top, true, now, effects);
    }

    /// The offset changed; offer the sample to both coalescing lanes.
    fn observe(&mut self, now: Instant) {
        if self.progress_lane.offer(now) {
            self.progress_pass(now);
        }
        if self.checkpoint_lane.offer(now) {
            self.checkpoint_pass();
        }
    }

    fn progress_pass(&mut self, now: Instant) {
        self.speed.sample(self.metrics.offset, now);
        self.refresh_display();
    }

    fn refresh_display(&mut self) {
        let value = percent(self.metrics.offset, self.metrics.max_offset());
        self.progress.percent = value;
        self.progress.distance_units = self.calculator.distance_units(value);
        self.display_offset = self.metrics.offset;
        if self.metrics.offset < self.metrics.max_offset() {
            self.finished = false;
        }

        let tops: Vec<f32> = self
            .journey
            .stops
            .iter()
            .map(|stop| self.sections.top_of(&stop.id).unwrap_or(f32::INFINITY))
            .collect();
        for idx in self
            .reveal
            .update(&tops, self.metrics.offset, self.metrics.viewport_height)
        {
            debug!(stop = idx, "Stop revealed");
        }
    }

    fn checkpoint_pass(&mut self) {
        let checkpoint = self.sections.resolve(
            &self.table,
            self.metrics.offset,
            self.config.checkpoint_lookahead,
        );
        if self.progress.checkpoint_id.as_deref() != checkpoint.id {
            info!(
                checkpoint = checkpoint.id.unwrap_or("start"),
                label = checkpoint.label,
                "Checkpoint changed"
            );
        }
        self.progress.set_checkpoint(checkpoint);
    }

    fn update_hint(&mut self, now: Instant) {
        self.hint = match self.hint {
            HintState::Pending { show_at } if now >= show_at => {
                if self.metrics.offset <= 0.0 {
                    debug!("Showing scroll hint");
                    HintState::Visible
                } else {
                    HintState::Dismissed
                }
            }
            HintState::Visible if self.metrics.offset > self.config.hint_dismiss_offset => {
                debug!("Dismissing scroll hint");
                HintState::Dismissed
            }
            other => other,
        };
    }

    fn easter_egg_active(&self, now: Instant) -> bool {
        self.easter_egg_since
            .is_some_and(|since| now.saturating_duration_since(since) < self.config.easter_egg_duration)
    }

    fn rainbow_hue(&self, now: Instant) -> Option<f32> {
        let since = self.easter_egg_since?;
        let elapsed = now.saturating_duration_since(since);
        if elapsed >= self.config.easter_egg_duration {
            return None;
        }
        let steps = elapsed.as_millis() / RAINBOW_STEP.as_millis();
        Some(((steps * RAINBOW_DEGREES_PER_STEP) % 360) as f32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bindings::KeyToken;
    use crate::journey::Stop;

    const VIEWPORT: f32 = 600.0;

    fn sample_journey(stop_count: usize) -> Journey {
        Journey {
            title: "Career".into(),
            subtitle: String::new(),
            start_label: None,
            stops: (0..stop_count)
                .map(|idx| Stop {
                    id: format!("stop-{idx}"),
                    label: Some(format!("Stop {idx}")),
                    title: format!("Chapter {idx}"),
                    lines: (0..12).map(|n| format!("Line {n} of stop {idx}")).collect(),
                })
                .collect(),
        }
    }

    fn build_session(stop_count: usize, now: Instant) -> JourneySession {
        JourneySession::new(
            sample_journey(stop_count),
            LayoutModel::default(),
            EngineConfig::default(),
            VIEWPORT,
            now,
        )
    }

    fn command(session: &mut JourneySession, command: JourneyCommand, now: Instant) -> Vec<JourneyEffect> {
        session.handle(JourneyEvent::Command(command), now)
    }

    fn run_frames(session: &mut JourneySession, start: Instant, frames: u32) -> Instant {
        let mut now = start;
        for _ in 0..frames {
            now += session.frame_interval();
            session.handle(JourneyEvent::Frame, now);
        }
        now
    }

    #[test]
    fn starts_idle_at_start_label() {
        let now = Instant::now();
        let session = build_session(3, now);
        let snapshot = session.snapshot(now);
        assert_eq!(snapshot.playback, PlaybackState::Idle);
        assert_eq!(snapshot.progress.percent, 0.0);
        assert_eq!(snapshot.progress.checkpoint_label, "Starting Point");
        assert_eq!(snapshot.speed_unit, "km/h");
    }

    #[test]
    fn autoplay_runs_to_the_end_and_stops() {
        let mut now = Instant::now();
        let mut session = build_session(3, now);
        let effects = command(&mut session, JourneyCommand::ToggleAutoplay, now);
        assert!(matches!(effects.as_slice(), [JourneyEffect::LoopStarted { .. }]));

        let generation = session.advance_generation().expect("live loop");
        let max = session.metrics().max_offset();
        let bound = (max / session.config().scroll_step).ceil() as usize;
        let mut ticks = 0;
        while session.playback() == PlaybackState::Playing {
            now += session.tick_interval();
            session.handle(JourneyEvent::AdvanceTick { generation }, now);
            ticks += 1;
            assert!(session.metrics().offset <= max);
            assert!(ticks <= bound);
        }
        now = run_frames(&mut session, now, 20);

        let snapshot = session.snapshot(now);
        assert_eq!(snapshot.playback, PlaybackState::Paused);
        assert_eq!(snapshot.progress.percent, 100.0);
        assert_eq!(snapshot.progress.distance_units, 100);
        assert_eq!(snapshot.progress.checkpoint_id.as_deref(), Some("stop-2"));
        assert!(snapshot.finished);
        assert_eq!(session.advance_generation(), None);
    }

    #[test]
    fn double_start_keeps_single_loop() {
        let now = Instant::now();
        let mut session = build_session(2, now);
        command(&mut session, JourneyCommand::Start, now);
        let generation = session.advance_generation();
        assert!(command(&mut session, JourneyCommand::Start, now).is_empty());
        assert_eq!(session.advance_generation(), generation);
    }

    #[test]
    fn reset_pauses_and_targets_top() {
        for prior in [None, Some(JourneyCommand::Start), Some(JourneyCommand::Pause)] {
            let now = Instant::now();
            let mut session = build_session(3, now);
            command(
                &mut session,
                JourneyCommand::ScrollTo {
                    offset: 900.0,
                    smooth: false,
                },
                now,
            );
            if let Some(prior) = prior {
                command(&mut session, prior, now);
            }
            command(&mut session, JourneyCommand::Reset, now);
            let snapshot = session.snapshot(now);
            assert_eq!(snapshot.playback, PlaybackState::Paused);
            assert_eq!(snapshot.scroll_target, Some(0.0));
            assert_eq!(session.advance_generation(), None);

            let later = run_frames(&mut session, now, 120);
            assert_eq!(session.metrics().offset, 0.0);
            assert_eq!(session.snapshot(later).scroll_target, None);
        }
    }

    #[test]
    fn stale_tick_after_pause_does_not_scroll() {
        let now = Instant::now();
        let mut session = build_session(2, now);
        command(&mut session, JourneyCommand::Start, now);
        let generation = session.advance_generation().expect("live loop");
        command(&mut session, JourneyCommand::Pause, now);
        let effects = session.handle(JourneyEvent::AdvanceTick { generation }, now);
        assert!(effects.is_empty());
        assert_eq!(session.metrics().offset, 0.0);
    }

    #[test]
    fn hidden_window_pauses_playback() {
        let now = Instant::now();
        let mut session = build_session(2, now);
        command(&mut session, JourneyCommand::Start, now);
        session.handle(JourneyEvent::VisibilityChanged { visible: false }, now);
        assert_eq!(session.playback(), PlaybackState::Paused);
        assert_eq!(session.advance_generation(), None);
    }

    #[test]
    fn keys_drive_the_controller() {
        let now = Instant::now();
        let mut session = build_session(2, now);
        session.handle(JourneyEvent::Key(KeyPress::plain(KeyToken::Space)), now);
        assert_eq!(session.playback(), PlaybackState::Playing);
        session.handle(JourneyEvent::Key(KeyPress::plain(KeyToken::Escape)), now);
        assert_eq!(session.playback(), PlaybackState::Paused);

        session.handle(JourneyEvent::Key(KeyPress::plain(KeyToken::ArrowDown)), now);
        assert_eq!(session.snapshot(now).scroll_target, Some(100.0));
        session.handle(JourneyEvent::Key(KeyPress::plain(KeyToken::ArrowDown)), now);
        assert_eq!(session.snapshot(now).scroll_target, Some(200.0));

        let quit = session.handle(JourneyEvent::Key(KeyPress::plain(KeyToken::Char('q'))), now);
        assert_eq!(quit, vec![JourneyEffect::Quit]);
    }

    #[test]
    fn navigation_pauses_and_ignores_unknown_targets() {
        let now = Instant::now();
        let mut session = build_session(3, now);
        command(&mut session, JourneyCommand::Start, now);

        let effects = command(&mut session, JourneyCommand::NavigateTo("nowhere".into()), now);
        assert!(effects.is_empty());
        assert_eq!(session.playback(), PlaybackState::Playing);

        command(&mut session, JourneyCommand::NavigateTo("stop-1".into()), now);
        assert_eq!(session.playback(), PlaybackState::Paused);
        let target = session.snapshot(now).scroll_target.expect("glide target");
        assert!(target > 0.0);
        assert!(target <= session.metrics().max_offset());
    }

    #[test]
    fn scroll_events_are_coalesced() {
        let start = Instant::now();
        let mut session = build_session(3, start);
        let content = session.metrics().content_height;
        for step in 1..=10u64 {
            session.handle(
                JourneyEvent::Scrolled {
                    offset: step as f32 * 40.0,
                    viewport_height: VIEWPORT,
                    content_height: content,
                },
                start + Duration::from_millis(step),
            );
        }
        // Only the leading sample has been processed so far.
        let early = session.snapshot(start + Duration::from_millis(10));
        let max = session.metrics().max_offset();
        assert_eq!(early.progress.percent, percent(40.0, max));

        let later = start + Duration::from_millis(80);
        session.handle(JourneyEvent::Frame, later);
        assert_eq!(session.snapshot(later).progress.percent, percent(400.0, max));
    }

    #[test]
    fn echoed_scroll_is_not_a_new_sample() {
        let now = Instant::now();
        let mut session = build_session(2, now);
        let metrics = session.metrics();
        command(
            &mut session,
            JourneyCommand::ScrollTo {
                offset: 300.0,
                smooth: false,
            },
            now,
        );
        let speed = session.snapshot(now).speed.value;
        assert!(speed > 0.0);
        session.handle(
            JourneyEvent::Scrolled {
                offset: 300.0,
                viewport_height: metrics.viewport_height,
                content_height: metrics.content_height,
            },
            now + Duration::from_millis(60),
        );
        assert_eq!(session.snapshot(now).speed.value, speed);
    }

    #[test]
    fn speed_coasts_to_zero() {
        let now = Instant::now();
        let mut session = build_session(3, now);
        command(
            &mut session,
            JourneyCommand::ScrollTo {
                offset: 50.0,
                smooth: false,
            },
            now,
        );
        assert!(session.snapshot(now).speed.value > 0.0);
        let later = run_frames(&mut session, now, 200);
        assert_eq!(session.snapshot(later).speed.value, 0.0);
    }

    #[test]
    fn swipe_up_scrolls_down() {
        let now = Instant::now();
        let mut session = build_session(3, now);
        session.handle(JourneyEvent::TouchStart { y: 500.0 }, now);
        session.handle(JourneyEvent::TouchEnd { y: 380.0 }, now);
        assert_eq!(session.snapshot(now).scroll_target, Some(200.0));
    }

    #[test]
    fn hint_shows_only_when_still_at_top() {
        let now = Instant::now();
        let mut session = build_session(2, now);
        let shown_at = now + Duration::from_secs(2);
        session.handle(JourneyEvent::Frame, shown_at);
        assert!(session.snapshot(shown_at).show_hint);

        command(
            &mut session,
            JourneyCommand::ScrollTo {
                offset: 80.0,
                smooth: false,
            },
            shown_at,
        );
        assert!(!session.snapshot(shown_at).show_hint);

        let mut scrolled_early = build_session(2, now);
        command(
            &mut scrolled_early,
            JourneyCommand::ScrollTo {
                offset: 10.0,
                smooth: false,
            },
            now,
        );
        scrolled_early.handle(JourneyEvent::Frame, shown_at);
        assert!(!scrolled_early.snapshot(shown_at).show_hint);
    }

    #[test]
    fn konami_code_turns_on_rainbow_car() {
        let now = Instant::now();
        let mut session = build_session(2, now);
        let sequence = [
            KeyToken::ArrowUp,
            KeyToken::ArrowUp,
            KeyToken::ArrowDown,
            KeyToken::ArrowDown,
            KeyToken::ArrowLeft,
            KeyToken::ArrowRight,
            KeyToken::ArrowLeft,
            KeyToken::ArrowRight,
            KeyToken::Char('b'),
            KeyToken::Char('a'),
        ];
        let mut saw_egg = false;
        for key in sequence {
            let effects = session.handle(JourneyEvent::Key(KeyPress::plain(key)), now);
            saw_egg |= effects.contains(&JourneyEffect::EasterEgg);
        }
        assert!(saw_egg);
        assert_eq!(session.snapshot(now).rainbow_hue, Some(0.0));
        let mid = now + Duration::from_millis(120);
        assert_eq!(session.snapshot(mid).rainbow_hue, Some(10.0));
        assert_eq!(session.snapshot(now + Duration::from_secs(3)).rainbow_hue, None);
    }

    #[test]
    fn unscrollable_journey_never_divides_by_zero() {
        let now = Instant::now();
        let mut session = build_session(1, now);
        let content = session.metrics().content_height;
        session.handle(
            JourneyEvent::Scrolled {
                offset: 0.0,
                viewport_height: content + 500.0,
                content_height: content,
            },
            now,
        );
        command(&mut session, JourneyCommand::Start, now);
        let generation = session.advance_generation().expect("live loop");
        session.handle(JourneyEvent::AdvanceTick { generation }, now);
        let later = run_frames(&mut session, now, 10);
        let snapshot = session.snapshot(later);
        assert_eq!(snapshot.playback, PlaybackState::Paused);
        assert_eq!(snapshot.progress.percent, 0.0);
        assert!(snapshot.car_top.is_finite());
    }

    #[test]
    fn car_and_road_follow_scroll_position() {
        let now = Instant::now();
        let mut session = build_session(3, now);
        let offset = session.metrics().max_offset() / 2.0;
        session.handle(
            JourneyEvent::Scrolled {
                offset,
                viewport_height: session.metrics().viewport_height,
                content_height: session.metrics().content_height,
            },
            now,
        );
        let later = run_frames(&mut session, now, 10);
        let snapshot = session.snapshot(later);

        assert!((snapshot.progress.percent - 50.0).abs() < 1e-3);
        let expected_car = 100.0 + 5.0f32.sin() * 10.0;
        assert!((snapshot.car_top - expected_car).abs() < 1e-3);
        assert!((snapshot.parallax - offset * 0.05).abs() < 1e-3);
        assert!((snapshot.progress_fill - 0.5).abs() < 1e-5);
    }

    #[test]
    fn snapshot_serializes_for_headless_output() {
        let now = Instant::now();
        let session = build_session(2, now);
        let json = serde_json::to_value(session.snapshot(now)).expect("snapshot json");
        assert_eq!(json["playback"], "idle");
        assert_eq!(json["progress"]["checkpoint_label"], "Starting Point");
    }
}
