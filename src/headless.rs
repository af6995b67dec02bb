//! Headless simulation: auto-play a journey against a simulated viewport and
//! clock, writing JSON snapshots to stdout.

use crate::config::AppConfig;
use crate::geometry::layout_model;
use anyhow::{Context, Result, bail};
use journey_core::{
    Journey, JourneyCommand, JourneyEffect, JourneyEvent, JourneySession, JourneySnapshot,
    PlaybackState,
};
use std::io::{self, Write};
use std::time::Instant;
use tracing::{debug, info};

/// Frames allowed for settling after the run (hint, speed decay, flushes).
const MAX_SETTLE_FRAMES: usize = 10_000;

pub fn run_headless(journey: Journey, config: &AppConfig) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let snapshots = simulate(journey, config)?;
    for snapshot in &snapshots {
        let line = serde_json::to_string(snapshot).context("Failed to encode snapshot")?;
        writeln!(out, "{line}").context("Failed to write snapshot")?;
    }
    out.flush().context("Failed to flush stdout")?;
    Ok(())
}

/// Snapshots at every checkpoint change, followed by the settled final one.
pub(crate) fn simulate(journey: Journey, config: &AppConfig) -> Result<Vec<JourneySnapshot>> {
    let mut now = Instant::now();
    let mut session = JourneySession::new(
        journey,
        layout_model(config, config.window_width),
        config.engine_config(),
        config.window_height,
        now,
    );
    let viewport_height = session.metrics().viewport_height;
    let content_height = session.metrics().content_height;
    let max_ticks = (session.metrics().max_offset() / session.config().scroll_step).ceil() as usize + 1;

    let mut snapshots = Vec::new();
    let mut last_checkpoint = session.snapshot(now).progress.checkpoint_label;

    session.handle(JourneyEvent::Command(JourneyCommand::Start), now);
    let mut ticks = 0usize;
    while let Some(generation) = session.advance_generation() {
        if ticks > max_ticks {
            bail!("Auto-scroll did not reach the end after {ticks} ticks");
        }
        ticks += 1;
        now += session.tick_interval();
        let effects = session.handle(JourneyEvent::AdvanceTick { generation }, now);
        echo_scrolls(&mut session, effects, viewport_height, content_height, now);
        session.handle(JourneyEvent::Frame, now);

        let snapshot = session.snapshot(now);
        if snapshot.progress.checkpoint_label != last_checkpoint {
            debug!(label = %snapshot.progress.checkpoint_label, ticks, "Checkpoint reached");
            last_checkpoint = snapshot.progress.checkpoint_label.clone();
            snapshots.push(snapshot);
        }
    }

    let mut frames = 0usize;
    while session.needs_frames(now) && frames < MAX_SETTLE_FRAMES {
        now += session.frame_interval();
        let effects = session.handle(JourneyEvent::Frame, now);
        echo_scrolls(&mut session, effects, viewport_height, content_height, now);
        frames += 1;
    }

    let last = session.snapshot(now);
    if last.playback != PlaybackState::Paused {
        bail!("Simulation ended in unexpected state {:?}", last.playback);
    }
    info!(
        ticks,
        settle_frames = frames,
        percent = last.progress.percent,
        checkpoints = snapshots.len(),
        "Headless run complete"
    );
    snapshots.push(last);
    Ok(snapshots)
}

/// Feed programmatic scrolls back the way a real viewport would report them.
fn echo_scrolls(
    session: &mut JourneySession,
    effects: Vec<JourneyEffect>,
    viewport_height: f32,
    content_height: f32,
    now: Instant,
) {
    for effect in effects {
        if let JourneyEffect::ScrollTo { offset } = effect {
            session.handle(
                JourneyEvent::Scrolled {
                    offset,
                    viewport_height,
                    content_height,
                },
                now,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use journey_core::Stop;

    fn journey() -> Journey {
        Journey {
            title: "Sim".into(),
            subtitle: String::new(),
            start_label: Some("Garage".into()),
            stops: ["school", "intern", "senior"]
                .iter()
                .map(|id| Stop {
                    id: id.to_string(),
                    label: None,
                    title: id.to_uppercase(),
                    lines: (0..20).map(|n| format!("Entry {n}")).collect(),
                })
                .collect(),
        }
    }

    #[test]
    fn simulation_visits_checkpoints_in_order() {
        let snapshots = simulate(journey(), &AppConfig::default()).expect("simulation");
        let labels: Vec<&str> = snapshots
            .iter()
            .map(|snapshot| snapshot.progress.checkpoint_label.as_str())
            .collect();
        let final_snapshot = snapshots.last().expect("final snapshot");
        assert_eq!(final_snapshot.progress.percent, 100.0);
        assert!(final_snapshot.finished);
        assert_eq!(final_snapshot.speed.value, 0.0);
        assert!(labels.contains(&"SCHOOL"));
        let last_label = labels.last().copied();
        assert_eq!(last_label, Some("SENIOR"));
    }
}
