//! Entry point for the journey viewer.
//!
//! - Parse command-line arguments.
//! - Load the journey document via `journey_loader`.
//! - Load user configuration from `conf/config.toml`.
//! - Launch the GUI, or run a headless simulation with `--headless`.
//! - `--print-config` dumps the effective config in the grouped layout.

mod app;
mod config;
mod geometry;
mod headless;
mod journey_loader;
mod signals;
mod theme;

use crate::app::run_app;
use crate::config::{load_config, serialize_config};
use crate::headless::run_headless;
use crate::journey_loader::load_journey;
use crate::signals::ShutdownSignal;
use anyhow::{Context, Result, anyhow};
use std::env;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt, prelude::*, reload};

type ReloadHandle = reload::Handle<EnvFilter, tracing_subscriber::Registry>;

const DEFAULT_JOURNEY_PATH: &str = "conf/journey.toml";

struct CliArgs {
    journey_path: PathBuf,
    headless: bool,
    print_config: bool,
}

fn main() {
    let reload_handle = init_tracing();
    if let Err(err) = run(&reload_handle) {
        error!("{err:?}");
        std::process::exit(1);
    }
}

fn run(reload_handle: &ReloadHandle) -> Result<()> {
    let args = parse_args()?;
    let config = load_config(Path::new("conf/config.toml"));
    if args.print_config {
        print!("{}", serialize_config(&config)?);
        return Ok(());
    }
    set_log_level(reload_handle, config.log_level.as_filter_str());
    info!(
        path = %args.journey_path.display(),
        level = %config.log_level,
        variant = ?config.variant,
        headless = args.headless,
        "Starting journey viewer"
    );

    let journey = load_journey(&args.journey_path)?;

    if args.headless {
        return run_headless(journey, &config);
    }

    info!(
        toggle = %config.key_toggle_autoplay,
        pause = %config.key_pause,
        reset = %config.key_reset,
        down = %config.key_scroll_down,
        up = %config.key_scroll_up,
        quit = %config.key_quit,
        "Welcome aboard: scroll, swipe or press the toggle key to drive"
    );
    let shutdown = ShutdownSignal::install()?;
    run_app(journey, config, shutdown).context("Failed to start the GUI")?;
    Ok(())
}

fn parse_args() -> Result<CliArgs> {
    let mut headless = false;
    let mut print_config = false;
    let mut journey_path = None;
    for arg in env::args().skip(1) {
        match arg.as_str() {
            "--headless" => headless = true,
            "--print-config" => print_config = true,
            flag if flag.starts_with("--") => {
                return Err(anyhow!(
                    "Unknown flag {flag}\nUsage: journey-viewer [--headless] [--print-config] [path-to-journey]"
                ));
            }
            _ if journey_path.is_some() => {
                return Err(anyhow!(
                    "Usage: journey-viewer [--headless] [--print-config] [path-to-journey]"
                ));
            }
            path => journey_path = Some(PathBuf::from(path)),
        }
    }

    let journey_path = journey_path.unwrap_or_else(|| PathBuf::from(DEFAULT_JOURNEY_PATH));
    if !print_config && !journey_path.exists() {
        return Err(anyhow!("File not found: {}", journey_path.display()));
    }
    Ok(CliArgs {
        journey_path,
        headless,
        print_config,
    })
}

fn init_tracing() -> ReloadHandle {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    let (filter_layer, handle) = reload::Layer::new(env_filter);
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_filter(filter_layer),
        )
        .init();
    warn!("Logging initialized; override level with config.log_level or RUST_LOG");
    handle
}

fn set_log_level(handle: &ReloadHandle, level: &str) {
    let parsed = EnvFilter::builder()
        .parse(level)
        .unwrap_or_else(|_| EnvFilter::new("debug"));
    if let Err(err) = handle.modify(|filter| *filter = parsed.clone()) {
        warn!(%level, "Failed to update log level from config: {err}");
    } else {
        info!(%level, "Applied log level from config");
    }
}
