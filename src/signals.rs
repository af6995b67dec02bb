//! Ctrl-C handling for the windowed viewer.
//!
//! The handler only flips a flag; the app polls it from a subscription and
//! quits through the normal exit path.

use anyhow::{Context, Result};
use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

#[derive(Clone, Debug, Default)]
pub struct ShutdownSignal {
    requested: Arc<AtomicBool>,
}

impl ShutdownSignal {
    /// Install the process-wide Ctrl-C handler.
    pub fn install() -> Result<Self> {
        let signal = Self::default();
        let flag = signal.requested.clone();
        ctrlc::set_handler(move || {
            flag.store(true, Ordering::Release);
        })
        .context("Failed to install Ctrl-C handler")?;
        Ok(signal)
    }

    pub fn is_requested(&self) -> bool {
        self.requested.load(Ordering::Acquire)
    }
}
