//! Scroll-driven progress engine for the career journey viewer.
//!
//! Nothing in this crate touches a GUI toolkit. The host feeds
//! [`JourneyEvent`]s into a [`JourneySession`], carries out the returned
//! [`JourneyEffect`]s, and renders [`JourneySnapshot`]s.

pub mod autoscroll;
pub mod bindings;
pub mod cancellation;
pub mod checkpoints;
pub mod config;
pub mod gestures;
pub mod glide;
pub mod journey;
pub mod layout;
pub mod metrics;
pub mod progress;
pub mod session;
pub mod speed;
pub mod throttle;

pub use autoscroll::PlaybackState;
pub use bindings::{KeyBindings, KeyChord, KeyPress, KeyToken, Modifiers};
pub use config::{EngineConfig, JourneyVariant};
pub use journey::{Journey, Stop};
pub use layout::LayoutModel;
pub use metrics::ScrollMetrics;
pub use session::{JourneyCommand, JourneyEffect, JourneyEvent, JourneySession, JourneySnapshot};
pub use speed::SpeedTuning;
