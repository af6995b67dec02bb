mod appearance;
mod core;
mod playback;

/// Describes work that must be performed outside the pure reducer.
#[derive(Debug, Clone, PartialEq)]
pub(super) enum Effect {
    /// Move the journey viewport to an absolute vertical offset.
    ScrollTo(f32),
    Quit,
}
