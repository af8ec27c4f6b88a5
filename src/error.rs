use thiserror::Error;

/// Errors raised while setting up the sketch. The frame loop itself is infallible.
#[derive(Debug, Error)]
pub enum SketchError {
    /// Canvas dimensions were negative or not finite.
    #[error("invalid canvas size {width}x{height}")]
    InvalidCanvas { width: f32, height: f32 },

    #[error("invalid color: {0}")]
    InvalidColor(String),

    #[error("invalid shape: {0}")]
    InvalidShape(String),

    #[error("invalid direction: {0}")]
    InvalidDirection(String),

    /// Speed did not parse or fell outside the slider range.
    #[error("invalid speed: {0}")]
    InvalidSpeed(String),

    #[error("invalid seed: {0}")]
    InvalidSeed(String),

    /// The native window or its renderer could not be created.
    #[error("rendering surface unavailable: {0}")]
    Surface(String),
}
