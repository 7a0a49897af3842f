use thiserror::Error;

/// Rejections surfaced to the settings layer. Nothing inside the per-frame
/// path produces these.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SettingsError {
    #[error("particle count {requested} is outside 1..={max}")]
    ParticleCount { requested: usize, max: usize },
    #[error("brightness {0} is outside 0..={1}")]
    Brightness(f32, f32),
    #[error("unknown theme `{0}`")]
    UnknownTheme(String),
}

/// Failures reported by a landmark source. The tracker task stops delivering
/// samples on any of them.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TrackerError {
    #[error("hand tracker is not available: {0}")]
    Unavailable(String),
    #[error("camera permission denied")]
    PermissionDenied,
    #[error("hand tracker closed")]
    Closed,
}
