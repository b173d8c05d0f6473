use thiserror::Error;

/// Structural errors surfaced by the public entry points.
///
/// Undefined geometry (a sun altitude that is never reached at the requested
/// latitude, e.g. polar day or polar night) is *not* an error: it resolves to
/// a `None` instant for the affected element only.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SunpathError {
    #[error("Invalid instant: {0}")]
    InvalidInstant(String),

    #[error("Broadcast shape mismatch: arrays of length {expected} and {found} (neither is 1)")]
    ShapeMismatch { expected: usize, found: usize },
}
