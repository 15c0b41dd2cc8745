//! Engine error type

use thiserror::Error;

/// Caller contract violations raised by the evaluation and suggestion engine
///
/// These indicate an upstream bug rather than a runtime condition, so callers
/// are expected to propagate them rather than recover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("length mismatch: guess has {guess} letters, target has {target}")]
    LengthMismatch { guess: usize, target: usize },
}
