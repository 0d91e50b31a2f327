use std::fmt;

use super::PrimitiveKind;

/// Error returned by [`Scene`](super::Scene) recording.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SceneError {
    /// The kind's sequence is at its configured maximum; the primitive was dropped.
    ///
    /// Callers should skip the primitive and keep recording.
    CapacityExceeded { kind: PrimitiveKind, limit: usize },
    /// Up-front capacity reservation failed.
    OutOfMemory { kind: PrimitiveKind, requested: usize },
}

impl fmt::Display for SceneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SceneError::CapacityExceeded { kind, limit } => {
                write!(f, "scene {kind} capacity exceeded (limit {limit})")
            }
            SceneError::OutOfMemory { kind, requested } => {
                write!(f, "failed to reserve {requested} {kind} slots")
            }
        }
    }
}

impl std::error::Error for SceneError {}
