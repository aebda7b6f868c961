use thiserror::Error;

/// Errors raised by the simulation core.
#[derive(Debug, Error)]
pub enum MorphosError {
    #[error("Unknown shape: {0}")]
    UnknownShape(String),

    #[error("Particle count mismatch: expected {expected}, got {actual}")]
    ParticleCountMismatch { expected: usize, actual: usize },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
