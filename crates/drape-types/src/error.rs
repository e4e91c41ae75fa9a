//! Error types for the drape simulator.
//!
//! All crates return `DrapeResult<T>` from fallible operations.
//! Nothing inside a simulation step is fallible; errors surface at
//! construction and configuration time only.

use thiserror::Error;

/// Unified error type for the drape simulator.
#[derive(Debug, Error)]
pub enum DrapeError {
    /// Configuration value is invalid (cloth dimensions, resolution, settings).
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Particle index is outside the current cloth.
    #[error("Particle index {index} out of bounds (particle count: {count})")]
    ParticleOutOfBounds { index: usize, count: usize },

    /// No collider is registered under the given id.
    #[error("Unknown collider id {0}")]
    UnknownCollider(u32),

    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization failure.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Convenience alias for `Result<T, DrapeError>`.
pub type DrapeResult<T> = Result<T, DrapeError>;
