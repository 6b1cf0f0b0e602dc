//! Configuration error type.
//!
//! Every variant is raised before a run starts; a run that fails validation
//! never allocates any simulation state.

use thiserror::Error;

/// Rejected configuration, policy or run limits.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("zone capacity must be at least 1, got {0}")]
    ZeroCapacity(i64),

    #[error("batch size {field} must be non-negative, got {value}")]
    NegativeBatch {
        field: &'static str,
        value: i64,
    },

    #[error("batch size {field} = {value} exceeds the supported maximum")]
    BatchTooLarge {
        field: &'static str,
        value: i64,
    },

    #[error("duration {field} must be non-negative, got {value}")]
    NegativeDuration {
        field: &'static str,
        value: f64,
    },

    #[error("duration {field} must be finite, got {value}")]
    NonFiniteDuration {
        field: &'static str,
        value: f64,
    },

    #[error("run limit {field} must be finite and positive, got {value}")]
    InvalidLimit {
        field: &'static str,
        value: f64,
    },

    /// The samplers alone would need more than
    /// [`MAX_SAMPLES`][crate::config::MAX_SAMPLES] steps to reach the ceiling.
    #[error("sample interval {interval} is too fine for time ceiling {ceiling}")]
    TooManySamples {
        interval: f64,
        ceiling:  f64,
    },
}

/// Shorthand result type for configuration handling.
pub type ConfigResult<T> = Result<T, ConfigError>;
