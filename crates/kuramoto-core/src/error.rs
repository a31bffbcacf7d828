//! Simulator error types.
//!
//! The numeric core is total over finite inputs, so almost every error here is
//! a boundary rejection: bad coupling constants, non-finite initial values,
//! malformed time axes or configuration. The remaining variants cover the
//! frame sinks that write recordings to disk.

use thiserror::Error;

/// Errors that can occur while configuring or running a simulation.
#[derive(Debug, Error)]
pub enum SimError {
    /// Coupling constant K outside the accepted range
    #[error("Invalid coupling constant K={value}: {reason}")]
    InvalidCoupling {
        /// Rejected coupling value
        value: f64,
        /// Reason for rejection
        reason: String,
    },

    /// NaN or Infinity supplied where a finite value is required
    #[error("Non-finite value for '{name}': {value}")]
    NonFinite {
        /// Name of the offending input
        name: String,
        /// The value as supplied
        value: f64,
    },

    /// Invalid parameter value
    #[error("Invalid parameter '{name}': {value}. {reason}")]
    InvalidParameter {
        /// Parameter name
        name: String,
        /// Parameter value as string
        value: String,
        /// Reason for invalidity
        reason: String,
    },

    /// Oscillator set has no members
    #[error("Empty oscillator set: at least one oscillator is required")]
    EmptyInput,

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Writing a frame or recording failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for simulator operations.
pub type SimResult<T> = Result<T, SimError>;

impl From<serde_json::Error> for SimError {
    fn from(err: serde_json::Error) -> Self {
        SimError::SerializationError(err.to_string())
    }
}

impl From<toml::de::Error> for SimError {
    fn from(err: toml::de::Error) -> Self {
        SimError::ConfigError(err.to_string())
    }
}

impl From<config::ConfigError> for SimError {
    fn from(err: config::ConfigError) -> Self {
        SimError::ConfigError(err.to_string())
    }
}

impl SimError {
    /// Create an invalid parameter error.
    pub fn invalid_param(
        name: impl Into<String>,
        value: impl ToString,
        reason: impl Into<String>,
    ) -> Self {
        SimError::InvalidParameter {
            name: name.into(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    /// Create an invalid coupling error.
    pub fn invalid_coupling(value: f64, reason: impl Into<String>) -> Self {
        SimError::InvalidCoupling {
            value,
            reason: reason.into(),
        }
    }

    /// Create a non-finite input error.
    pub fn non_finite(name: impl Into<String>, value: f64) -> Self {
        SimError::NonFinite {
            name: name.into(),
            value,
        }
    }

    /// Reject `value` unless it is finite.
    pub fn ensure_finite(name: &str, value: f64) -> SimResult<f64> {
        if value.is_finite() {
            Ok(value)
        } else {
            Err(SimError::non_finite(name, value))
        }
    }

    /// Check if this error was caused by user-supplied input or configuration.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            SimError::InvalidCoupling { .. }
                | SimError::NonFinite { .. }
                | SimError::InvalidParameter { .. }
                | SimError::EmptyInput
                | SimError::ConfigError(_)
        )
    }
}
