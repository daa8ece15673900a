//! # Error Types
//!
//! Structured error types for erlang_core. A domain violation (negative
//! traffic, zero channels, a target outside (0, 100]) is reported as
//! [`CalcError::InvalidInput`] before any computation runs.
//!
//! Non-convergence is *not* an error: solvers return their best estimate
//! flagged `approximate` (see [`crate::calculations::Solution`]).
//!
//! ## Example
//!
//! ```rust
//! use erlang_core::errors::{CalcError, CalcResult};
//!
//! fn validate_traffic(traffic: f64) -> CalcResult<()> {
//!     if traffic <= 0.0 {
//!         return Err(CalcError::InvalidInput {
//!             field: "traffic".to_string(),
//!             value: traffic.to_string(),
//!             reason: "Traffic must be positive".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for erlang_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculation operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value violates a domain precondition
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A required field is missing
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a MissingField error
    pub fn missing_field(field: impl Into<String>) -> Self {
        CalcError::MissingField {
            field: field.into(),
        }
    }

    /// Create a SerializationError
    pub fn serialization(reason: impl Into<String>) -> Self {
        CalcError::SerializationError {
            reason: reason.into(),
        }
    }

    /// True when the error stems from caller-supplied values rather than the engine
    pub fn is_domain_error(&self) -> bool {
        matches!(self, CalcError::InvalidInput { .. } | CalcError::MissingField { .. })
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::MissingField { .. } => "MISSING_FIELD",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(err: serde_json::Error) -> Self {
        // serde reports absent struct fields as "missing field `name`"
        let reason = err.to_string();
        if let Some(rest) = reason.strip_prefix("missing field `") {
            if let Some(field) = rest.split('`').next() {
                return CalcError::missing_field(field);
            }
        }
        CalcError::serialization(reason)
    }
}

/// Reject NaN and infinities before they reach a solver.
pub(crate) fn require_finite(field: &str, value: f64) -> CalcResult<()> {
    if !value.is_finite() {
        return Err(CalcError::invalid_input(field, value.to_string(), "Value must be a finite number"));
    }
    Ok(())
}

/// Validate a blocking target given as a percentage in (0, 100].
pub(crate) fn require_target_percent(field: &str, percent: f64) -> CalcResult<()> {
    require_finite(field, percent)?;
    if percent <= 0.0 || percent > 100.0 {
        return Err(CalcError::invalid_input(
            field,
            percent.to_string(),
            "Blocking target must be in (0, 100] percent",
        ));
    }
    Ok(())
}
