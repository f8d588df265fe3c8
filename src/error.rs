//! Error taxonomy for the calculation models.
//!
//! Every failure is detected before any arithmetic runs on bad data, and all
//! of them are recoverable by the caller. The library never carries
//! user-facing presentation text beyond the `Display` impls below.

use serde::Serialize;
use thiserror::Error;

/// Result type alias for model evaluations.
pub type ModelResult<T> = Result<T, ModelError>;

/// Why a production program has no usable optimum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InfeasibleCause {
    /// No point satisfies the non-negativity and capacity constraints.
    ///
    /// Only the solver reports this. Capacities are checked to be positive
    /// beforehand, which keeps the origin feasible.
    EmptyRegion,
    /// The objective grows without limit over the feasible region.
    Unbounded,
    /// A capacity of zero or less leaves only the origin.
    NoCapacity,
}

/// Errors reported by the calculation models.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelError {
    /// A parameter that must be positive (or finite) was not.
    #[error("invalid input: {parameter} = {value}")]
    InvalidInput { parameter: &'static str, value: f64 },

    /// Queue utilization is at or above one.
    #[error("unstable system: arrival rate {arrival_rate} must be below service rate {service_rate}")]
    UnstableSystem { arrival_rate: f64, service_rate: f64 },

    #[error("linear program is infeasible ({cause:?})")]
    Infeasible { cause: InfeasibleCause },

    #[error("length mismatch: {years} years but {sales} sales figures")]
    LengthMismatch { years: usize, sales: usize },

    #[error("malformed input: `{token}` is not an integer")]
    MalformedInput { token: String },

    #[error("insufficient data: need at least 2 distinct points, got {points}")]
    InsufficientData { points: usize },
}

/// Serializable tag for a [`ModelError`], used by front-ends to pick a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    InvalidInput,
    UnstableSystem,
    Infeasible,
    LengthMismatch,
    MalformedInput,
    InsufficientData,
}

impl ModelError {
    /// Returns the taxonomy tag of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ModelError::InvalidInput { .. } => ErrorKind::InvalidInput,
            ModelError::UnstableSystem { .. } => ErrorKind::UnstableSystem,
            ModelError::Infeasible { .. } => ErrorKind::Infeasible,
            ModelError::LengthMismatch { .. } => ErrorKind::LengthMismatch,
            ModelError::MalformedInput { .. } => ErrorKind::MalformedInput,
            ModelError::InsufficientData { .. } => ErrorKind::InsufficientData,
        }
    }
}

/// Fails with [`ModelError::InvalidInput`] unless `value` is finite and strictly positive.
pub(crate) fn require_positive(parameter: &'static str, value: f64) -> ModelResult<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ModelError::InvalidInput { parameter, value })
    }
}

/// Fails with [`ModelError::InvalidInput`] unless `value` is finite and not negative.
pub(crate) fn require_non_negative(parameter: &'static str, value: f64) -> ModelResult<f64> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(ModelError::InvalidInput { parameter, value })
    }
}

/// Fails with [`ModelError::InvalidInput`] when `value` is NaN or infinite.
pub(crate) fn require_finite(parameter: &'static str, value: f64) -> ModelResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ModelError::InvalidInput { parameter, value })
    }
}
