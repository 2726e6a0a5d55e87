//! Error type shared by every fallible curve operation.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CurveError {
    /// An argument violates a documented precondition.
    #[error("invalid argument `{arg}`: {reason}")]
    InvalidArgument { arg: &'static str, reason: String },

    /// Two curves that must share a degree do not.
    #[error("degree mismatch: {left} vs {right}")]
    DegreeMismatch { left: usize, right: usize },

    /// The least-squares solve did not produce a finite solution.
    #[error("least-squares solve failed: {0}")]
    Solve(String),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid curve JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl CurveError {
    pub fn invalid(arg: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            arg,
            reason: reason.into(),
        }
    }

    /// True for the precondition failures raised before any computation runs.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }
}
