//! Calculator error types
//!
//! The numeric core has a single failure mode: a parameter outside its domain.

use thiserror::Error;

/// Errors that can occur while validating or evaluating a projection
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    /// A value is outside the domain of the formula it feeds
    #[error("Invalid parameter {name} = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: String,
    },
}

impl CalcError {
    /// Build an `InvalidParameter` error
    pub fn invalid(name: &'static str, value: f64, reason: impl Into<String>) -> Self {
        CalcError::InvalidParameter {
            name,
            value,
            reason: reason.into(),
        }
    }

    /// Name of the offending parameter
    pub fn parameter(&self) -> &'static str {
        match self {
            CalcError::InvalidParameter { name, .. } => name,
        }
    }
}

/// Result type alias for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CalcError::invalid("decay_rate", 1.5, "must be in (0, 1)");
        assert_eq!(
            err.to_string(),
            "Invalid parameter decay_rate = 1.5: must be in (0, 1)"
        );
        assert_eq!(err.parameter(), "decay_rate");
    }
}
