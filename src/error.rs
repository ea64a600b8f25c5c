// =============================================================================
// Error taxonomy for the CoinPulse sentiment engine
// =============================================================================
//
// The engine performs no I/O, so validation is the only failure source.
// A single malformed record aborts the whole computation; callers needing
// partial results must pre-filter their input.

use thiserror::Error;

/// A malformed or missing required field in an input record.
///
/// Each variant names the offending field and carries the zero-based index of
/// the record within the input sequence.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("record {index}: field `symbol` is empty")]
    EmptySymbol { index: usize },

    #[error("record {index}: field `sentiment` is not finite ({value})")]
    NonFiniteSentiment { index: usize, value: f64 },
}

pub type Result<T> = std::result::Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_field_and_index() {
        let err = ValidationError::EmptySymbol { index: 3 };
        assert_eq!(err.to_string(), "record 3: field `symbol` is empty");

        let err = ValidationError::NonFiniteSentiment {
            index: 0,
            value: f64::NAN,
        };
        assert_eq!(
            err.to_string(),
            "record 0: field `sentiment` is not finite (NaN)"
        );
    }
}
