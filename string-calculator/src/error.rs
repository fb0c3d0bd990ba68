//! Calculator error types

use thiserror::Error;

/// Errors returned by [`StringCalculator`](crate::StringCalculator)
#[derive(Error, Debug)]
pub enum CalculatorError {
    /// One or more parsed numbers were negative
    ///
    /// Holds every offending value in order of appearance.
    #[error("negative numbers not allowed {}", join_numbers(.0))]
    NegativeNumbers(Vec<i64>),

    /// Token rejected by [`TokenPolicy::Strict`](crate::TokenPolicy::Strict)
    #[error("invalid token '{token}'")]
    InvalidToken {
        /// The token as it appeared between delimiters
        token: String,
    },

    /// A number or the running sum does not fit in `i64`
    #[error("integer overflow")]
    Overflow,

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// TOML deserialization error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl CalculatorError {
    /// Negative numbers carried by a [`CalculatorError::NegativeNumbers`] error
    pub fn negatives(&self) -> Option<&[i64]> {
        match self {
            CalculatorError::NegativeNumbers(values) => Some(values),
            _ => None,
        }
    }
}

fn join_numbers(values: &[i64]) -> String {
    values
        .iter()
        .map(i64::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

/// Result type for calculator operations
pub type Result<T> = std::result::Result<T, CalculatorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_message_single() {
        let err = CalculatorError::NegativeNumbers(vec![-2]);
        assert_eq!(err.to_string(), "negative numbers not allowed -2");
    }

    #[test]
    fn test_negative_message_joined_in_order() {
        let err = CalculatorError::NegativeNumbers(vec![-1, -2, -3]);
        assert_eq!(err.to_string(), "negative numbers not allowed -1,-2,-3");
        assert_eq!(err.negatives(), Some(&[-1, -2, -3][..]));
    }

    #[test]
    fn test_negatives_accessor_on_other_kinds() {
        assert_eq!(CalculatorError::Overflow.negatives(), None);
        let err = CalculatorError::InvalidToken {
            token: "a".to_string(),
        };
        assert_eq!(err.to_string(), "invalid token 'a'");
    }
}
