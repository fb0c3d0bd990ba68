//! Sum integers from a delimited string
//!
//! Numbers are separated by commas or newlines. An input may open with a
//! `//<delimiter>\n` header (or `//[<delimiter>]\n`) declaring one more
//! delimiter for that call. Negative numbers are rejected, and the error lists
//! all of them.
//!
//! # Example
//!
//! ```rust
//! use string_calculator::{add, CalculatorError};
//!
//! assert_eq!(add("1\n2,3").unwrap(), 6);
//! assert_eq!(add("//;\n1;2").unwrap(), 3);
//! assert_eq!(add(None).unwrap(), 0);
//!
//! let err = add("1,-2,3,-4").unwrap_err();
//! assert!(matches!(err, CalculatorError::NegativeNumbers(_)));
//! assert_eq!(err.to_string(), "negative numbers not allowed -2,-4");
//! ```

#![warn(missing_docs)]

pub mod calculator;
pub mod config;
pub mod delimiter;
pub mod error;
pub mod number;
pub mod tokenizer;

// Re-export key types
pub use calculator::{Evaluation, StringCalculator};
pub use config::{CalculatorConfig, ConfigBuilder, TokenPolicy, DEFAULT_DELIMITERS};
pub use delimiter::DelimiterSet;
pub use error::{CalculatorError, Result};

/// Sum the numbers in `input` with the default configuration
pub fn add<'a>(input: impl Into<Option<&'a str>>) -> Result<i64> {
    StringCalculator::new().add(input)
}
