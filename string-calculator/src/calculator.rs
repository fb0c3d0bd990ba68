//! The add pipeline
//!
//! Every call runs the same stages in order: empty short-circuit, single
//! number fast path, delimiter resolution, tokenization, conversion, negative
//! validation and summation. Nothing is shared between calls.

use crate::config::CalculatorConfig;
use crate::delimiter;
use crate::error::{CalculatorError, Result};
use crate::number;
use crate::tokenizer::Tokens;
use serde::{Deserialize, Serialize};

/// Report of a successful evaluation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    /// Sum of all numbers
    pub sum: i64,
    /// Converted numbers in order of appearance
    pub numbers: Vec<i64>,
    /// Delimiter declared by a `//` header, if any
    pub custom_delimiter: Option<String>,
    /// Whether the single-number fast path answered the call
    pub fast_path: bool,
}

/// Sums delimited integers
///
/// Holds only immutable configuration, so one instance can be shared across
/// threads.
#[derive(Debug, Clone, Default)]
pub struct StringCalculator {
    config: CalculatorConfig,
}

impl StringCalculator {
    /// Create a calculator with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a calculator with a custom configuration
    pub fn with_config(config: CalculatorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Get the current configuration
    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Sum the numbers in `input`
    ///
    /// An absent or empty input sums to zero. Fails with
    /// [`CalculatorError::NegativeNumbers`] listing every negative number,
    /// unless the whole input is one number.
    pub fn add<'a>(&self, input: impl Into<Option<&'a str>>) -> Result<i64> {
        self.evaluate(input).map(|evaluation| evaluation.sum)
    }

    /// Run the pipeline and report how the sum was reached
    pub fn evaluate<'a>(&self, input: impl Into<Option<&'a str>>) -> Result<Evaluation> {
        let input = match input.into() {
            Some(text) if !text.is_empty() => text,
            _ => {
                log::trace!("empty input");
                return Ok(Evaluation::default());
            }
        };

        // Checked on the untouched input, before any header is stripped
        if number::is_single_number(input) {
            log::trace!("single number fast path");
            let value = number::parse_single_number(input)?;
            return Ok(Evaluation {
                sum: value,
                numbers: vec![value],
                custom_delimiter: None,
                fast_path: true,
            });
        }

        let (delimiters, body) = delimiter::resolve(
            input,
            &self.config.delimiters,
            self.config.allow_custom_delimiter,
        );

        let numbers = Tokens::new(body, &delimiters)
            .map(|token| number::convert_token(token, self.config.token_policy))
            .collect::<Result<Vec<_>>>()?;
        log::trace!("converted {} tokens", numbers.len());

        check_negatives(&numbers)?;
        let sum = checked_sum(&numbers)?;

        Ok(Evaluation {
            sum,
            numbers,
            custom_delimiter: delimiters.custom().map(str::to_string),
            fast_path: false,
        })
    }
}

/// Fail with every negative number, in order
fn check_negatives(numbers: &[i64]) -> Result<()> {
    let negatives: Vec<i64> = numbers.iter().copied().filter(|n| *n < 0).collect();
    if negatives.is_empty() {
        return Ok(());
    }

    log::debug!("rejecting {} negative numbers", negatives.len());
    Err(CalculatorError::NegativeNumbers(negatives))
}

fn checked_sum(numbers: &[i64]) -> Result<i64> {
    numbers
        .iter()
        .try_fold(0i64, |acc, n| acc.checked_add(*n))
        .ok_or_else(|| {
            log::debug!("sum overflowed");
            CalculatorError::Overflow
        })
}
