//! Number recognition and token conversion

use crate::config::TokenPolicy;
use crate::error::{CalculatorError, Result};

/// True when `input` is an optional `-` followed by ASCII digits, nothing else
pub fn is_single_number(input: &str) -> bool {
    let digits = input.strip_prefix('-').unwrap_or(input);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Parse input already accepted by [`is_single_number`]
pub fn parse_single_number(input: &str) -> Result<i64> {
    input.parse::<i64>().map_err(|_| CalculatorError::Overflow)
}

/// Convert one token under the given policy
pub fn convert_token(token: &str, policy: TokenPolicy) -> Result<i64> {
    match policy {
        TokenPolicy::Lenient => leading_integer(token),
        TokenPolicy::Strict => strict_integer(token),
    }
}

/// Leading-integer conversion: ASCII whitespace, sign, digits; the rest is ignored
fn leading_integer(token: &str) -> Result<i64> {
    let trimmed = token.trim_start_matches(|c: char| c.is_ascii_whitespace());
    let (negative, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digit_len = unsigned.bytes().take_while(|b| b.is_ascii_digit()).count();
    if digit_len == 0 {
        return Ok(0);
    }

    // Accumulate toward the sign so i64::MIN still converts
    unsigned.as_bytes()[..digit_len]
        .iter()
        .try_fold(0i64, |acc, b| {
            let digit = i64::from(b - b'0');
            let acc = acc.checked_mul(10)?;
            if negative {
                acc.checked_sub(digit)
            } else {
                acc.checked_add(digit)
            }
        })
        .ok_or(CalculatorError::Overflow)
}

fn strict_integer(token: &str) -> Result<i64> {
    let trimmed = token.trim();
    if trimmed.is_empty() {
        return Ok(0);
    }

    let unsigned = trimmed.strip_prefix(['-', '+']).unwrap_or(trimmed);
    if unsigned.is_empty() || !unsigned.bytes().all(|b| b.is_ascii_digit()) {
        log::debug!("rejecting token {token:?}");
        return Err(CalculatorError::InvalidToken {
            token: token.to_string(),
        });
    }

    trimmed.parse::<i64>().map_err(|_| CalculatorError::Overflow)
}
