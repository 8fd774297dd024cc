//! Lossless conversion from the store's decimal text to native integers.
//!
//! SQLite hands numeric columns back in whatever storage class the value was
//! written with, so a timestamp may surface as `1706356800123`,
//! `1706356800123.0` or `1.706356800123e12`. All of those are accepted; any
//! value with a non-zero fractional part, or outside `i64`, is rejected.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NumericError {
    #[error("`{0}` is not a decimal number")]
    Malformed(String),
    #[error("`{0}` is not an integral value")]
    NonIntegral(String),
    #[error("`{0}` does not fit in a 64-bit integer")]
    OutOfRange(String),
}

/// Largest digit count an `i64` magnitude can have.
const MAX_DIGITS: i64 = 19;

pub fn integer_from_decimal(text: &str) -> Result<i64, NumericError> {
    let malformed = || NumericError::Malformed(text.to_string());

    let (negative, unsigned) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    let (mantissa, exponent) = match unsigned.find(['e', 'E']) {
        Some(pos) => {
            let exp = unsigned[pos + 1..]
                .parse::<i32>()
                .map_err(|_| malformed())?;
            (&unsigned[..pos], i64::from(exp))
        }
        None => (unsigned, 0),
    };
    let (int_part, frac_part) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    if int_part.is_empty() && frac_part.is_empty() {
        return Err(malformed());
    }
    if !int_part
        .bytes()
        .chain(frac_part.bytes())
        .all(|b| b.is_ascii_digit())
    {
        return Err(malformed());
    }

    let joined = format!("{int_part}{frac_part}");
    let digits = joined.trim_start_matches('0');
    if digits.is_empty() {
        return Ok(0);
    }
    let significant = digits.trim_end_matches('0');
    let trailing_zeros = (digits.len() - significant.len()) as i64;

    // value = significant * 10^scale
    let scale = trailing_zeros + exponent - frac_part.len() as i64;
    if scale < 0 {
        return Err(NumericError::NonIntegral(text.to_string()));
    }
    if significant.len() as i64 + scale > MAX_DIGITS {
        return Err(NumericError::OutOfRange(text.to_string()));
    }

    let mut magnitude: i128 = significant.parse().map_err(|_| malformed())?;
    for _ in 0..scale {
        magnitude *= 10;
    }
    let value = if negative { -magnitude } else { magnitude };
    i64::try_from(value).map_err(|_| NumericError::OutOfRange(text.to_string()))
}
