//! Quantity coercion.
//!
//! Every quantity entering a draft passes through [`coerce`], whether it
//! comes from a form input, a command line or a deserialized document.
//! The result is always a positive integer.

use serde::{Deserialize, Deserializer};

pub const DEFAULT_QUANTITY: u32 = 1;

/// Coerce free-form text into a positive quantity.
///
/// Reads an optional sign and the leading run of digits, ignoring leading
/// whitespace and anything after the digits (`"12abc"` is 12, `"3.9"` is 3).
/// No digits, zero or a negative value yields [`DEFAULT_QUANTITY`]. Values
/// too large for `u32` saturate.
pub fn coerce(input: &str) -> u32 {
    let s = input.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return DEFAULT_QUANTITY;
    }

    let digits = rest[..digits_len].trim_start_matches('0');
    if negative || digits.is_empty() {
        return DEFAULT_QUANTITY;
    }

    digits.parse::<u32>().unwrap_or(u32::MAX)
}

/// Coerce a signed integer into a positive quantity.
pub fn coerce_int(value: i64) -> u32 {
    if value <= 0 {
        DEFAULT_QUANTITY
    } else {
        u32::try_from(value).unwrap_or(u32::MAX)
    }
}

/// Coerce a float, truncating toward zero.
pub fn coerce_float(value: f64) -> u32 {
    if !value.is_finite() {
        return DEFAULT_QUANTITY;
    }
    let truncated = value.trunc();
    if truncated < 1.0 {
        DEFAULT_QUANTITY
    } else if truncated >= f64::from(u32::MAX) {
        u32::MAX
    } else {
        truncated as u32
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawQuantity {
    Int(i64),
    Float(f64),
    Text(String),
    Null,
}

/// Serde hook for quantity fields: accepts numbers, numeric strings or null.
pub fn deserialize<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RawQuantity::deserialize(deserializer)? {
        RawQuantity::Int(v) => coerce_int(v),
        RawQuantity::Float(v) => coerce_float(v),
        RawQuantity::Text(s) => coerce(&s),
        RawQuantity::Null => DEFAULT_QUANTITY,
    })
}

pub(crate) fn default_quantity() -> u32 {
    DEFAULT_QUANTITY
}
