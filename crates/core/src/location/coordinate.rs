use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Errors that can occur when parsing a coordinate.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoordinateError {
    #[error("'{0}' is not a decimal number")]
    NotDecimal(String),
    #[error("coordinate must be a finite number")]
    NotFinite,
    #[error("'{0}' has more than {max} digits", max = MAX_DIGITS)]
    TooManyDigits(String),
}

/// Most digits a coordinate may carry, not counting leading zeros of the
/// integer part.
///
/// Fifteen digits always fit an `f64` without crossing an encoder midpoint,
/// so the stored text and the location code agree. The bound also keeps the
/// text a valid table number.
pub const MAX_DIGITS: usize = 15;

/// An exact decimal coordinate.
///
/// Keeps the canonical decimal text that is written to the table and rendered
/// in responses, next to the numeric value used for range checks and
/// geohash comparisons. The text never goes through a binary float, so a
/// stored `12.9716` is read back as `12.9716`.
#[derive(Debug, Clone, PartialEq)]
pub struct Coordinate {
    text: String,
    value: f64,
}

impl Coordinate {
    /// Parses plain decimal notation: optional sign, digits, optional
    /// fraction. Exponents and special values are rejected.
    pub fn parse(input: &str) -> Result<Self, CoordinateError> {
        let trimmed = input.trim();
        if !is_plain_decimal(trimmed) {
            return Err(CoordinateError::NotDecimal(input.to_string()));
        }
        if digit_count(trimmed) > MAX_DIGITS {
            return Err(CoordinateError::TooManyDigits(trimmed.to_string()));
        }

        let value: f64 = trimmed
            .parse()
            .map_err(|_| CoordinateError::NotDecimal(input.to_string()))?;
        if !value.is_finite() {
            return Err(CoordinateError::NotFinite);
        }

        let text = trimmed.strip_prefix('+').unwrap_or(trimmed).to_string();
        Ok(Self { text, value })
    }

    /// Builds a coordinate from a JSON float, using its shortest round-trip
    /// decimal form as the canonical text.
    pub fn from_f64(value: f64) -> Result<Self, CoordinateError> {
        if !value.is_finite() {
            return Err(CoordinateError::NotFinite);
        }
        Self::parse(&value.to_string())
    }

    /// The canonical decimal text.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// Returns true if the value lies within `[min, max]`.
    pub fn is_within(&self, (min, max): (f64, f64)) -> bool {
        self.value >= min && self.value <= max
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Digits of the integer part after its leading zeros, plus every fraction
/// digit. Leading fraction zeros count, which also bounds how small a
/// non-zero value can get.
fn digit_count(s: &str) -> usize {
    let digits = s.trim_start_matches(['-', '+']);
    let (whole, fraction) = digits.split_once('.').unwrap_or((digits, ""));
    whole.trim_start_matches('0').len() + fraction.len()
}

fn is_plain_decimal(s: &str) -> bool {
    let digits = s
        .strip_prefix('-')
        .or_else(|| s.strip_prefix('+'))
        .unwrap_or(s);
    let (whole, fraction) = match digits.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (digits, None),
    };

    let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
    let has_digits = !whole.is_empty() || fraction.is_some_and(|f| !f.is_empty());

    has_digits && all_digits(whole) && fraction.is_none_or(all_digits)
}

/// Decimals are rendered as JSON strings so no precision is lost on the wire.
impl Serialize for Coordinate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.text)
    }
}

/// Accepts a JSON number or a numeric string.
impl<'de> Deserialize<'de> for Coordinate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(CoordinateVisitor)
    }
}

struct CoordinateVisitor;

impl Visitor<'_> for CoordinateVisitor {
    type Value = Coordinate;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a decimal number or a numeric string")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Coordinate::parse(v).map_err(E::custom)
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        Coordinate::from_f64(v).map_err(E::custom)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Coordinate::parse(&v.to_string()).map_err(E::custom)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Coordinate::parse(&v.to_string()).map_err(E::custom)
    }
}
