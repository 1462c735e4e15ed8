use std::fmt;

use super::WireValue;
use crate::error::{DecodeError, EncodeError};

/// A RouterOS integer.
///
/// The device sends decimal or `0x`-prefixed hexadecimal text and accepts
/// decimal back. Values are assumed to fit in an `i64`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Number(pub i64);

impl WireValue for Number {
    fn from_wire(s: &str) -> Result<Self, DecodeError> {
        let parsed = match s.strip_prefix("0x") {
            Some(hex) => i64::from_str_radix(hex, 16),
            None => s.parse::<i64>(),
        };
        parsed.map(Number).map_err(|source| DecodeError::Number {
            value: s.to_string(),
            source,
        })
    }

    fn to_wire(&self) -> Result<String, EncodeError> {
        Ok(self.0.to_string())
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Number(value)
    }
}

impl From<Number> for i64 {
    fn from(value: Number) -> Self {
        value.0
    }
}
