use std::fmt;

use super::WireValue;
use crate::error::{DecodeError, EncodeError};

/// A RouterOS boolean, exchanged as `"true"` or `"false"`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Boolean(pub bool);

impl WireValue for Boolean {
    fn from_wire(s: &str) -> Result<Self, DecodeError> {
        match s {
            "true" => Ok(Boolean(true)),
            "false" => Ok(Boolean(false)),
            _ => Err(DecodeError::Boolean {
                value: s.to_string(),
            }),
        }
    }

    fn to_wire(&self) -> Result<String, EncodeError> {
        Ok(self.to_string())
    }
}

impl fmt::Display for Boolean {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(if self.0 { "true" } else { "false" })
    }
}

impl From<bool> for Boolean {
    fn from(value: bool) -> Self {
        Boolean(value)
    }
}

impl From<Boolean> for bool {
    fn from(value: Boolean) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{decode, encode};

    #[test]
    fn test_round_trip() {
        for b in [true, false] {
            let wire = encode(&Boolean(b)).unwrap();
            assert_eq!(decode::<Boolean>(&wire).unwrap(), Boolean(b));
        }
    }

    #[test]
    fn test_rejects_other_spellings() {
        for input in ["", "yes", "no", "True", "FALSE", "1", "0", " true"] {
            assert!(
                matches!(Boolean::from_wire(input), Err(DecodeError::Boolean { .. })),
                "{input:?} should not decode"
            );
        }
    }
}
