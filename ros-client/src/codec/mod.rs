//! Codecs between RouterOS wire strings and typed values.
//!
//! The REST API sends every property as a JSON string, even numbers and
//! booleans. Each type here decodes from and encodes to that string form and
//! plugs into serde through [`WireValue`], so generated resource types can
//! derive `Serialize`/`Deserialize` directly.

mod boolean;
mod ip;
mod number;
mod number_list;
mod string_list;

pub use boolean::Boolean;
pub use ip::{Ip, IpNet};
pub use number::Number;
pub use number_list::{NumberList, NumberRange};
pub use string_list::StringList;

use crate::error::{DecodeError, EncodeError};

/// A value with a string wire form.
pub trait WireValue: Sized {
    /// Decode from the unquoted wire string.
    fn from_wire(s: &str) -> Result<Self, DecodeError>;

    /// Encode to the unquoted wire string.
    fn to_wire(&self) -> Result<String, EncodeError>;
}

impl WireValue for String {
    fn from_wire(s: &str) -> Result<Self, DecodeError> {
        Ok(s.to_string())
    }

    fn to_wire(&self) -> Result<String, EncodeError> {
        Ok(self.clone())
    }
}

/// Decode a quoted JSON wire value, e.g. `"\"0x7a\""`.
pub fn decode<T: WireValue>(json: &str) -> Result<T, DecodeError> {
    let raw: String = serde_json::from_str(json)?;
    T::from_wire(&raw)
}

/// Encode a value into its quoted JSON wire form, e.g. `"\"122\""`.
pub fn encode<T: WireValue>(value: &T) -> Result<String, EncodeError> {
    Ok(serde_json::to_string(&value.to_wire()?)?)
}

/// Implement serde for codec types through their [`WireValue`] impl.
macro_rules! wire_serde {
    ($($ty:ty),* $(,)?) => {$(
        impl serde::Serialize for $ty {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                let wire = WireValue::to_wire(self).map_err(serde::ser::Error::custom)?;
                serializer.serialize_str(&wire)
            }
        }

        impl<'de> serde::Deserialize<'de> for $ty {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let wire = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
                <$ty as WireValue>::from_wire(&wire).map_err(serde::de::Error::custom)
            }
        }
    )*};
}

wire_serde!(Number, Boolean, Ip, IpNet, StringList, NumberList);
