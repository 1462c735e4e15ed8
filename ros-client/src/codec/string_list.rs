use std::fmt;

use super::WireValue;
use crate::error::{DecodeError, EncodeError};

/// A comma-separated list of strings, e.g. interface names.
///
/// The wire form has no escaping, so elements containing `,` or `"` cannot be
/// encoded. Decoding an empty string yields a single empty element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct StringList(pub Vec<String>);

impl StringList {
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl WireValue for StringList {
    fn from_wire(s: &str) -> Result<Self, DecodeError> {
        Ok(StringList(s.split(',').map(str::to_string).collect()))
    }

    fn to_wire(&self) -> Result<String, EncodeError> {
        if let Some((index, element)) = self
            .0
            .iter()
            .enumerate()
            .find(|(_, el)| el.contains([',', '"']))
        {
            return Err(EncodeError::InvalidListElement {
                index,
                element: element.clone(),
            });
        }
        Ok(self.0.join(","))
    }
}

impl fmt::Display for StringList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(","))
    }
}

impl<S: Into<String>> FromIterator<S> for StringList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        StringList(iter.into_iter().map(Into::into).collect())
    }
}

impl From<Vec<String>> for StringList {
    fn from(value: Vec<String>) -> Self {
        StringList(value)
    }
}

impl<const N: usize> From<[&str; N]> for StringList {
    fn from(value: [&str; N]) -> Self {
        value.into_iter().collect()
    }
}
