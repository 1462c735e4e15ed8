//! Typed serde attributes for semantic code generation.
//!
//! Instead of passing raw strings like `"serde(rename = \"vlan-ids\")"`, use
//! typed attributes that are rendered to the appropriate syntax.

use std::fmt;

/// One argument of a `#[serde(...)]` attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SerdeArg {
    /// `rename = "..."` - Wire key or wire value.
    Rename(String),
    /// `skip_serializing_if = "Option::is_none"` - Omit absent fields.
    SkipIfNone,
}

impl fmt::Display for SerdeArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rename(name) => write!(f, "rename = {:?}", name),
            Self::SkipIfNone => write!(f, "skip_serializing_if = \"Option::is_none\""),
        }
    }
}

/// A `#[serde(...)]` attribute; renders to nothing when it has no arguments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SerdeAttr {
    args: Vec<SerdeArg>,
}

impl SerdeAttr {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rename(mut self, name: impl Into<String>) -> Self {
        self.args.push(SerdeArg::Rename(name.into()));
        self
    }

    /// Rename only when the wire name differs from the Rust name.
    pub fn rename_if(self, wire: &str, rust: &str) -> Self {
        if wire == rust.trim_start_matches("r#") {
            self
        } else {
            self.rename(wire)
        }
    }

    pub fn skip_if_none(mut self) -> Self {
        self.args.push(SerdeArg::SkipIfNone);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }

    /// The attribute body without `#[...]`, if there is anything to render.
    pub fn to_attr(&self) -> Option<String> {
        if self.is_empty() {
            None
        } else {
            Some(self.to_string())
        }
    }
}

impl fmt::Display for SerdeAttr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let args: Vec<String> = self.args.iter().map(ToString::to_string).collect();
        write!(f, "serde({})", args.join(", "))
    }
}
