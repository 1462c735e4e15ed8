//! Validation context for schema loading.

use std::{collections::HashMap, ops::Range};

use miette::{NamedSource, SourceSpan};
use ros7api_core::{is_identifier, to_type_name};

use crate::{Error, SchemaNode};

/// Names every generated record module already has in scope.
pub(crate) const IMPORTED_NAMES: &[&str] = &[
    "Boolean",
    "Client",
    "Deserialize",
    "Ip",
    "IpNet",
    "Number",
    "NumberList",
    "Option",
    "RecordId",
    "RequestContext",
    "Result",
    "Serialize",
    "String",
    "StringList",
    "Transport",
    "Vec",
];

/// Parsing and validation context that carries source information.
///
/// This struct encapsulates the source content, filename, and current menu
/// path, making it easier to pass validation context through the recursive
/// resolution of the menu tree.
///
/// # Example
///
/// ```ignore
/// let ctx = ParseContext::new(src, "types.toml");
/// let vlan = ctx.push("interface").push("bridge").push("vlan");
/// assert_eq!(vlan.path_string(), "interface/bridge/vlan");
/// ```
#[derive(Debug, Clone)]
pub(crate) struct ParseContext<'a> {
    /// The raw TOML source content
    src: &'a str,
    /// The filename for error reporting
    filename: &'a str,
    /// Menu path segments (e.g., ["interface", "bridge", "vlan"])
    path: Vec<String>,
}

impl<'a> ParseContext<'a> {
    /// Create a new parse context with the given source and filename.
    pub fn new(src: &'a str, filename: &'a str) -> Self {
        Self {
            src,
            filename,
            path: Vec::new(),
        }
    }

    /// Push a menu name and return a new context.
    pub fn push(&self, segment: &str) -> Self {
        let mut path = self.path.clone();
        path.push(segment.to_string());
        Self {
            src: self.src,
            filename: self.filename,
            path,
        }
    }

    /// Get the current menu path joined with slashes.
    pub fn path_string(&self) -> String {
        self.path.join("/")
    }

    /// Get the menu path segments.
    pub fn segments(&self) -> &[String] {
        &self.path
    }

    fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(self.filename, self.src.to_string())
    }

    /// Create a validation error, optionally pointing at a byte range.
    pub fn validation_error(
        &self,
        message: impl Into<String>,
        span: Option<Range<usize>>,
    ) -> Box<Error> {
        Box::new(Error::Validation {
            src: self.named_source(),
            span: span.map(SourceSpan::from),
            message: message.into(),
        })
    }

    /// Create an unknown property type error.
    pub fn unknown_type_error(&self, property: &str, ty: &str, span: Range<usize>) -> Box<Error> {
        Box::new(Error::UnknownPropertyType {
            src: self.named_source(),
            span: Some(span.into()),
            record: self.path_string(),
            property: property.to_string(),
            ty: ty.to_string(),
        })
    }

    /// Create an invalid identifier error.
    pub fn invalid_identifier_error(
        &self,
        name: &str,
        kind: &str,
        reason: &str,
        span: Option<Range<usize>>,
    ) -> Box<Error> {
        let context = if self.path.is_empty() {
            kind.to_string()
        } else {
            format!("{} in '{}'", kind, self.path_string())
        };
        Box::new(Error::InvalidIdentifier {
            src: self.named_source(),
            span: span.map(SourceSpan::from),
            name: name.to_string(),
            context,
            reason: reason.to_string(),
        })
    }

    /// Validate that a derived name is usable as an identifier.
    pub fn validate_identifier(
        &self,
        name: &str,
        kind: &str,
        span: Option<Range<usize>>,
    ) -> crate::Result<()> {
        if let Some(reason) = identifier_problem(name) {
            return Err(self.invalid_identifier_error(name, kind, reason, span));
        }
        Ok(())
    }
}

/// Describe why a name is not a valid identifier, if it isn't.
pub(crate) fn identifier_problem(name: &str) -> Option<&'static str> {
    if name.is_empty() {
        return Some("Name cannot be empty");
    }
    if name.starts_with(|c: char| c.is_ascii_digit()) {
        return Some("Name cannot start with a digit");
    }
    if !is_identifier(name) {
        return Some("Name contains characters that are not letters, digits or underscores");
    }
    None
}

/// Check that the types generated for every record get distinct names that do
/// not shadow anything the generated modules import. All record modules are
/// re-exported side by side, so names must be unique across the whole tree.
pub(crate) fn check_type_names(ctx: &ParseContext<'_>, root: &SchemaNode) -> crate::Result<()> {
    let mut claimed = HashMap::new();
    claim_type_names(ctx, root, &mut claimed)
}

fn claim_type_names(
    ctx: &ParseContext<'_>,
    node: &SchemaNode,
    claimed: &mut HashMap<String, String>,
) -> crate::Result<()> {
    if let Some(record) = node.record() {
        let path = node.path();
        let type_name = to_type_name(path);

        let mut names = vec![
            (type_name.clone(), format!("record type of '{}'", path)),
            (format!("{}Update", type_name), format!("update type of '{}'", path)),
            (format!("{}Api", type_name), format!("operations trait of '{}'", path)),
        ];
        names.extend(record.properties().iter().filter(|p| p.ty().variants().is_some()).map(
            |p| {
                (
                    format!("{}_{}", type_name, p.identifier()),
                    format!("enumeration '{}' of '{}'", p.name(), path),
                )
            },
        ));

        for (name, owner) in names {
            if IMPORTED_NAMES.contains(&name.as_str()) {
                return Err(ctx.validation_error(
                    format!(
                        "{} is named '{}', which clashes with an imported name",
                        owner, name
                    ),
                    None,
                ));
            }
            if let Some(previous) = claimed.get(&name) {
                return Err(ctx.validation_error(
                    format!("{} and {} are both named '{}'", previous, owner, name),
                    None,
                ));
            }
            claimed.insert(name, owner);
        }
    }

    for child in node.children() {
        claim_type_names(ctx, child, claimed)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_string() {
        let ctx = ParseContext::new("", "types.toml");
        assert_eq!(ctx.path_string(), "");

        let vlan = ctx.push("interface").push("bridge").push("vlan");
        assert_eq!(vlan.path_string(), "interface/bridge/vlan");
        assert_eq!(vlan.segments(), &["interface", "bridge", "vlan"]);
    }

    #[test]
    fn test_identifier_problem() {
        assert_eq!(identifier_problem("VlanIds"), None);
        assert_eq!(identifier_problem(""), Some("Name cannot be empty"));
        assert_eq!(
            identifier_problem("8021q"),
            Some("Name cannot start with a digit")
        );
        assert!(identifier_problem("Vlan.Ids").is_some());
    }

    #[test]
    fn test_invalid_identifier_error_context() {
        let ctx = ParseContext::new("", "types.toml").push("interface");
        let err = ctx.invalid_identifier_error("Foo.Bar", "property", "bad", None);
        match *err {
            Error::InvalidIdentifier { context, .. } => {
                assert_eq!(context, "property in 'interface'");
            }
            other => panic!("expected InvalidIdentifier, got {:?}", other),
        }
    }
}
