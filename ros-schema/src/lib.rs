//! Schema model for the ros7api client generator.
//!
//! A schema describes the RouterOS menu tree: which menus carry records, and
//! which typed properties those records have. It is written in TOML:
//!
//! ```toml
//! [menus.interface.menus.bridge.menus.vlan.record]
//! description = "Bridge VLAN table"
//!
//! [[menus.interface.menus.bridge.menus.vlan.record.properties]]
//! name = "vlan-ids"
//! type = "number-range-list"
//! ```
//!
//! Parsing validates the whole tree up front; any error (including an
//! unknown property type) is fatal and reported as a [`miette`] diagnostic.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod node;
mod raw;
mod validate;

use std::{path::Path, str::FromStr};

pub use error::{Error, Result};
pub use node::{EnumVariant, PropertyDef, PropertyType, RecordDef, SchemaNode};

use crate::{raw::RawMenu, validate::ParseContext};

/// A loaded and validated schema.
#[derive(Debug, Clone, PartialEq)]
pub struct Schema {
    root: SchemaNode,
}

impl FromStr for Schema {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_with_filename(s, "types.toml")
    }
}

impl Schema {
    /// Parse a schema file from the given path
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        Self::from_str_with_filename(&content, &path.display().to_string())
    }

    /// Parse a schema from a string with a custom filename for error reporting
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        let raw: RawMenu =
            toml::from_str(content).map_err(|e| Error::parse(e, content, filename))?;
        let ctx = ParseContext::new(content, filename);
        let root = raw.resolve(&ctx, "")?;
        validate::check_type_names(&ctx, &root)?;
        Ok(Self { root })
    }

    /// The root of the menu tree. The root itself never carries a record.
    pub fn root(&self) -> &SchemaNode {
        &self.root
    }

    /// Look up a node by its slash-joined path.
    pub fn find(&self, path: &str) -> Option<&SchemaNode> {
        self.root.find(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VLAN: &str = r#"
        [menus.interface.menus.bridge.menus.vlan.record]
        description = "Bridge VLAN table"

        [[menus.interface.menus.bridge.menus.vlan.record.properties]]
        name = "bridge"
        type = "string"

        [[menus.interface.menus.bridge.menus.vlan.record.properties]]
        name = "vlan-ids"
        ident = "VlanIDs"
        type = "number-range-list"
        description = "VLAN IDs"

        [[menus.interface.menus.bridge.menus.vlan.record.properties]]
        name = "dynamic"
        type = "boolean"
        read-only = true

        [[menus.interface.menus.bridge.menus.vlan.record.properties]]
        name = "frame-types"
        type = "enumeration"
        variants = [
            { value = "admit-all" },
            { value = "admit-only-vlan-tagged", description = "Tagged frames only" },
        ]
    "#;

    fn parse_err(content: &str) -> Error {
        *Schema::from_str(content).expect_err("schema should be rejected")
    }

    #[test]
    fn test_parse_nested_record() {
        let schema = Schema::from_str(VLAN).unwrap();

        assert!(schema.root().record().is_none());
        assert!(schema.find("interface").unwrap().record().is_none());

        let vlan = schema.find("interface/bridge/vlan").unwrap();
        assert_eq!(vlan.name(), "vlan");
        assert_eq!(vlan.path(), "interface/bridge/vlan");

        let record = vlan.record().unwrap();
        assert_eq!(record.doc(), Some("Bridge VLAN table"));

        let names: Vec<_> = record.properties().iter().map(|p| p.name()).collect();
        assert_eq!(names, ["bridge", "vlan-ids", "dynamic", "frame-types"]);
    }

    #[test]
    fn test_parse_properties() {
        let schema = Schema::from_str(VLAN).unwrap();
        let record = schema.find("interface/bridge/vlan").unwrap().record().unwrap();
        let props = record.properties();

        assert_eq!(props[0].ty(), &PropertyType::String);
        assert_eq!(props[0].identifier(), "Bridge");
        assert!(!props[0].is_read_only());

        assert_eq!(props[1].ty(), &PropertyType::NumberRangeList);
        assert_eq!(props[1].identifier(), "VlanIDs");
        assert_eq!(props[1].doc(), Some("VLAN IDs"));

        assert!(props[2].is_read_only());

        let variants = props[3].ty().variants().unwrap();
        assert_eq!(variants.len(), 2);
        assert_eq!(variants[0].value(), "admit-all");
        assert_eq!(variants[1].doc(), Some("Tagged frames only"));
    }

    #[test]
    fn test_empty_schema() {
        let schema = Schema::from_str("").unwrap();
        assert!(!schema.root().has_children());
    }

    #[test]
    fn test_unknown_type_is_fatal() {
        let err = parse_err(
            r#"
            [[menus.system.record.properties]]
            name = "uptime"
            type = "duration"
            "#,
        );
        match err {
            Error::UnknownPropertyType {
                record,
                property,
                ty,
                span,
                ..
            } => {
                assert_eq!(record, "system");
                assert_eq!(property, "uptime");
                assert_eq!(ty, "duration");
                assert!(span.is_some());
            }
            other => panic!("expected UnknownPropertyType, got {:?}", other),
        }
    }

    #[test]
    fn test_enumeration_requires_variants() {
        let err = parse_err(
            r#"
            [[menus.system.record.properties]]
            name = "mode"
            type = "enumeration"
            "#,
        );
        assert!(matches!(err, Error::Validation { .. }));
    }

    #[test]
    fn test_variants_on_non_enumeration() {
        let err = parse_err(
            r#"
            [[menus.system.record.properties]]
            name = "mode"
            type = "string"
            variants = [{ value = "a" }]
            "#,
        );
        match err {
            Error::Validation { message, .. } => {
                assert!(message.contains("cannot declare variants"));
            }
            other => panic!("expected Validation, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_property_identifier() {
        let err = parse_err(
            r#"
            [[menus.system.record.properties]]
            name = "cpu.load"
            type = "integer"
            "#,
        );
        match err {
            Error::InvalidIdentifier { name, context, .. } => {
                assert_eq!(name, "Cpu.load");
                assert_eq!(context, "property in 'system'");
            }
            other => panic!("expected InvalidIdentifier, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_record_type_name() {
        let err = parse_err(
            r#"
            [[menus.6to4.record.properties]]
            name = "mtu"
            type = "integer"
            "#,
        );
        assert!(matches!(err, Error::InvalidIdentifier { .. }));
    }

    #[test]
    fn test_invalid_variant_name() {
        let err = parse_err(
            r#"
            [[menus.system.record.properties]]
            name = "mode"
            type = "enumeration"
            variants = [{ value = "*" }]
            "#,
        );
        assert!(matches!(err, Error::InvalidIdentifier { .. }));
    }

    #[test]
    fn test_duplicate_variant_names() {
        let err = parse_err(
            r#"
            [[menus.system.record.properties]]
            name = "mode"
            type = "enumeration"
            variants = [{ value = "a-b" }, { value = "a.b" }]
            "#,
        );
        match err {
            Error::Validation { message, span, .. } => {
                assert_eq!(
                    message,
                    "enumeration property 'mode' has values 'a-b' and 'a.b' that both map to variant 'AB'"
                );
                assert!(span.is_some());
            }
            other => panic!("expected Validation, got {:?}", other),
        }
    }

    #[test]
    fn test_record_type_shadows_imported_name() {
        for menu in ["client", "number", "result", "string"] {
            let err = parse_err(&format!(
                r#"
                [[menus.{}.record.properties]]
                name = "mtu"
                type = "integer"
                "#,
                menu
            ));
            match err {
                Error::Validation { message, .. } => {
                    assert!(
                        message.starts_with(&format!("record type of '{}' is named", menu)),
                        "{}",
                        message
                    );
                }
                other => panic!("expected Validation, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_update_type_collides_with_child_record() {
        let err = parse_err(
            r#"
            [[menus.a.menus.b.record.properties]]
            name = "mtu"
            type = "integer"

            [[menus.a.menus.b.menus.update.record.properties]]
            name = "mtu"
            type = "integer"
            "#,
        );
        match err {
            Error::Validation { message, .. } => {
                assert_eq!(
                    message,
                    "update type of 'a/b' and record type of 'a/b/update' are both named 'ABUpdate'"
                );
            }
            other => panic!("expected Validation, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_keys_rejected() {
        let err = parse_err(
            r#"
            [[menus.system.record.properties]]
            name = "mtu"
            type = "integer"
            readonly = true
            "#,
        );
        assert!(matches!(err, Error::Parse { .. }));
    }

    #[test]
    fn test_from_file() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("types.toml");
        std::fs::write(&path, VLAN).unwrap();

        let schema = Schema::from_file(&path).unwrap();
        assert!(schema.find("interface/bridge/vlan").is_some());

        let missing = Schema::from_file(temp.path().join("missing.toml")).unwrap_err();
        assert!(matches!(*missing, Error::Io { .. }));
    }
}
