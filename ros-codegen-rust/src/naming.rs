//! Rust-specific naming conventions.

use ros7api_codegen::NamingConvention;
use ros7api_core::to_snake_case;

/// Keywords that cannot be raw identifiers get a trailing underscore instead.
fn escape_rust_reserved(name: &str) -> String {
    match name {
        "self" | "Self" | "super" | "crate" => format!("{}_", name),
        _ => format!("r#{}", name),
    }
}

/// Rust naming conventions.
pub const RUST_NAMING: NamingConvention = NamingConvention {
    identifier_to_field: to_snake_case,
    reserved_words: &[
        "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum",
        "extern", "false", "fn", "for", "gen", "if", "impl", "in", "let", "loop", "match", "mod",
        "move", "mut", "pub", "ref", "return", "self", "Self", "static", "struct", "super",
        "trait", "true", "type", "unsafe", "use", "where", "while", "abstract", "become", "box",
        "do", "final", "macro", "override", "priv", "try", "typeof", "unsized", "virtual",
        "yield",
    ],
    escape_reserved: escape_rust_reserved,
};

/// Field name of the record identifier in generated resource types.
pub const ID_FIELD: &str = "id";

/// Rust field name for a property identifier. Properties that would clash
/// with the record identifier field get a trailing underscore.
pub fn field_name(identifier: &str) -> String {
    let name = RUST_NAMING.field_name(identifier);
    if name == ID_FIELD {
        format!("{}_", name)
    } else {
        name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rust_naming_field() {
        assert_eq!(field_name("VlanIds"), "vlan_ids");
        assert_eq!(field_name("VlanIDs"), "vlan_ids");
        assert_eq!(field_name("Bridge"), "bridge");
    }

    #[test]
    fn test_rust_reserved_words() {
        assert!(RUST_NAMING.is_reserved("type"));
        assert!(RUST_NAMING.is_reserved("async"));
        assert!(RUST_NAMING.is_reserved("match"));
        assert!(!RUST_NAMING.is_reserved("bridge"));
    }

    #[test]
    fn test_rust_escape_reserved() {
        assert_eq!(field_name("Type"), "r#type");
        assert_eq!(field_name("Use"), "r#use");
        assert_eq!(field_name("Self"), "self_");
        assert_eq!(field_name("Super"), "super_");
    }

    #[test]
    fn test_id_property_does_not_clash() {
        assert_eq!(field_name("Id"), "id_");
    }
}
