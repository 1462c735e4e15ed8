//! Naming conventions for target languages.

/// Language-specific naming conventions.
///
/// Defines how generated identifiers become field names and how reserved
/// words are handled.
#[derive(Debug, Clone, Copy)]
pub struct NamingConvention {
    /// Transform a property identifier into a field name (e.g., "VlanIds" -> "vlan_ids")
    pub identifier_to_field: fn(&str) -> String,
    /// List of reserved words in the language
    pub reserved_words: &'static [&'static str],
    /// Escape a reserved word (e.g., "type" -> "r#type" in Rust)
    pub escape_reserved: fn(&str) -> String,
}

impl NamingConvention {
    /// Check if a name is a reserved word.
    pub fn is_reserved(&self, name: &str) -> bool {
        self.reserved_words.contains(&name)
    }

    /// Get a safe name, escaping if necessary.
    pub fn safe_name(&self, name: &str) -> String {
        if self.is_reserved(name) {
            (self.escape_reserved)(name)
        } else {
            name.to_string()
        }
    }

    /// Transform and make safe for use as a field name.
    pub fn field_name(&self, identifier: &str) -> String {
        let transformed = (self.identifier_to_field)(identifier);
        self.safe_name(&transformed)
    }
}
