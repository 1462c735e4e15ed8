//! Language-agnostic code generation traits.

use std::path::Path;

use eyre::Result;

use crate::schema::ValueType;

/// Trait for language-specific code generators.
///
/// Implement this trait to emit client code for another target language.
pub trait LanguageCodegen {
    /// Preview generated files without writing to disk
    fn preview(&self) -> Vec<PreviewFile>;

    /// Generate all files into the specified output directory
    fn generate(&self, output_dir: &Path) -> Result<GenerateResult>;
}

/// Result of code generation
#[derive(Debug, Default)]
pub struct GenerateResult {
    /// Files whose content changed and were written
    pub written: Vec<String>,
    /// Files that already had the generated content
    pub unchanged: Vec<String>,
}

impl GenerateResult {
    pub fn total(&self) -> usize {
        self.written.len() + self.unchanged.len()
    }
}

/// A generated file for preview
#[derive(Debug)]
pub struct PreviewFile {
    /// Relative path from output directory
    pub path: String,
    /// File content
    pub content: String,
}

/// Trait for mapping field value types to language-specific type strings.
pub trait TypeMapper {
    /// Map a value type to a language-specific type string
    fn map_type(&self, ty: &ValueType) -> String;

    /// Map an optional value type (e.g., `Option<T>` in Rust)
    fn map_optional(&self, ty: &ValueType) -> String {
        format!("Option<{}>", self.map_type(ty))
    }
}
