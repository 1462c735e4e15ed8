//! Lays out a generated file as Rust source.

use std::collections::BTreeSet;

use ros7api_codegen::{builder::FileBuilder, generation::ImportCollector};

/// Render imports as Rust `use` statements, one per module.
///
/// ```
/// use ros7api_codegen::generation::ImportCollector;
/// use ros7api_codegen_rust::render_imports;
///
/// let mut imports = ImportCollector::new();
/// imports.add("serde", "Serialize");
/// imports.add("serde", "Deserialize");
/// imports.add("crate", "Client");
///
/// let rendered = render_imports(&imports);
/// assert_eq!(rendered, "use serde::{Deserialize, Serialize};\nuse crate::Client;");
/// ```
pub fn render_imports(imports: &ImportCollector) -> String {
    imports
        .iter()
        .map(|(module, symbols)| use_line(module, symbols))
        .collect::<Vec<_>>()
        .join("\n")
}

fn use_line(module: &str, symbols: &BTreeSet<String>) -> String {
    let symbols: Vec<&str> = symbols.iter().map(String::as_str).collect();
    match symbols.as_slice() {
        [symbol] => format!("use {}::{};", module, symbol),
        _ => format!("use {}::{{{}}};", module, symbols.join(", ")),
    }
}

/// Rust layout for [`FileBuilder`].
pub trait RustFileBuilder {
    /// `header`, the `use` block, then the items separated by blank lines.
    fn render_rust(self, header: &str) -> String;
}

impl RustFileBuilder for FileBuilder {
    fn render_rust(self, header: &str) -> String {
        let (imports, items) = self.into_parts();
        let mut out = format!("{}\n\n", header);
        if !imports.is_empty() {
            out.push_str(&render_imports(&imports));
            out.push_str("\n\n");
        }
        out.push_str(&items.join("\n"));
        out
    }
}
