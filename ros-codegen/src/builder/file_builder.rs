//! Generated source files as an import set plus top-level items.

use super::{CodeBuilder, CodeFragment, code_builder::RUST_INDENT};
use crate::generation::ImportCollector;

/// A generated file under construction.
///
/// Items are kept apart so language crates can lay them out (the Rust target
/// separates them with one blank line). Items without any content are dropped.
///
/// ```
/// use ros7api_codegen::{CodeFragment, FileBuilder};
///
/// let (_, items) = FileBuilder::rust()
///     .item([CodeFragment::line("pub struct A;")])
///     .item(Vec::<CodeFragment>::new())
///     .item([CodeFragment::line("pub struct B;")])
///     .into_parts();
///
/// assert_eq!(items, ["pub struct A;\n", "pub struct B;\n"]);
/// ```
#[derive(Debug, Clone)]
pub struct FileBuilder {
    imports: ImportCollector,
    items: Vec<String>,
    indent: &'static str,
}

impl FileBuilder {
    pub fn new(indent: &'static str) -> Self {
        Self {
            imports: ImportCollector::new(),
            items: Vec::new(),
            indent,
        }
    }

    pub fn rust() -> Self {
        Self::new(RUST_INDENT)
    }

    /// Replace the import set.
    pub fn imports(mut self, imports: ImportCollector) -> Self {
        self.imports = imports;
        self
    }

    /// Append one top-level item.
    pub fn item(mut self, fragments: impl IntoIterator<Item = CodeFragment>) -> Self {
        let code = CodeBuilder::new(self.indent).fragments(fragments);
        if !code.is_empty() {
            self.items.push(code.build());
        }
        self
    }

    pub fn into_parts(self) -> (ImportCollector, Vec<String>) {
        (self.imports, self.items)
    }
}

impl Default for FileBuilder {
    fn default() -> Self {
        Self::rust()
    }
}
