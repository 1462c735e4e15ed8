//! Import collection for generated files.

use std::collections::BTreeSet;

use indexmap::IndexMap;

/// The symbols a generated file pulls in, grouped by module.
///
/// Modules keep the order they were first added in; symbols within a module
/// are sorted and deduplicated, so output does not depend on field order.
///
/// ```
/// use ros7api_codegen::generation::ImportCollector;
///
/// let mut imports = ImportCollector::new();
/// imports.add("serde", "Serialize");
/// imports.add("serde", "Deserialize");
/// imports.add("crate", "Client");
///
/// let modules: Vec<&str> = imports.iter().map(|(module, _)| module).collect();
/// assert_eq!(modules, ["serde", "crate"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ImportCollector {
    modules: IndexMap<String, BTreeSet<String>>,
}

impl ImportCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, module: &str, symbol: &str) {
        self.modules
            .entry(module.to_string())
            .or_default()
            .insert(symbol.to_string());
    }

    /// Modules in first-use order, each with its sorted symbols.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeSet<String>)> {
        self.modules
            .iter()
            .map(|(module, symbols)| (module.as_str(), symbols))
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}
