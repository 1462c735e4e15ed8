//! Schema tree display formatting, used by `ros7gen list`.

use std::fmt;

use super::{FlatNode, RecordUnit, SchemaTree};

/// Display style for schema trees.
#[derive(Debug, Clone, Copy, Default)]
pub enum DisplayStyle {
    /// Indented menu names only.
    ///
    /// ```text
    /// interface
    ///   bridge
    ///     vlan
    /// ```
    #[default]
    Simple,

    /// Menu names with the generated type of each record and its
    /// property counts.
    ///
    /// ```text
    /// interface
    ///   bridge
    ///     vlan - InterfaceBridgeVlan (6 properties, 3 writable)
    /// ```
    WithRecords,
}

/// Declarative schema tree display formatter.
#[derive(Debug, Clone)]
pub struct SchemaTreeDisplay<'a> {
    tree: &'a SchemaTree<'a>,
    style: DisplayStyle,
    indent_str: &'a str,
}

impl<'a> SchemaTreeDisplay<'a> {
    pub fn new(tree: &'a SchemaTree<'a>) -> Self {
        Self {
            tree,
            style: DisplayStyle::default(),
            indent_str: "  ",
        }
    }

    pub fn style(mut self, style: DisplayStyle) -> Self {
        self.style = style;
        self
    }

    /// Set the indentation string (default: two spaces).
    pub fn indent(mut self, indent: &'a str) -> Self {
        self.indent_str = indent;
        self
    }

    pub fn render(&self) -> String {
        let mut output = String::new();
        for flat in self.tree.iter() {
            output.push_str(&self.indent_str.repeat(flat.depth));
            output.push_str(flat.name());
            if let DisplayStyle::WithRecords = self.style {
                output.push_str(&Self::format_record(flat));
            }
            output.push('\n');
        }
        output
    }

    fn format_record(flat: &FlatNode<'_>) -> String {
        let Some(unit) = RecordUnit::from_node(flat.node) else {
            return String::new();
        };
        let total = unit.resource_fields().len();
        let writable = unit.update_fields().count();
        format!(
            " - {} ({} propert{}, {} writable)",
            unit.type_name,
            total,
            if total == 1 { "y" } else { "ies" },
            writable
        )
    }
}

impl fmt::Display for SchemaTreeDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render().trim_end())
    }
}
