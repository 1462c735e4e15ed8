//! Schema traversal and lowering.
//!
//! - [`SchemaTree`] - Depth-first view of the menu hierarchy
//! - [`RecordUnit`] - Language-agnostic description of one generated unit
//! - [`SchemaTreeDisplay`] - Declarative menu tree formatting

mod display;
mod tree;
mod unit;

pub use display::{DisplayStyle, SchemaTreeDisplay};
pub use tree::{FlatNode, SchemaTree};
pub use unit::{
    EnumDecl, FieldDecl, OperationDecl, OperationKind, RecordUnit, ValueType, VariantDecl,
    module_name,
};
