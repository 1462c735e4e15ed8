//! Core utilities and types for the ros7api client generator.
//!
//! This crate provides the naming rules shared by the schema loader and the
//! code generators, and the file abstraction generated artifacts are written
//! through.

mod file;
mod utils;

// File operations
pub use file::{File, GENERATED_HEADER, GeneratedFile, WriteResult};
// String utilities
pub use utils::{
    capitalize, is_identifier, to_pascal_case, to_snake_case, to_type_name, to_variant_name,
};
