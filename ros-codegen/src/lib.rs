//! Shared code generation utilities for the ros7api client generator.
//!
//! This crate holds the language-agnostic half of the generator. Language
//! crates (e.g. `ros7api-codegen-rust`) render its output.
//!
//! # Module Organization
//!
//! - [`builder`] - Code fragments, CodeBuilder and FileBuilder
//! - [`schema`] - Schema traversal and lowering (SchemaTree, RecordUnit, etc.)
//! - [`generation`] - Output helpers (ImportCollector)
//! - [`language`] - Language-specific abstractions (LanguageCodegen, TypeMapper, etc.)

pub mod builder;
pub mod generation;
pub mod language;
pub mod schema;

pub use builder::{CodeBuilder, CodeFragment, FileBuilder, Renderable};
pub use generation::ImportCollector;
pub use language::{GenerateResult, LanguageCodegen, NamingConvention, PreviewFile, TypeMapper};
pub use schema::{RecordUnit, SchemaTree};
