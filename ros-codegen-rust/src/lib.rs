//! Rust target of the ros7api client generator.
//!
//! Renders each [`RecordUnit`](ros7api_codegen::RecordUnit) into a Rust
//! module built on the `ros7api` runtime crate.

mod generator;
mod naming;
mod render;
mod type_mapper;

pub mod ast;
pub mod files;

pub use ast::{Enum, Field, Fn, Impl, Param, SerdeArg, SerdeAttr, Struct, Trait, Variant};
pub use generator::{Generator, RUNTIME_CRATE_PATH, RustGeneratorOptions};
pub use naming::RUST_NAMING;
pub use render::{RustFileBuilder, render_imports};
pub use ros7api_codegen::{GenerateResult, LanguageCodegen, PreviewFile};
pub use type_mapper::RustTypeMapper;
