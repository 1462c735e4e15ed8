//! Code generation building blocks.
//!
//! - [`CodeFragment`] / [`Renderable`] - what AST nodes produce
//! - [`CodeBuilder`] - writes fragments as indented text
//! - [`FileBuilder`] - imports plus top-level items of one generated file

mod code_builder;
mod file_builder;
mod renderable;

pub use code_builder::{CodeBuilder, RUST_INDENT};
pub use file_builder::FileBuilder;
pub use renderable::{CodeFragment, Renderable};
