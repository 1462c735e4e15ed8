//! Rust AST builders for generating structs, enums, impls, traits and functions.
//!
//! These provide a high-level API for constructing Rust syntax,
//! which are turned into code fragments via [`Renderable`](ros7api_codegen::Renderable).

mod attrs;
mod enums;
mod fns;
mod impls;
mod structs;
mod traits;

pub use attrs::{SerdeArg, SerdeAttr};
pub use enums::{Enum, Variant};
pub use fns::{Fn, Param};
pub use impls::Impl;
pub use structs::{Field, Struct};
pub use traits::Trait;

#[cfg(test)]
pub(crate) use test_support::BuildSource;
