//! Core operations.
//!
//! This module contains the logic behind ros7gen commands, separated from
//! argument parsing and output rendering.

pub mod check;
pub mod generate;

pub use check::check;
pub use generate::generate;
