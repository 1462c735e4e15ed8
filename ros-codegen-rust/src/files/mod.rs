//! Generated files of the Rust target.

mod generated_mod;
mod record_rs;

pub use generated_mod::GeneratedMod;
pub use record_rs::RecordRs;
