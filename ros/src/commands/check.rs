use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use ros7api_schema::Schema;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    /// Path to the schema (defaults to ./types.toml)
    #[arg(short, long, default_value = "types.toml")]
    pub schema: PathBuf,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let schema = Schema::from_file(&self.schema).unwrap_or_exit();
        ops::check(&schema, &self.schema).render(&mut TerminalOutput::new());
        Ok(())
    }
}
