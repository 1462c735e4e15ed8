use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use ros7api_codegen_rust::RustGeneratorOptions;
use ros7api_schema::Schema;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to the schema (defaults to ./types.toml)
    #[arg(short, long, default_value = "types.toml")]
    pub schema: PathBuf,

    /// Output directory for the generated modules
    #[arg(short, long, default_value = "src/generated")]
    pub output: PathBuf,

    /// Path generated code uses to reach the client runtime; `crate` when
    /// generating into the runtime crate itself
    #[arg(long, default_value = "ros7api")]
    pub crate_path: String,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let schema = Schema::from_file(&self.schema).unwrap_or_exit();
        let options = RustGeneratorOptions::default().runtime_path(&self.crate_path);

        let report = ops::generate(&schema, &self.output, options, self.dry_run)?;
        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
