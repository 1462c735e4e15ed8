use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use ros7api_codegen::schema::{DisplayStyle, SchemaTree, SchemaTreeDisplay};
use ros7api_schema::Schema;

use super::UnwrapOrExit;

#[derive(Args)]
pub struct ListCommand {
    /// Path to the schema (defaults to ./types.toml)
    #[arg(short, long, default_value = "types.toml")]
    pub schema: PathBuf,

    /// Only print menu names
    #[arg(long)]
    pub names_only: bool,
}

impl ListCommand {
    pub fn run(&self) -> Result<()> {
        let schema = Schema::from_file(&self.schema).unwrap_or_exit();
        let tree = SchemaTree::new(&schema);

        if tree.is_empty() {
            println!("No menus defined");
            return Ok(());
        }

        let style = if self.names_only {
            DisplayStyle::Simple
        } else {
            DisplayStyle::WithRecords
        };
        println!("Menus:");
        println!(
            "{}",
            SchemaTreeDisplay::new(&tree).style(style).indent("  ")
        );
        Ok(())
    }
}
