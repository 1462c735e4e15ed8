use std::path::Path;

use eyre::{Result, WrapErr};
use ros7api_codegen::{GenerateResult, LanguageCodegen, PreviewFile, RecordUnit, SchemaTree};
use ros7api_core::{GeneratedFile, WriteResult};
use ros7api_schema::Schema;
use tracing::debug;

use crate::files::{GeneratedMod, RecordRs};

/// Runtime path used when generating into the runtime crate itself.
pub const RUNTIME_CRATE_PATH: &str = "crate";

/// Options for the Rust target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RustGeneratorOptions {
    /// Path through which generated code reaches the runtime crate:
    /// `ros7api` for downstream crates, `crate` inside the runtime crate.
    pub runtime_path: String,
}

impl Default for RustGeneratorOptions {
    fn default() -> Self {
        Self {
            runtime_path: "ros7api".to_string(),
        }
    }
}

impl RustGeneratorOptions {
    pub fn runtime_path(mut self, path: impl Into<String>) -> Self {
        self.runtime_path = path.into();
        self
    }

    /// Whether the generated code lives inside the runtime crate, which allows
    /// inherent methods on `Client`.
    pub fn is_runtime_crate(&self) -> bool {
        self.runtime_path == RUNTIME_CRATE_PATH
    }
}

/// Rust code generator producing one module per schema record.
pub struct Generator<'a> {
    schema: &'a Schema,
    options: RustGeneratorOptions,
}

impl LanguageCodegen for Generator<'_> {
    fn preview(&self) -> Vec<PreviewFile> {
        self.preview_files()
    }

    fn generate(&self, output_dir: &Path) -> Result<GenerateResult> {
        self.generate_files(output_dir)
    }
}

impl<'a> Generator<'a> {
    pub fn new(schema: &'a Schema) -> Self {
        Self {
            schema,
            options: RustGeneratorOptions::default(),
        }
    }

    pub fn with_options(mut self, options: RustGeneratorOptions) -> Self {
        self.options = options;
        self
    }

    /// Lower every record of the schema, in depth-first order.
    pub fn units(&self) -> Vec<RecordUnit> {
        SchemaTree::new(self.schema)
            .records()
            .map(|(node, record)| RecordUnit::lower(node.path(), record))
            .collect()
    }

    /// Every output file: record modules first, then `mod.rs`.
    fn render_files<'s>(&'s self, units: &'s [RecordUnit]) -> Vec<Box<dyn GeneratedFile + 's>> {
        let mut files: Vec<Box<dyn GeneratedFile + 's>> = Vec::new();
        for unit in units {
            files.push(Box::new(RecordRs::new(unit, &self.options)));
        }
        files.push(Box::new(GeneratedMod::new(
            units.iter().map(|unit| unit.module_name.clone()),
        )));
        files
    }

    fn preview_files(&self) -> Vec<PreviewFile> {
        let units = self.units();
        self.render_files(&units)
            .iter()
            .map(|file| PreviewFile {
                path: file.path(Path::new("")).display().to_string(),
                content: file.render(),
            })
            .collect()
    }

    fn generate_files(&self, output_dir: &Path) -> Result<GenerateResult> {
        let units = self.units();
        let mut result = GenerateResult::default();

        for file in self.render_files(&units) {
            let relative = file.path(Path::new("")).display().to_string();
            let outcome = file
                .write(output_dir)
                .wrap_err_with(|| format!("failed to write {}", relative))?;
            debug!(file = %relative, ?outcome, "generated file");
            match outcome {
                WriteResult::Written => result.written.push(relative),
                WriteResult::Unchanged => result.unchanged.push(relative),
            }
        }

        Ok(result)
    }
}
