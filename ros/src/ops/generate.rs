//! Generate operation - render bindings for every record in a schema.

use std::path::Path;

use eyre::{Context, Result};
use ros7api_codegen::LanguageCodegen;
use ros7api_codegen_rust::{Generator, RustGeneratorOptions};
use ros7api_schema::Schema;
use tracing::info;

use crate::reports::GenerateReport;

/// Execute the generate operation.
///
/// With `dry_run` the rendered files are returned instead of written.
pub fn generate(
    schema: &Schema,
    output_dir: &Path,
    options: RustGeneratorOptions,
    dry_run: bool,
) -> Result<GenerateReport> {
    let generator = Generator::new(schema).with_options(options);

    if dry_run {
        return Ok(GenerateReport::Preview {
            files: generator.preview(),
        });
    }

    let records = generator.units().len();
    info!(records, output = %output_dir.display(), "generating bindings");
    let result = generator
        .generate(output_dir)
        .wrap_err_with(|| format!("Failed to generate code into {}", output_dir.display()))?;

    Ok(GenerateReport::Written {
        output_dir: output_dir.to_path_buf(),
        records,
        written: result.written,
        unchanged: result.unchanged,
    })
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    const SCHEMA: &str = r#"
        [[menus.system.menus.identity.record.properties]]
        name = "name"
        type = "string"
    "#;

    #[test]
    fn test_dry_run_writes_nothing() {
        let schema = Schema::from_str(SCHEMA).unwrap();
        let dir = tempfile::tempdir().unwrap();

        let report = generate(&schema, dir.path(), RustGeneratorOptions::default(), true).unwrap();

        let GenerateReport::Preview { files } = report else {
            panic!("expected a preview");
        };
        let paths: Vec<&str> = files.iter().map(|f| f.path.as_str()).collect();
        assert_eq!(paths, ["system_identity.rs", "mod.rs"]);
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_generate_then_regenerate() {
        let schema = Schema::from_str(SCHEMA).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("generated");

        let first = generate(&schema, &out, RustGeneratorOptions::default(), false).unwrap();
        let GenerateReport::Written { records, written, .. } = first else {
            panic!("expected files to be written");
        };
        assert_eq!(records, 1);
        assert_eq!(written.len(), 2);
        assert!(out.join("system_identity.rs").exists());

        let second = generate(&schema, &out, RustGeneratorOptions::default(), false).unwrap();
        let GenerateReport::Written {
            written, unchanged, ..
        } = second
        else {
            panic!("expected files to be written");
        };
        assert!(written.is_empty());
        assert_eq!(unchanged.len(), 2);
    }
}
