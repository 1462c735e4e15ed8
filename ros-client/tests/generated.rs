//! The checked-in bindings must match what `ros7gen` renders from the bundled
//! schema.

use std::{fs, path::Path};

use ros7api_codegen_rust::{
    Generator, LanguageCodegen, RUNTIME_CRATE_PATH, RustGeneratorOptions,
};
use ros7api_schema::Schema;

#[test]
fn test_generated_code_is_up_to_date() {
    let root = Path::new(env!("CARGO_MANIFEST_DIR"));
    let schema = Schema::from_file(root.join("schema/types.toml")).unwrap();
    let generator = Generator::new(&schema)
        .with_options(RustGeneratorOptions::default().runtime_path(RUNTIME_CRATE_PATH));

    let generated_dir = root.join("src/generated");
    let preview = generator.preview();
    for file in &preview {
        let on_disk = fs::read_to_string(generated_dir.join(&file.path))
            .unwrap_or_else(|e| panic!("{}: {e}", file.path));
        assert_eq!(
            on_disk, file.content,
            "src/generated/{} is stale, rerun ros7gen generate",
            file.path
        );
    }

    let mut expected: Vec<_> = preview.iter().map(|f| f.path.clone()).collect();
    expected.sort();
    let mut actual: Vec<_> = fs::read_dir(&generated_dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    actual.sort();
    assert_eq!(actual, expected);
}
