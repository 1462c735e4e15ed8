use std::path::{Path, PathBuf};

use eyre::Result;

/// Header placed at the top of every generated source file.
pub const GENERATED_HEADER: &str = "// Code generated by ros7gen. DO NOT EDIT.";

/// Trait for types that represent a generated file
pub trait GeneratedFile {
    /// Get the file path relative to the base directory
    fn path(&self, base: &Path) -> PathBuf;

    /// Render the file content
    fn render(&self) -> String;

    /// Materialize this file under the given base directory
    fn to_file(&self, base: &Path) -> File {
        File::new(self.path(base), self.render())
    }

    /// Write the file to disk
    fn write(&self, base: &Path) -> Result<WriteResult> {
        self.to_file(base).write()
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)?;
    Ok(())
}

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written
    Written,
    /// File already had the rendered content and was left alone
    Unchanged,
}

/// A file to be generated. Existing files with identical content are left
/// untouched.
#[derive(Debug, Clone)]
pub struct File {
    path: PathBuf,
    content: String,
}

impl File {
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Write the file if its content differs from what is on disk
    pub fn write(&self) -> Result<WriteResult> {
        let current = std::fs::read_to_string(&self.path).ok();
        if current.as_deref() == Some(self.content.as_str()) {
            return Ok(WriteResult::Unchanged);
        }
        write_file(&self.path, &self.content)?;
        Ok(WriteResult::Written)
    }
}
