//! Generate command report data structures.

use std::path::PathBuf;

use ros7api_codegen::PreviewFile;

use super::output::{Output, Report};

/// Outcome of `ros7gen generate`.
#[derive(Debug)]
pub enum GenerateReport {
    /// `--dry-run`: rendered files, nothing written.
    Preview { files: Vec<PreviewFile> },
    /// Files written to the output directory.
    Written {
        output_dir: PathBuf,
        records: usize,
        written: Vec<String>,
        unchanged: Vec<String>,
    },
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        match self {
            Self::Preview { files } => {
                for file in files {
                    out.divider(&file.path);
                    out.preformatted(&file.content);
                }
                out.divider("Summary");
                out.preformatted(&format!("{} files would be generated", files.len()));
            }
            Self::Written {
                output_dir,
                records,
                written,
                unchanged,
            } => {
                out.preformatted(&format!(
                    "Generated {} record{} into {}",
                    records,
                    if *records == 1 { "" } else { "s" },
                    output_dir.display()
                ));
                if !written.is_empty() {
                    out.newline();
                    out.section("Written");
                    for file in written {
                        out.added_item(file);
                    }
                }
                if !unchanged.is_empty() {
                    out.newline();
                    out.preformatted(&format!("{} file(s) unchanged", unchanged.len()));
                }
            }
        }
    }
}
