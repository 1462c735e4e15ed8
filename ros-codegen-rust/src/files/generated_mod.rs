use std::path::{Path, PathBuf};

use ros7api_codegen::{CodeFragment, FileBuilder};
use ros7api_core::{GENERATED_HEADER, GeneratedFile};

use crate::RustFileBuilder;

/// The `mod.rs` that declares every record module and re-exports its items.
pub struct GeneratedMod {
    modules: Vec<String>,
}

impl GeneratedMod {
    pub fn new(modules: impl IntoIterator<Item = String>) -> Self {
        let mut modules: Vec<String> = modules.into_iter().collect();
        modules.sort();
        modules.dedup();
        Self { modules }
    }
}

impl GeneratedFile for GeneratedMod {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("mod.rs")
    }

    fn render(&self) -> String {
        let modules = self.modules.iter();
        FileBuilder::rust()
            .item(modules.clone().map(|m| CodeFragment::line(format!("mod {};", m))))
            .item(modules.map(|m| CodeFragment::line(format!("pub use {}::*;", m))))
            .render_rust(GENERATED_HEADER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorted_modules() {
        let file = GeneratedMod::new([
            "ip_address".to_string(),
            "interface_bridge_vlan".to_string(),
        ]);

        insta::assert_snapshot!(file.render(), @r"
        // Code generated by ros7gen. DO NOT EDIT.

        mod interface_bridge_vlan;
        mod ip_address;

        pub use interface_bridge_vlan::*;
        pub use ip_address::*;
        ");
    }

    #[test]
    fn test_empty() {
        let file = GeneratedMod::new([]);
        assert_eq!(file.render(), format!("{}\n\n", GENERATED_HEADER));
        assert_eq!(file.path(Path::new("out")), Path::new("out/mod.rs"));
    }
}
