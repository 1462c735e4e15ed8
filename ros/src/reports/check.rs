//! Check command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// One record a schema would generate bindings for.
#[derive(Debug)]
pub struct RecordSummary {
    pub path: String,
    pub type_name: String,
    pub properties: usize,
    pub writable: usize,
    pub enums: usize,
}

/// Report data from schema validation.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the schema file.
    pub schema_path: PathBuf,
    /// Number of menus, with or without a record.
    pub menus: usize,
    pub records: Vec<RecordSummary>,
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        out.preformatted(&format!("✓ {} is valid", self.schema_path.display()));
        out.newline();
        out.preformatted(&format!(
            "{} menu{}, {} record{}",
            self.menus,
            if self.menus == 1 { "" } else { "s" },
            self.records.len(),
            if self.records.len() == 1 { "" } else { "s" },
        ));
        for record in &self.records {
            let mut line = format!(
                "{} -> {} ({} properties, {} writable",
                record.path, record.type_name, record.properties, record.writable
            );
            if record.enums > 0 {
                line.push_str(&format!(", {} enum", record.enums));
                if record.enums > 1 {
                    line.push('s');
                }
            }
            line.push(')');
            out.list_item(&line);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::BufferOutput;

    #[test]
    fn test_check_report() {
        let report = CheckReport {
            schema_path: PathBuf::from("types.toml"),
            menus: 4,
            records: vec![
                RecordSummary {
                    path: "interface/bridge/port".into(),
                    type_name: "InterfaceBridgePort".into(),
                    properties: 7,
                    writable: 6,
                    enums: 1,
                },
                RecordSummary {
                    path: "interface/bridge/vlan".into(),
                    type_name: "InterfaceBridgeVlan".into(),
                    properties: 8,
                    writable: 5,
                    enums: 0,
                },
            ],
        };

        insta::assert_snapshot!(BufferOutput::render(&report), @r"
        ✓ types.toml is valid

        4 menus, 2 records
          - interface/bridge/port -> InterfaceBridgePort (7 properties, 6 writable, 1 enum)
          - interface/bridge/vlan -> InterfaceBridgeVlan (8 properties, 5 writable)
        ");
    }
}
