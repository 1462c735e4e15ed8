//! Check operation - schema validation summary.

use std::path::Path;

use ros7api_codegen::{RecordUnit, SchemaTree};
use ros7api_schema::Schema;

use crate::reports::{CheckReport, RecordSummary};

/// Execute the check operation.
///
/// Loading already validated the schema; this lowers every record the way
/// generation would and summarizes the result.
pub fn check(schema: &Schema, schema_path: &Path) -> CheckReport {
    let tree = SchemaTree::new(schema);
    let records = tree
        .records()
        .map(|(node, record)| {
            let unit = RecordUnit::lower(node.path(), record);
            RecordSummary {
                path: unit.path.clone(),
                type_name: unit.type_name.clone(),
                properties: unit.resource_fields().len(),
                writable: unit.update_fields().count(),
                enums: unit.enums.len(),
            }
        })
        .collect();

    CheckReport {
        schema_path: schema_path.to_path_buf(),
        menus: tree.len(),
        records,
    }
}
