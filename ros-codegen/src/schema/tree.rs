//! Depth-first view of the schema menu tree.

use ros7api_schema::{RecordDef, Schema, SchemaNode};

/// A schema node together with its depth below the root.
#[derive(Debug, Clone, Copy)]
pub struct FlatNode<'a> {
    pub node: &'a SchemaNode,
    /// 0 for top-level menus.
    pub depth: usize,
}

impl<'a> FlatNode<'a> {
    pub fn name(&self) -> &'a str {
        self.node.name()
    }

    pub fn path(&self) -> &'a str {
        self.node.path()
    }

    pub fn record(&self) -> Option<&'a RecordDef> {
        self.node.record()
    }
}

/// Every menu of a schema, flattened in depth-first order (children visited
/// by name).
#[derive(Debug, Clone)]
pub struct SchemaTree<'a> {
    nodes: Vec<FlatNode<'a>>,
}

impl<'a> SchemaTree<'a> {
    pub fn new(schema: &'a Schema) -> Self {
        let mut nodes = Vec::new();
        for child in schema.root().children() {
            flatten(child, 0, &mut nodes);
        }
        Self { nodes }
    }

    pub fn iter(&self) -> impl Iterator<Item = &FlatNode<'a>> {
        self.nodes.iter()
    }

    /// Nodes bearing a record, each with its record definition.
    pub fn records(&self) -> impl Iterator<Item = (&'a SchemaNode, &'a RecordDef)> + '_ {
        self.nodes
            .iter()
            .filter_map(|flat| flat.node.record().map(|record| (flat.node, record)))
    }

    /// Number of menus in the tree.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn record_count(&self) -> usize {
        self.records().count()
    }
}

fn flatten<'a>(node: &'a SchemaNode, depth: usize, out: &mut Vec<FlatNode<'a>>) {
    out.push(FlatNode { node, depth });
    for child in node.children() {
        flatten(child, depth + 1, out);
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    const SCHEMA: &str = r#"
        [[menus.interface.menus.bridge.record.properties]]
        name = "name"
        type = "string"

        [[menus.interface.menus.bridge.menus.vlan.record.properties]]
        name = "vlan-ids"
        type = "number-range-list"

        [[menus.interface.menus.bridge.menus.port.record.properties]]
        name = "pvid"
        type = "integer"

        [[menus.ip.menus.address.record.properties]]
        name = "address"
        type = "ip-network"
    "#;

    #[test]
    fn test_depth_first_order() {
        let schema = Schema::from_str(SCHEMA).unwrap();
        let tree = SchemaTree::new(&schema);

        let paths: Vec<_> = tree.iter().map(|n| (n.path(), n.depth)).collect();
        assert_eq!(
            paths,
            [
                ("interface", 0),
                ("interface/bridge", 1),
                ("interface/bridge/port", 2),
                ("interface/bridge/vlan", 2),
                ("ip", 0),
                ("ip/address", 1),
            ]
        );
    }

    #[test]
    fn test_records() {
        let schema = Schema::from_str(SCHEMA).unwrap();
        let tree = SchemaTree::new(&schema);

        let records: Vec<_> = tree.records().map(|(node, _)| node.path()).collect();
        assert_eq!(
            records,
            [
                "interface/bridge",
                "interface/bridge/port",
                "interface/bridge/vlan",
                "ip/address"
            ]
        );
        assert_eq!(tree.len(), 6);
        assert_eq!(tree.record_count(), 4);
    }

    #[test]
    fn test_empty_schema() {
        let schema = Schema::from_str("").unwrap();
        let tree = SchemaTree::new(&schema);
        assert!(tree.is_empty());
        assert_eq!(tree.records().count(), 0);
    }
}
