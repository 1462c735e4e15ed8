//! Lowering of a record definition into a generated-unit description.
//!
//! [`RecordUnit::lower`] is a pure function of a node path and its record:
//! it decides every generated name, the field sets of the resource and update
//! types, the per-record enumerations and the operations, without producing
//! any source text. Language crates render a unit however they like.

use ros7api_core::{to_pascal_case, to_snake_case, to_type_name, to_variant_name};
use ros7api_schema::{PropertyDef, PropertyType, RecordDef, SchemaNode};

/// Semantic type of a generated field, one arm per wire codec.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueType {
    Integer,
    Boolean,
    String,
    IpAddress,
    IpNetwork,
    StringList,
    NumberRangeList,
    /// A per-record enumeration, by generated type name.
    Enum(String),
}

/// A field of the resource or update type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDecl {
    /// Generated identifier, e.g. `VlanIds`.
    pub identifier: String,
    /// Wire key, e.g. `vlan-ids`.
    pub wire_name: String,
    pub ty: ValueType,
    pub read_only: bool,
    pub description: Option<String>,
}

/// One constant of a generated enumeration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantDecl {
    pub name: String,
    /// Wire string this variant stands for.
    pub value: String,
    pub description: Option<String>,
}

/// An enumeration type generated for an enumeration-typed property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumDecl {
    /// `<Record>_<Property>`, e.g. `InterfaceBridgeVlan_FrameTypes`.
    pub name: String,
    /// Wire name of the property that introduced this enumeration.
    pub property: String,
    pub description: Option<String>,
    pub variants: Vec<VariantDecl>,
}

/// The operations generated for every record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum OperationKind {
    /// Read every record of the menu.
    List,
    /// Partially update one record by id.
    Patch,
}

impl OperationKind {
    pub const ALL: [OperationKind; 2] = [OperationKind::List, OperationKind::Patch];

    pub fn name(self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Patch => "patch",
        }
    }
}

/// An operation bound to a menu path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationDecl {
    pub kind: OperationKind,
    /// Menu path the request targets. Patch appends `/<id>` at call time.
    pub path: String,
}

/// Everything generated for one schema node bearing a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordUnit {
    /// Menu path, e.g. `interface/bridge/vlan`.
    pub path: String,
    /// Resource type name, e.g. `InterfaceBridgeVlan`.
    pub type_name: String,
    /// Update type name, e.g. `InterfaceBridgeVlanUpdate`.
    pub update_name: String,
    /// Compilation unit name, e.g. `interface_bridge_vlan`.
    pub module_name: String,
    pub description: Option<String>,
    pub enums: Vec<EnumDecl>,
    /// Every property in schema order, read-only ones included.
    pub fields: Vec<FieldDecl>,
    pub operations: Vec<OperationDecl>,
}

impl RecordUnit {
    /// Lower the record of `node`, if it has one.
    pub fn from_node(node: &SchemaNode) -> Option<Self> {
        node.record().map(|record| Self::lower(node.path(), record))
    }

    /// Lower a record definition found at `path`.
    pub fn lower(path: &str, record: &RecordDef) -> Self {
        let type_name = to_type_name(path);
        let mut enums = Vec::new();
        let mut fields = Vec::with_capacity(record.properties().len());

        for property in record.properties() {
            let ty = match property.ty() {
                PropertyType::Integer => ValueType::Integer,
                PropertyType::Boolean => ValueType::Boolean,
                PropertyType::String => ValueType::String,
                PropertyType::IpAddress => ValueType::IpAddress,
                PropertyType::IpNetwork => ValueType::IpNetwork,
                PropertyType::StringList => ValueType::StringList,
                PropertyType::NumberRangeList => ValueType::NumberRangeList,
                PropertyType::Enumeration(variants) => {
                    let decl = EnumDecl {
                        name: format!("{}_{}", type_name, property.identifier()),
                        property: property.name().to_string(),
                        description: property.doc().map(str::to_string),
                        variants: variants
                            .iter()
                            .map(|v| VariantDecl {
                                name: to_variant_name(v.value()),
                                value: v.value().to_string(),
                                description: v.doc().map(str::to_string),
                            })
                            .collect(),
                    };
                    let ty = ValueType::Enum(decl.name.clone());
                    enums.push(decl);
                    ty
                }
            };
            fields.push(lower_field(property, ty));
        }

        Self {
            path: path.to_string(),
            update_name: format!("{}Update", type_name),
            type_name,
            module_name: module_name(path),
            description: record.doc().map(str::to_string),
            enums,
            fields,
            operations: OperationKind::ALL
                .into_iter()
                .map(|kind| OperationDecl {
                    kind,
                    path: path.to_string(),
                })
                .collect(),
        }
    }

    /// Fields of the resource type.
    pub fn resource_fields(&self) -> &[FieldDecl] {
        &self.fields
    }

    /// Fields of the update type: the writable properties only.
    pub fn update_fields(&self) -> impl Iterator<Item = &FieldDecl> {
        self.fields.iter().filter(|f| !f.read_only)
    }

    pub fn operation(&self, kind: OperationKind) -> Option<&OperationDecl> {
        self.operations.iter().find(|op| op.kind == kind)
    }
}

fn lower_field(property: &PropertyDef, ty: ValueType) -> FieldDecl {
    FieldDecl {
        identifier: property.identifier().to_string(),
        wire_name: property.name().to_string(),
        ty,
        read_only: property.is_read_only(),
        description: property.doc().map(str::to_string),
    }
}

/// Compilation unit name for a menu path: segments joined with `_`.
pub fn module_name(path: &str) -> String {
    path.split('/')
        .filter(|s| !s.is_empty())
        .map(|segment| to_snake_case(&to_pascal_case(segment)))
        .collect::<Vec<_>>()
        .join("_")
}
