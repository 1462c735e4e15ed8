//! Resolved schema model.
//!
//! These types are built once from a parsed schema description and are
//! read-only afterwards.

use std::collections::BTreeMap;

use ros7api_core::to_pascal_case;

/// One entry of the hierarchical resource namespace (a RouterOS menu such as
/// `interface/bridge/vlan`), optionally bearing a record definition.
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaNode {
    name: String,
    path: String,
    record: Option<RecordDef>,
    children: BTreeMap<String, SchemaNode>,
}

impl SchemaNode {
    pub(crate) fn new(
        name: impl Into<String>,
        path: impl Into<String>,
        record: Option<RecordDef>,
        children: BTreeMap<String, SchemaNode>,
    ) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            record,
            children,
        }
    }

    /// Name of this node within its parent (empty for the root).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Slash-joined path from the root, e.g. `interface/bridge/vlan`.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Path segments from the root.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.path.split('/').filter(|s| !s.is_empty())
    }

    pub fn is_root(&self) -> bool {
        self.path.is_empty()
    }

    pub fn record(&self) -> Option<&RecordDef> {
        self.record.as_ref()
    }

    /// Child nodes, ordered by name.
    pub fn children(&self) -> impl Iterator<Item = &SchemaNode> {
        self.children.values()
    }

    pub fn child(&self, name: &str) -> Option<&SchemaNode> {
        self.children.get(name)
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Look up a descendant by slash-joined path relative to this node.
    pub fn find(&self, path: &str) -> Option<&SchemaNode> {
        path.split('/')
            .filter(|s| !s.is_empty())
            .try_fold(self, |node, segment| node.child(segment))
    }
}

/// The record carried by a schema node: an ordered property list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordDef {
    description: Option<String>,
    properties: Vec<PropertyDef>,
}

impl RecordDef {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn property(mut self, property: PropertyDef) -> Self {
        self.properties.push(property);
        self
    }

    pub fn doc(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// All properties, in declaration order.
    pub fn properties(&self) -> &[PropertyDef] {
        &self.properties
    }

    /// Properties that may be changed through an update.
    pub fn writable(&self) -> impl Iterator<Item = &PropertyDef> {
        self.properties.iter().filter(|p| !p.is_read_only())
    }
}

/// A named, typed record property.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyDef {
    name: String,
    ident: String,
    ty: PropertyType,
    read_only: bool,
    description: Option<String>,
}

impl PropertyDef {
    /// Create a property whose identifier is derived from its wire name.
    pub fn new(name: impl Into<String>, ty: PropertyType) -> Self {
        let name = name.into();
        let ident = to_pascal_case(&name);
        Self {
            name,
            ident,
            ty,
            read_only: false,
            description: None,
        }
    }

    /// Override the derived identifier.
    pub fn ident(mut self, ident: impl Into<String>) -> Self {
        self.ident = ident.into();
        self
    }

    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Wire name, e.g. `vlan-ids`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Generated identifier, e.g. `VlanIds`.
    pub fn identifier(&self) -> &str {
        &self.ident
    }

    pub fn ty(&self) -> &PropertyType {
        &self.ty
    }

    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    pub fn doc(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

/// The closed set of property types a schema may use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyType {
    Integer,
    Boolean,
    String,
    IpAddress,
    IpNetwork,
    StringList,
    NumberRangeList,
    Enumeration(Vec<EnumVariant>),
}

impl PropertyType {
    /// Every type tag accepted in a schema description.
    pub const TAGS: &'static [&'static str] = &[
        "integer",
        "boolean",
        "string",
        "ip-address",
        "ip-network",
        "string-list",
        "number-range-list",
        "enumeration",
    ];

    /// Resolve a type tag. Returns `None` for tags outside [`Self::TAGS`].
    ///
    /// `variants` is only kept for `enumeration`.
    pub fn from_tag(tag: &str, variants: Vec<EnumVariant>) -> Option<Self> {
        let ty = match tag {
            "integer" => Self::Integer,
            "boolean" => Self::Boolean,
            "string" => Self::String,
            "ip-address" => Self::IpAddress,
            "ip-network" => Self::IpNetwork,
            "string-list" => Self::StringList,
            "number-range-list" => Self::NumberRangeList,
            "enumeration" => Self::Enumeration(variants),
            _ => return None,
        };
        Some(ty)
    }

    /// The schema tag of this type.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Integer => "integer",
            Self::Boolean => "boolean",
            Self::String => "string",
            Self::IpAddress => "ip-address",
            Self::IpNetwork => "ip-network",
            Self::StringList => "string-list",
            Self::NumberRangeList => "number-range-list",
            Self::Enumeration(_) => "enumeration",
        }
    }

    pub fn variants(&self) -> Option<&[EnumVariant]> {
        match self {
            Self::Enumeration(variants) => Some(variants),
            _ => None,
        }
    }
}

/// One allowed value of an enumeration property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumVariant {
    value: String,
    description: Option<String>,
}

impl EnumVariant {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            description: None,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Wire value, e.g. `admit-all`.
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn doc(&self) -> Option<&str> {
        self.description.as_deref()
    }
}
