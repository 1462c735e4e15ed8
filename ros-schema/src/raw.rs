//! Serde model of the TOML schema description and its resolution into
//! [`SchemaNode`]s.

use std::collections::{BTreeMap, HashMap};

use ros7api_core::{to_type_name, to_variant_name};
use serde::Deserialize;
use toml::Spanned;

use crate::{
    EnumVariant, PropertyDef, PropertyType, RecordDef, Result, SchemaNode, validate::ParseContext,
};

/// A menu table: an optional record plus named sub-menus.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct RawMenu {
    #[serde(default)]
    record: Option<RawRecord>,

    #[serde(default)]
    menus: BTreeMap<String, RawMenu>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawRecord {
    description: Option<String>,

    #[serde(default)]
    properties: Vec<RawProperty>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
struct RawProperty {
    /// Wire name, e.g. `vlan-ids`
    name: Spanned<String>,

    /// Generated identifier override
    ident: Option<Spanned<String>>,

    /// Type tag, kept as a string so unknown tags get a dedicated diagnostic
    #[serde(rename = "type")]
    ty: Spanned<String>,

    #[serde(default)]
    read_only: bool,

    description: Option<String>,

    #[serde(default)]
    variants: Vec<RawVariant>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawVariant {
    value: Spanned<String>,
    description: Option<String>,
}

impl RawMenu {
    /// Resolve this menu (and everything below it) into a schema node.
    pub(crate) fn resolve(self, ctx: &ParseContext<'_>, name: &str) -> Result<SchemaNode> {
        let path = ctx.path_string();

        let record = match self.record {
            Some(record) => {
                if ctx.segments().is_empty() {
                    return Err(ctx.validation_error("the schema root cannot carry a record", None));
                }
                let type_name = to_type_name(&path);
                ctx.validate_identifier(&type_name, "record type", None)?;
                Some(record.resolve(ctx)?)
            }
            None => None,
        };

        let mut children = BTreeMap::new();
        for (child_name, menu) in self.menus {
            if child_name.is_empty() || child_name.contains('/') {
                return Err(ctx.validation_error(
                    format!("invalid menu name '{}' under '{}'", child_name, path),
                    None,
                ));
            }
            let node = menu.resolve(&ctx.push(&child_name), &child_name)?;
            children.insert(child_name, node);
        }

        Ok(SchemaNode::new(name, path, record, children))
    }
}

impl RawRecord {
    fn resolve(self, ctx: &ParseContext<'_>) -> Result<RecordDef> {
        let mut record = RecordDef::new();
        if let Some(description) = self.description {
            record = record.description(description);
        }
        for property in self.properties {
            record = record.property(property.resolve(ctx)?);
        }
        Ok(record)
    }
}

impl RawProperty {
    fn resolve(self, ctx: &ParseContext<'_>) -> Result<PropertyDef> {
        let name_span = self.name.span();
        let name = self.name.into_inner();
        if name.is_empty() {
            return Err(ctx.validation_error("property name cannot be empty", Some(name_span)));
        }

        let ty_span = self.ty.span();
        let tag = self.ty.into_inner();
        let is_enum = tag == "enumeration";

        if !is_enum && !self.variants.is_empty() {
            return Err(ctx.validation_error(
                format!("property '{}' of type '{}' cannot declare variants", name, tag),
                Some(ty_span),
            ));
        }

        let mut variants = Vec::with_capacity(self.variants.len());
        let mut variant_names: HashMap<String, String> = HashMap::new();
        for raw in self.variants {
            let value_span = raw.value.span();
            let value = raw.value.into_inner();
            let variant_name = to_variant_name(&value);
            ctx.validate_identifier(&variant_name, "enumeration variant", Some(value_span.clone()))?;
            if let Some(previous) = variant_names.get(&variant_name) {
                return Err(ctx.validation_error(
                    format!(
                        "enumeration property '{}' has values '{}' and '{}' that both map to variant '{}'",
                        name, previous, value, variant_name
                    ),
                    Some(value_span),
                ));
            }
            variant_names.insert(variant_name, value.clone());
            let mut variant = EnumVariant::new(value);
            if let Some(description) = raw.description {
                variant = variant.description(description);
            }
            variants.push(variant);
        }

        if is_enum && variants.is_empty() {
            return Err(ctx.validation_error(
                format!("enumeration property '{}' declares no variants", name),
                Some(ty_span),
            ));
        }

        let ty = PropertyType::from_tag(&tag, variants)
            .ok_or_else(|| ctx.unknown_type_error(&name, &tag, ty_span.clone()))?;

        let mut property = PropertyDef::new(name, ty);
        match self.ident {
            Some(ident) => {
                let span = ident.span();
                let ident = ident.into_inner();
                ctx.validate_identifier(&ident, "property", Some(span))?;
                property = property.ident(ident);
            }
            None => {
                ctx.validate_identifier(property.identifier(), "property", Some(name_span))?;
            }
        }
        if self.read_only {
            property = property.read_only();
        }
        if let Some(description) = self.description {
            property = property.description(description);
        }
        Ok(property)
    }
}
