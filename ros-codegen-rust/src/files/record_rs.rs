use std::path::{Path, PathBuf};

use ros7api_codegen::{
    CodeFragment, FileBuilder, ImportCollector, Renderable, TypeMapper,
    schema::{EnumDecl, FieldDecl, OperationDecl, OperationKind, RecordUnit},
};
use ros7api_core::{GENERATED_HEADER, GeneratedFile};

use crate::{
    Enum, Field, Fn, Impl, Param, RustFileBuilder, RustGeneratorOptions, RustTypeMapper,
    SerdeAttr, Struct, Trait, Variant,
    naming::{ID_FIELD, field_name},
};

/// Runtime crate items every record file refers to.
const RUNTIME_SYMBOLS: &[&str] = &["Client", "RecordId", "RequestContext", "Result", "Transport"];

/// One generated file per record: enumerations, resource and update types,
/// and the List/Patch operations.
pub struct RecordRs<'a> {
    unit: &'a RecordUnit,
    options: &'a RustGeneratorOptions,
}

impl<'a> RecordRs<'a> {
    pub fn new(unit: &'a RecordUnit, options: &'a RustGeneratorOptions) -> Self {
        Self { unit, options }
    }

    fn imports(&self) -> ImportCollector {
        let mapper = RustTypeMapper;
        let runtime = self.options.runtime_path.as_str();
        let mut imports = ImportCollector::new();

        imports.add("serde", "Deserialize");
        imports.add("serde", "Serialize");
        for symbol in RUNTIME_SYMBOLS {
            imports.add(runtime, symbol);
        }
        for field in &self.unit.fields {
            if let Some(symbol) = mapper.runtime_symbol(&field.ty) {
                imports.add(runtime, symbol);
            }
        }
        imports
    }

    fn enum_type(decl: &EnumDecl) -> Enum {
        let doc = decl
            .description
            .clone()
            .unwrap_or_else(|| format!("Values of the `{}` property.", decl.property));
        decl.variants.iter().fold(
            Enum::new(&decl.name)
                .doc(doc)
                .attr("allow(non_camel_case_types)")
                .derive("Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize"),
            |e, v| {
                e.variant(
                    Variant::new(&v.name)
                        .doc_opt(v.description.as_deref())
                        .attr(SerdeAttr::new().rename(&v.value).to_string()),
                )
            },
        )
    }

    fn enum_impl(decl: &EnumDecl) -> Impl {
        let mut body = vec!["match self {".to_string()];
        body.extend(
            decl.variants
                .iter()
                .map(|v| format!("    Self::{} => {:?},", v.name, v.value)),
        );
        body.push("}".to_string());

        Impl::new(&decl.name).method(
            Fn::new("as_str")
                .doc("Wire value of this variant.")
                .param(Param::receiver("&self"))
                .returns("&'static str")
                .body(body.join("\n")),
        )
    }

    fn resource_field(field: &FieldDecl) -> Field {
        let mapper = RustTypeMapper;
        let name = field_name(&field.identifier);
        Field::new(&name, mapper.map_type(&field.ty))
            .doc_opt(field.description.as_deref())
            .attr_opt(SerdeAttr::new().rename_if(&field.wire_name, &name).to_attr())
    }

    fn update_field(field: &FieldDecl) -> Field {
        let mapper = RustTypeMapper;
        let name = field_name(&field.identifier);
        Field::new(&name, mapper.map_optional(&field.ty))
            .doc_opt(field.description.as_deref())
            .attr(
                SerdeAttr::new()
                    .rename_if(&field.wire_name, &name)
                    .skip_if_none()
                    .to_string(),
            )
    }

    fn resource_type(&self) -> Struct {
        let unit = self.unit;
        let doc = unit
            .description
            .clone()
            .unwrap_or_else(|| format!("A record of the `{}` menu.", unit.path));
        Struct::new(&unit.type_name)
            .doc(doc)
            .derive("Debug, Clone, PartialEq, Serialize, Deserialize")
            .field(
                Field::new(ID_FIELD, "RecordId")
                    .attr(SerdeAttr::new().rename(".id").to_string()),
            )
            .fields(unit.resource_fields().iter().map(Self::resource_field))
    }

    fn update_type(&self) -> Struct {
        let unit = self.unit;
        Struct::new(&unit.update_name)
            .doc(format!(
                "Partial update of [`{}`].\n\nFields left as `None` are not sent and stay unchanged on the device.",
                unit.type_name
            ))
            .derive("Debug, Clone, Default, PartialEq, Serialize")
            .fields(unit.update_fields().map(Self::update_field))
    }

    /// Operation signature without visibility, async-ness or return type.
    fn operation(&self, op: &OperationDecl) -> Operation {
        let unit = self.unit;
        let signature = Fn::new(format!("{}_{}", unit.module_name, op.kind.name()))
            .param(Param::receiver("&self"))
            .param(Param::new("ctx", "&RequestContext"));
        match op.kind {
            OperationKind::List => Operation {
                signature,
                doc: format!("List every record of `{}`.", op.path),
                output: format!("Vec<{}>", unit.type_name),
                call: format!("self.list(ctx, {:?}).await", op.path),
            },
            OperationKind::Patch => Operation {
                signature: signature
                    .param(Param::new("id", "&RecordId"))
                    .param(Param::new("update", format!("&{}", unit.update_name))),
                doc: format!("Update the record `id` of `{}`.", op.path),
                output: unit.type_name.clone(),
                call: format!("self.patch(ctx, {:?}, id, update).await", op.path),
            },
        }
    }

    /// Inherent methods, only possible inside the runtime crate itself.
    fn inherent_operations(&self) -> Vec<Vec<CodeFragment>> {
        let implementation = self
            .unit
            .operations
            .iter()
            .map(|op| {
                let op = self.operation(op);
                op.signature
                    .doc(op.doc)
                    .async_()
                    .returns(format!("Result<{}>", op.output))
                    .body_line(op.call)
            })
            .fold(Impl::new("Client<T>").generics("T: Transport"), Impl::method);
        vec![implementation.to_fragments()]
    }

    /// An extension trait implemented for `Client<T>`, for downstream crates.
    fn trait_operations(&self) -> Vec<Vec<CodeFragment>> {
        let unit = self.unit;
        let trait_name = format!("{}Api", unit.type_name);

        let mut declaration =
            Trait::new(&trait_name).doc(format!("Operations on `{}`.", unit.path));
        let mut implementation = Impl::new("Client<T>")
            .generics("T: Transport")
            .for_trait(&trait_name);

        for op in &unit.operations {
            let op = self.operation(op);
            declaration = declaration.method(op.signature.clone().doc(op.doc).returns(format!(
                "impl std::future::Future<Output = Result<{}>> + Send",
                op.output
            )));
            implementation = implementation.method(
                op.signature
                    .private()
                    .async_()
                    .returns(format!("Result<{}>", op.output))
                    .body_line(op.call),
            );
        }

        vec![declaration.to_fragments(), implementation.to_fragments()]
    }
}

struct Operation {
    signature: Fn,
    doc: String,
    output: String,
    call: String,
}

impl GeneratedFile for RecordRs<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(format!("{}.rs", self.unit.module_name))
    }

    fn render(&self) -> String {
        let mut items: Vec<Vec<CodeFragment>> = Vec::new();
        for decl in &self.unit.enums {
            items.push(Self::enum_type(decl).to_fragments());
            items.push(Self::enum_impl(decl).to_fragments());
        }
        items.push(self.resource_type().to_fragments());
        items.push(self.update_type().to_fragments());
        items.extend(if self.options.is_runtime_crate() {
            self.inherent_operations()
        } else {
            self.trait_operations()
        });

        items
            .into_iter()
            .fold(FileBuilder::rust().imports(self.imports()), FileBuilder::item)
            .render_rust(GENERATED_HEADER)
    }
}
