//! Rust impl block builder.

use ros7api_codegen::builder::{CodeFragment, Renderable};

use super::Fn;

/// Builder for Rust impl blocks.
#[derive(Debug, Clone)]
pub struct Impl {
    type_name: String,
    generics: Option<String>,
    trait_name: Option<String>,
    methods: Vec<Fn>,
}

impl Impl {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            generics: None,
            trait_name: None,
            methods: Vec::new(),
        }
    }

    /// Declare generic parameters, e.g. `T: Transport` for `impl<T: Transport>`.
    pub fn generics(mut self, generics: impl Into<String>) -> Self {
        self.generics = Some(generics.into());
        self
    }

    /// Create an impl block for a trait.
    pub fn for_trait(mut self, trait_name: impl Into<String>) -> Self {
        self.trait_name = Some(trait_name.into());
        self
    }

    pub fn method(mut self, method: Fn) -> Self {
        self.methods.push(method);
        self
    }

    fn format_header(&self) -> String {
        let generics = match &self.generics {
            Some(g) => format!("<{}>", g),
            None => String::new(),
        };
        match &self.trait_name {
            Some(trait_name) => format!(
                "impl{} {} for {} {{",
                generics, trait_name, self.type_name
            ),
            None => format!("impl{} {} {{", generics, self.type_name),
        }
    }
}

/// Methods separated by blank lines.
pub(crate) fn methods_to_fragments(methods: &[Fn]) -> Vec<CodeFragment> {
    methods
        .iter()
        .enumerate()
        .flat_map(|(i, method)| {
            let mut fragments = Vec::new();
            if i > 0 {
                fragments.push(CodeFragment::Blank);
            }
            fragments.extend(method.to_fragments());
            fragments
        })
        .collect()
}

impl Renderable for Impl {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::braced(
            self.format_header(),
            methods_to_fragments(&self.methods),
        )]
    }
}
