//! Rust trait builder.

use ros7api_codegen::builder::{CodeFragment, Renderable};

use super::{Fn, impls::methods_to_fragments};

/// Builder for Rust trait definitions. Methods are rendered as declarations.
#[derive(Debug, Clone)]
pub struct Trait {
    name: String,
    doc: Option<String>,
    methods: Vec<Fn>,
}

impl Trait {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            methods: Vec::new(),
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn method(mut self, method: Fn) -> Self {
        self.methods.push(method.private().declaration());
        self
    }
}

impl Renderable for Trait {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();
        if let Some(doc) = &self.doc {
            fragments.push(CodeFragment::doc(doc.clone()));
        }
        fragments.push(CodeFragment::braced(
            format!("pub trait {} {{", self.name),
            methods_to_fragments(&self.methods),
        ));
        fragments
    }
}
