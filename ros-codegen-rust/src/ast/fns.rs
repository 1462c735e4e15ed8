//! Rust function builder.

use ros7api_codegen::builder::{CodeFragment, Renderable};

/// Signatures longer than this are split one parameter per line.
const MAX_SIGNATURE_WIDTH: usize = 92;

/// A parameter in a Rust function.
#[derive(Debug, Clone)]
pub struct Param {
    pub name: String,
    pub ty: String,
}

impl Param {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }

    /// A receiver such as `&self`.
    pub fn receiver(receiver: impl Into<String>) -> Self {
        Self::new(receiver, "")
    }

    fn render(&self) -> String {
        if self.ty.is_empty() {
            self.name.clone()
        } else {
            format!("{}: {}", self.name, self.ty)
        }
    }
}

/// Builder for Rust functions.
#[derive(Debug, Clone)]
pub struct Fn {
    name: String,
    doc: Option<String>,
    is_public: bool,
    is_async: bool,
    params: Vec<Param>,
    return_type: Option<String>,
    body: Vec<String>,
    declaration: bool,
}

impl Fn {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            is_public: true,
            is_async: false,
            params: Vec::new(),
            return_type: None,
            body: Vec::new(),
            declaration: false,
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn private(mut self) -> Self {
        self.is_public = false;
        self
    }

    pub fn async_(mut self) -> Self {
        self.is_async = true;
        self
    }

    /// Render only the signature followed by `;` (trait method declarations).
    pub fn declaration(mut self) -> Self {
        self.declaration = true;
        self
    }

    pub fn param(mut self, param: Param) -> Self {
        self.params.push(param);
        self
    }

    pub fn returns(mut self, ty: impl Into<String>) -> Self {
        self.return_type = Some(ty.into());
        self
    }

    /// Add a line to the function body.
    pub fn body_line(mut self, line: impl Into<String>) -> Self {
        self.body.push(line.into());
        self
    }

    /// Add raw body content (can contain multiple lines).
    pub fn body(mut self, content: impl Into<String>) -> Self {
        for line in content.into().lines() {
            self.body.push(line.to_string());
        }
        self
    }

    fn prefix(&self) -> String {
        let vis = if self.is_public { "pub " } else { "" };
        let async_kw = if self.is_async { "async " } else { "" };
        format!("{}{}fn {}(", vis, async_kw, self.name)
    }

    fn suffix(&self) -> String {
        let ret = match &self.return_type {
            Some(ret) => format!(" -> {}", ret),
            None => String::new(),
        };
        let end = if self.declaration { ";" } else { " {" };
        format!("){}{}", ret, end)
    }

    fn signature_fragments(&self) -> Vec<CodeFragment> {
        let params: Vec<String> = self.params.iter().map(Param::render).collect();
        let one_line = format!("{}{}{}", self.prefix(), params.join(", "), self.suffix());
        if one_line.len() <= MAX_SIGNATURE_WIDTH || params.is_empty() {
            return vec![CodeFragment::line(one_line)];
        }

        vec![
            CodeFragment::line(self.prefix()),
            CodeFragment::indented(
                params
                    .into_iter()
                    .map(|p| CodeFragment::line(format!("{},", p)))
                    .collect(),
            ),
            CodeFragment::line(self.suffix()),
        ]
    }
}

impl Renderable for Fn {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();

        if let Some(doc) = &self.doc {
            fragments.push(CodeFragment::doc(doc.clone()));
        }

        fragments.extend(self.signature_fragments());
        if !self.declaration {
            fragments.push(CodeFragment::indented(
                self.body.iter().map(CodeFragment::line).collect(),
            ));
            fragments.push(CodeFragment::line("}"));
        }

        fragments
    }
}
