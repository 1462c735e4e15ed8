//! Writes code fragments out as indented source text.

use super::{CodeFragment, Renderable};

/// Indentation unit of generated Rust code (rustfmt default).
pub const RUST_INDENT: &str = "    ";

/// Accumulates indented lines of generated code.
///
/// ```
/// use ros7api_codegen::{CodeBuilder, CodeFragment, Renderable};
///
/// struct Unit;
///
/// impl Renderable for Unit {
///     fn to_fragments(&self) -> Vec<CodeFragment> {
///         vec![CodeFragment::braced(
///             "fn main() {",
///             vec![CodeFragment::line("run();")],
///         )]
///     }
/// }
///
/// let code = CodeBuilder::rust().render(&Unit).build();
/// assert_eq!(code, "fn main() {\n    run();\n}\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent: &'static str,
    depth: usize,
    buffer: String,
}

impl CodeBuilder {
    pub fn new(indent: &'static str) -> Self {
        Self {
            indent,
            depth: 0,
            buffer: String::new(),
        }
    }

    pub fn rust() -> Self {
        Self::new(RUST_INDENT)
    }

    pub fn render(self, node: &impl Renderable) -> Self {
        self.fragments(node.to_fragments())
    }

    pub fn fragments(mut self, fragments: impl IntoIterator<Item = CodeFragment>) -> Self {
        for fragment in fragments {
            self.write(fragment);
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn build(self) -> String {
        self.buffer
    }

    fn write(&mut self, fragment: CodeFragment) {
        match fragment {
            CodeFragment::Line(s) => self.write_line(&s),
            CodeFragment::Blank => self.buffer.push('\n'),
            CodeFragment::Doc(text) => {
                for line in text.lines() {
                    if line.is_empty() {
                        self.write_line("///");
                    } else {
                        self.write_line(&format!("/// {}", line));
                    }
                }
            }
            CodeFragment::Indented(body) => self.write_nested(body),
            CodeFragment::Braced { header, body } => {
                self.write_line(&header);
                self.write_nested(body);
                self.write_line("}");
            }
        }
    }

    fn write_nested(&mut self, body: Vec<CodeFragment>) {
        self.depth += 1;
        for fragment in body {
            self.write(fragment);
        }
        self.depth -= 1;
    }

    fn write_line(&mut self, s: &str) {
        for _ in 0..self.depth {
            self.buffer.push_str(self.indent);
        }
        self.buffer.push_str(s);
        self.buffer.push('\n');
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::rust()
    }
}
