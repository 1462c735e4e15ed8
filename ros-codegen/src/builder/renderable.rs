//! Code fragments produced by AST nodes.
//!
//! AST nodes describe themselves as a list of fragments;
//! [`CodeBuilder`](super::CodeBuilder) writes those out as indented text.

/// One piece of a generated item.
#[derive(Debug, Clone, PartialEq)]
pub enum CodeFragment {
    /// A line at the current indentation.
    Line(String),
    /// An empty line.
    Blank,
    /// A doc comment, one `///` line per line of text.
    Doc(String),
    /// Fragments one level deeper than the surrounding ones.
    Indented(Vec<CodeFragment>),
    /// `header`, the body one level deeper, then a closing `}`.
    Braced {
        header: String,
        body: Vec<CodeFragment>,
    },
}

impl CodeFragment {
    pub fn line(s: impl Into<String>) -> Self {
        Self::Line(s.into())
    }

    pub fn doc(text: impl Into<String>) -> Self {
        Self::Doc(text.into())
    }

    pub fn indented(fragments: Vec<CodeFragment>) -> Self {
        Self::Indented(fragments)
    }

    pub fn braced(header: impl Into<String>, body: Vec<CodeFragment>) -> Self {
        Self::Braced {
            header: header.into(),
            body,
        }
    }
}

/// An AST node that can be written as code.
pub trait Renderable {
    fn to_fragments(&self) -> Vec<CodeFragment>;
}
