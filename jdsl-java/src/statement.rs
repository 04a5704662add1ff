//! Inspectable statement tree for the Java DSL.
//!
//! Combinators build opaque closures. A [`Statement`] describes the same
//! program as data, so it can be examined (compared, counted, walked)
//! before being lowered into a [`JavaTransform`] and run.

use javadsl_core::group;

use crate::{
    JavaBody, JavaTransform, block, emit_line, indent_more, named_class, nested_class, variable,
    with_private, with_static,
};

/// One DSL statement, mirroring the combinators of this crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// A raw line of space-joined parts, see [`emit_line`].
    Line { newline: bool, parts: Vec<String> },
    /// A body run as a single statement.
    Group(Vec<Statement>),
    /// A body run one indentation level deeper.
    Indent(Vec<Statement>),
    /// A brace block continuing the current line.
    Block(Vec<Statement>),
    /// A top-level class declaration.
    Class { name: String, body: Vec<Statement> },
    /// An inner class declaration on its own line.
    NestedClass { name: String, body: Vec<Statement> },
    /// A static modifier scope.
    Static(Vec<Statement>),
    /// A private modifier scope.
    Private(Vec<Statement>),
    /// A field declaration.
    Variable { ty: String, name: String },
}

impl Statement {
    pub fn line<I, S>(newline: bool, parts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Line {
            newline,
            parts: parts.into_iter().map(Into::into).collect(),
        }
    }

    pub fn class(name: impl Into<String>, body: Vec<Statement>) -> Self {
        Self::Class {
            name: name.into(),
            body,
        }
    }

    pub fn nested_class(name: impl Into<String>, body: Vec<Statement>) -> Self {
        Self::NestedClass {
            name: name.into(),
            body,
        }
    }

    pub fn variable(ty: impl Into<String>, name: impl Into<String>) -> Self {
        Self::Variable {
            ty: ty.into(),
            name: name.into(),
        }
    }

    /// Direct child statements, empty for leaves.
    pub fn children(&self) -> &[Statement] {
        match self {
            Self::Line { .. } | Self::Variable { .. } => &[],
            Self::Group(body)
            | Self::Indent(body)
            | Self::Block(body)
            | Self::Static(body)
            | Self::Private(body)
            | Self::Class { body, .. }
            | Self::NestedClass { body, .. } => body,
        }
    }

    /// Number of field declarations anywhere in this tree.
    pub fn field_count(&self) -> usize {
        let own = usize::from(matches!(self, Self::Variable { .. }));
        own + self.children().iter().map(Self::field_count).sum::<usize>()
    }

    /// Names of every class declared in this tree, in source order.
    pub fn class_names(&self) -> Vec<&str> {
        let mut names = Vec::new();
        self.collect_class_names(&mut names);
        names
    }

    fn collect_class_names<'a>(&'a self, names: &mut Vec<&'a str>) {
        if let Self::Class { name, .. } | Self::NestedClass { name, .. } = self {
            names.push(name);
        }
        for child in self.children() {
            child.collect_class_names(names);
        }
    }

    /// Build the transform this statement describes.
    pub fn lower(&self) -> JavaTransform {
        match self {
            Self::Line { newline, parts } => emit_line(*newline, parts.clone()),
            Self::Group(body) => group(lower_all(body)),
            Self::Indent(body) => indent_more(lower_all(body)),
            Self::Block(body) => block(lower_all(body)),
            Self::Class { name, body } => named_class(name.clone(), lower_all(body)),
            Self::NestedClass { name, body } => nested_class(name.clone(), lower_all(body)),
            Self::Static(body) => with_static(lower_all(body)),
            Self::Private(body) => with_private(lower_all(body)),
            Self::Variable { ty, name } => variable(ty.clone(), name.clone()),
        }
    }
}

/// Lower a sequence of statements into a body.
pub fn lower_all(statements: &[Statement]) -> JavaBody {
    statements.iter().map(Statement::lower).collect()
}
