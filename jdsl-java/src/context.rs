//! Formatting state threaded through Java transforms.

use javadsl_core::Indent;

/// Access modifier applied to declarations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Visibility {
    #[default]
    Public,
    Private,
}

impl Visibility {
    /// The Java keyword for this modifier.
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Private => "private",
        }
    }
}

/// Formatting state for one scope of generated Java.
///
/// Scopes never mutate the context they were given. They clone it, change
/// one field, and run their body under the copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JavaContext {
    /// Modifier used by declarations in this scope.
    pub visibility: Visibility,
    /// Whether declarations in this scope are `static`.
    pub is_static: bool,
    /// Text written before each new line: a newline plus the current indentation.
    pub indent_prefix: String,
    /// Unit appended to `indent_prefix` per nesting level.
    pub indent: Indent,
}

impl JavaContext {
    /// Top-level context using the given indentation unit.
    pub fn new(indent: Indent) -> Self {
        Self {
            visibility: Visibility::default(),
            is_static: false,
            indent_prefix: "\n".to_string(),
            indent,
        }
    }

    /// `"static"` inside a static scope, otherwise empty.
    pub fn static_keyword(&self) -> &'static str {
        if self.is_static { "static" } else { "" }
    }

    pub fn visibility_keyword(&self) -> &'static str {
        self.visibility.keyword()
    }

    /// A copy of this context one indentation level deeper.
    pub fn indented(&self) -> Self {
        let mut inner = self.clone();
        inner.indent_prefix.push_str(&self.indent.unit());
        inner
    }
}

impl Default for JavaContext {
    fn default() -> Self {
        Self::new(Indent::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let ctx = JavaContext::default();
        assert_eq!(ctx.visibility, Visibility::Public);
        assert!(!ctx.is_static);
        assert_eq!(ctx.indent_prefix, "\n");
        assert_eq!(ctx.indent, Indent::Spaces(2));
    }

    #[test]
    fn test_keywords() {
        let mut ctx = JavaContext::default();
        assert_eq!(ctx.visibility_keyword(), "public");
        assert_eq!(ctx.static_keyword(), "");

        ctx.visibility = Visibility::Private;
        ctx.is_static = true;
        assert_eq!(ctx.visibility_keyword(), "private");
        assert_eq!(ctx.static_keyword(), "static");
    }

    #[test]
    fn test_indented_leaves_original() {
        let ctx = JavaContext::default();
        let inner = ctx.indented().indented();
        assert_eq!(inner.indent_prefix, "\n    ");
        assert_eq!(ctx.indent_prefix, "\n");
    }

    #[test]
    fn test_indented_with_tabs() {
        let ctx = JavaContext::new(Indent::Tab);
        assert_eq!(ctx.indented().indent_prefix, "\n\t");
    }
}
