//! Line emission and rendering entry points.

use javadsl_core::{Transform, run_fold};

use crate::{JavaContext, JavaTransform};

/// Emit one line of space-separated parts.
///
/// When `prepend_newline` is set the context's `indent_prefix` is written
/// first, which both breaks the line and indents it. Empty parts are
/// skipped, so an empty `static` keyword never leaves a double space. No
/// terminator is added.
pub fn emit_line<I, S>(prepend_newline: bool, parts: I) -> JavaTransform
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let parts: Vec<String> = parts.into_iter().map(Into::into).collect();
    Transform::new(move |ctx: &JavaContext, acc: String| {
        let parts: Vec<&str> = parts.iter().map(String::as_str).collect();
        write_line(ctx, acc, prepend_newline, &parts)
    })
}

/// Append a line to `acc` under `ctx`. Shared by every construct that needs
/// context-dependent parts.
pub(crate) fn write_line(
    ctx: &JavaContext,
    mut acc: String,
    prepend_newline: bool,
    parts: &[&str],
) -> String {
    if prepend_newline {
        acc.push_str(&ctx.indent_prefix);
    }
    let mut first = true;
    for part in parts.iter().filter(|p| !p.is_empty()) {
        if !first {
            acc.push(' ');
        }
        acc.push_str(part);
        first = false;
    }
    acc
}

/// Run a transform against the default top-level context and an empty string.
pub fn render(transform: &JavaTransform) -> String {
    render_with(&JavaContext::default(), transform)
}

/// Run a transform against a caller-supplied context and an empty string.
pub fn render_with(ctx: &JavaContext, transform: &JavaTransform) -> String {
    let source = run_fold(ctx, String::new(), std::slice::from_ref(transform));
    tracing::debug!(bytes = source.len(), "rendered java source");
    source
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(t: &JavaTransform, acc: &str) -> String {
        t.apply(&JavaContext::default(), acc.to_string())
    }

    #[test]
    fn test_joins_parts_with_single_space() {
        assert_eq!(run(&emit_line(false, ["a", "b", "c"]), ">"), ">a b c");
    }

    #[test]
    fn test_prepends_indent_prefix() {
        let ctx = JavaContext::default().indented();
        let out = emit_line(true, ["x"]).apply(&ctx, "head".to_string());
        assert_eq!(out, "head\n  x");
    }

    #[test]
    fn test_skips_empty_parts() {
        let with_empty = emit_line(true, ["", "public", "", "int", "x", ""]);
        let without = emit_line(true, ["public", "int", "x"]);
        assert_eq!(run(&with_empty, ""), run(&without, ""));
        assert_eq!(run(&with_empty, ""), "\npublic int x");
    }

    #[test]
    fn test_all_empty_parts_only_write_prefix() {
        assert_eq!(run(&emit_line(true, ["", ""]), "a"), "a\n");
        assert_eq!(run(&emit_line(false, [""]), "a"), "a");
        assert_eq!(run(&emit_line(true, Vec::<String>::new()), "a"), "a\n");
    }

    #[test]
    fn test_never_adds_terminator() {
        assert_eq!(run(&emit_line(false, ["}"]), ""), "}");
    }

    #[test]
    fn test_render_starts_from_empty() {
        assert_eq!(render(&emit_line(false, ["hello"])), "hello");
    }

    #[test]
    fn test_render_with_custom_context() {
        let ctx = JavaContext::default().indented();
        assert_eq!(render_with(&ctx, &emit_line(true, ["x"])), "\n  x");
    }
}
