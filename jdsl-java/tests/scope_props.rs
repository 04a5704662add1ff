//! Property-based tests for line joining and scope isolation.

use javadsl_java::{
    JavaContext, JavaTransform, emit_line, group, indent_more, render, variable, with_private,
    with_static,
};
use proptest::prelude::*;

/// Parts drawn from a small alphabet, with empty strings well represented.
fn part_strategy() -> impl Strategy<Value = String> {
    prop_oneof![Just(String::new()), "[a-zA-Z_;{}]{1,6}"]
}

#[derive(Debug, Clone, Copy)]
enum Scope {
    Static,
    Private,
    Indent,
}

fn scope_strategy() -> impl Strategy<Value = Scope> {
    prop_oneof![Just(Scope::Static), Just(Scope::Private), Just(Scope::Indent)]
}

fn wrap(scope: Scope, body: Vec<JavaTransform>) -> JavaTransform {
    match scope {
        Scope::Static => with_static(body),
        Scope::Private => with_private(body),
        Scope::Indent => indent_more(body),
    }
}

proptest! {
    #[test]
    fn empty_parts_are_dropped(newline in any::<bool>(), parts in prop::collection::vec(part_strategy(), 0..8)) {
        let kept: Vec<String> = parts.iter().filter(|p| !p.is_empty()).cloned().collect();
        prop_assert_eq!(
            render(&emit_line(newline, parts)),
            render(&emit_line(newline, kept))
        );
    }

    #[test]
    fn joined_parts_have_no_double_spaces(parts in prop::collection::vec(part_strategy(), 0..8)) {
        let out = render(&emit_line(false, parts));
        prop_assert!(!out.contains("  "));
        prop_assert!(!out.starts_with(' ') && !out.ends_with(' '));
    }

    #[test]
    fn scopes_never_leak(scopes in prop::collection::vec(scope_strategy(), 1..6)) {
        let inner = scopes
            .iter()
            .rev()
            .fold(variable("int", "x"), |body, scope| wrap(*scope, vec![body]));
        let program = group(vec![inner, variable("int", "after")]);
        let out = render(&program);
        prop_assert!(out.ends_with("\npublic int after;"));
    }

    #[test]
    fn nested_modifiers_keep_keyword_order(scopes in prop::collection::vec(scope_strategy(), 1..6)) {
        let inner = scopes
            .iter()
            .rev()
            .fold(variable("int", "x"), |body, scope| wrap(*scope, vec![body]));
        let out = render(&inner);
        let is_private = scopes.iter().any(|s| matches!(s, Scope::Private));
        let is_static = scopes.iter().any(|s| matches!(s, Scope::Static));
        let depth = scopes.iter().filter(|s| matches!(s, Scope::Indent)).count();
        let mut ctx = JavaContext::default();
        for _ in 0..depth {
            ctx = ctx.indented();
        }
        let expected = [
            ctx.indent_prefix.clone(),
            [
                if is_private { "private" } else { "public" },
                if is_static { "static" } else { "" },
                "int",
                "x;",
            ]
            .iter()
            .filter(|p| !p.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join(" "),
        ]
        .concat();
        prop_assert_eq!(out, expected);
    }
}
