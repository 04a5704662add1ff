//! Structural constructs: indentation, brace blocks, classes, modifier
//! scopes and field declarations.

use javadsl_core::{Transform, group, run_fold};

use crate::{
    JavaBody, JavaContext, JavaTransform, Visibility,
    emit::{emit_line, write_line},
};

/// Run `body` under a copy of the context changed by `adjust`.
fn scoped<F>(body: JavaBody, adjust: F) -> JavaTransform
where
    F: Fn(&mut JavaContext) + Send + Sync + 'static,
{
    Transform::new(move |ctx: &JavaContext, acc: String| {
        let mut inner = ctx.clone();
        adjust(&mut inner);
        run_fold(&inner, acc, &body)
    })
}

/// Run `body` one indentation level deeper.
pub fn indent_more(body: JavaBody) -> JavaTransform {
    Transform::new(move |ctx: &JavaContext, acc: String| run_fold(&ctx.indented(), acc, &body))
}

/// Brace block continuing the current line: ` {`, the indented body, then
/// `}` on its own line at the outer indentation.
pub fn block(body: JavaBody) -> JavaTransform {
    group(vec![
        emit_line(false, [" {"]),
        indent_more(body),
        emit_line(true, ["}"]),
    ])
}

/// Top-level class declaration: `<visibility> class <name> { ... }`.
///
/// The header is written without a leading line break, so it continues
/// whatever precedes it. Use [`nested_class`] inside a class body.
pub fn named_class(name: impl Into<String>, body: JavaBody) -> JavaTransform {
    let name = name.into();
    let block = block(body);
    Transform::new(move |ctx: &JavaContext, acc: String| {
        let acc = write_line(ctx, acc, false, &[ctx.visibility_keyword(), "class", name.as_str()]);
        block.apply(ctx, acc)
    })
}

/// Inner class declaration on its own line, honoring the static scope:
/// `<visibility> <static?> class <name> { ... }`.
pub fn nested_class(name: impl Into<String>, body: JavaBody) -> JavaTransform {
    let name = name.into();
    let block = block(body);
    Transform::new(move |ctx: &JavaContext, acc: String| {
        let header = [
            ctx.visibility_keyword(),
            ctx.static_keyword(),
            "class",
            name.as_str(),
        ];
        let acc = write_line(ctx, acc, true, &header);
        block.apply(ctx, acc)
    })
}

/// Declarations in `body` are `static`.
pub fn with_static(body: JavaBody) -> JavaTransform {
    scoped(body, |ctx| ctx.is_static = true)
}

/// Declarations in `body` are `private`.
pub fn with_private(body: JavaBody) -> JavaTransform {
    scoped(body, |ctx| ctx.visibility = Visibility::Private)
}

/// Field declaration on its own line: `<visibility> <static?> <type> <name>;`.
///
/// Modifiers come from the enclosing scopes. `ty` and `name` are written
/// verbatim.
pub fn variable(ty: impl Into<String>, name: impl Into<String>) -> JavaTransform {
    let ty = ty.into();
    let declarator = format!("{};", name.into());
    Transform::new(move |ctx: &JavaContext, acc: String| {
        let parts = [
            ctx.visibility_keyword(),
            ctx.static_keyword(),
            ty.as_str(),
            declarator.as_str(),
        ];
        write_line(ctx, acc, true, &parts)
    })
}
