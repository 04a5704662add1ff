//! Context-aware transforms folded over an accumulator.

use std::{fmt, sync::Arc};

/// A single DSL statement: a pure function `(context, accumulator) -> accumulator`.
///
/// Transforms are reference counted, so cloning one is cheap and the same
/// value can be placed in several bodies or run against several contexts.
///
/// # Example
///
/// ```
/// use javadsl_core::{Transform, run_fold};
///
/// let push = |s: &'static str| Transform::new(move |_: &(), mut acc: String| {
///     acc.push_str(s);
///     acc
/// });
///
/// let out = run_fold(&(), String::new(), &[push("a"), push("b")]);
/// assert_eq!(out, "ab");
/// ```
pub struct Transform<C, A> {
    f: Arc<dyn Fn(&C, A) -> A + Send + Sync>,
}

/// An ordered sequence of transforms.
pub type Body<C, A> = Vec<Transform<C, A>>;

impl<C, A> Transform<C, A> {
    /// Wrap a closure as a transform.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&C, A) -> A + Send + Sync + 'static,
    {
        Self { f: Arc::new(f) }
    }

    /// The transform that returns its accumulator untouched.
    pub fn identity() -> Self {
        Self::new(|_, acc| acc)
    }

    /// Run this transform once.
    pub fn apply(&self, context: &C, acc: A) -> A {
        (self.f)(context, acc)
    }
}

impl<C, A> Clone for Transform<C, A> {
    fn clone(&self) -> Self {
        Self {
            f: Arc::clone(&self.f),
        }
    }
}

impl<C, A> fmt::Debug for Transform<C, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transform").finish_non_exhaustive()
    }
}

/// Apply `transforms` in order, threading the accumulator through each one.
///
/// The same `context` is handed to every transform. Constructs that need a
/// different context build a modified copy and fold their own body under it.
pub fn run_fold<C, A>(context: &C, initial: A, transforms: &[Transform<C, A>]) -> A {
    tracing::trace!(transforms = transforms.len(), "folding body");
    transforms
        .iter()
        .fold(initial, |acc, transform| transform.apply(context, acc))
}

/// Package a body as a single transform.
pub fn group<C, A>(body: Body<C, A>) -> Transform<C, A>
where
    C: 'static,
    A: 'static,
{
    Transform::new(move |context, acc| run_fold(context, acc, &body))
}
