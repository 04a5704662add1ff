//! Java source generation on top of the javadsl fold engine.
//!
//! Every construct here is a [`JavaTransform`]: a function of the current
//! [`JavaContext`] and the output string built so far. Modifier and
//! indentation scopes hand a modified copy of the context to their own body,
//! so an override like [`with_private`] only affects what it wraps.
//!
//! ```
//! use javadsl_java::{named_class, render, variable, with_static};
//!
//! let class = named_class("Counter", vec![
//!     variable("int", "count"),
//!     with_static(vec![variable("int", "TOTAL")]),
//! ]);
//!
//! assert_eq!(
//!     render(&class),
//!     "public class Counter {\n  public int count;\n  public static int TOTAL;\n}"
//! );
//! ```
//!
//! # Module Organization
//!
//! - [`context`] - Formatting state ([`JavaContext`], [`Visibility`])
//! - [`emit`] - Line emission primitive and rendering entry points
//! - [`constructs`] - Blocks, classes, modifier scopes, field declarations
//! - [`statement`] - Inspectable statement tree lowered into transforms
//! - [`sample`] - The demo class

pub mod constructs;
pub mod context;
pub mod emit;
pub mod sample;
pub mod statement;

pub use constructs::{
    block, indent_more, named_class, nested_class, variable, with_private, with_static,
};
pub use context::{JavaContext, Visibility};
pub use emit::{emit_line, render, render_with};
pub use javadsl_core::{Indent, group, run_fold};
pub use sample::{kattskit, sample_class};
pub use statement::Statement;

/// A transform over Java formatting state and the generated source text.
pub type JavaTransform = javadsl_core::Transform<JavaContext, String>;

/// An ordered sequence of [`JavaTransform`]s.
pub type JavaBody = javadsl_core::Body<JavaContext, String>;
