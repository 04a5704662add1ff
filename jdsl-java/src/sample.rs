//! The demo class printed by the `javadsl` binary.

use crate::{JavaTransform, named_class, variable, with_private, with_static};

/// A class of running statistics fields named `name`.
pub fn sample_class(name: impl Into<String>) -> JavaTransform {
    named_class(
        name,
        vec![
            variable("double", "sum"),
            variable("double", "sumSquares"),
            variable("int", "count"),
            with_private(vec![variable("boolean", "_isDirty")]),
            with_static(vec![variable("int", "INSTANCE_COUNTER")]),
        ],
    )
}

/// The sample class under its default name.
pub fn kattskit() -> JavaTransform {
    sample_class("Kattskit")
}
