//! Core fold engine for javadsl.
//!
//! This crate provides the language-agnostic half of the DSL: a
//! [`Transform`] is a pure function of a read-only context and an
//! accumulator, and [`run_fold`] threads an accumulator through an ordered
//! sequence of them.
//!
//! # Module Organization
//!
//! - [`fold`] - Transforms, bodies, [`run_fold`] and [`group`]
//! - [`indent`] - Indentation unit configuration

pub mod fold;
pub mod indent;

pub use fold::{Body, Transform, group, run_fold};
pub use indent::{Indent, ParseIndentError};
