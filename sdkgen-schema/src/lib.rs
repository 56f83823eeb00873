//! Resource schema loading for the sdkgen SDK generator.
//!
//! Reads a JSON schema describing a package of resources, checks it, and
//! returns a validated [`Schema`]. Failures are [`miette`] diagnostics that
//! point at the offending part of the file.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod language;
mod options;
mod schema;
mod span;

pub use error::{Error, Result, SourceContext};
pub use language::Language;
pub use options::{LanguageOptions, OptionsFile, OptionsFormat};
pub use schema::{
    ParseContext, PropertyKind, PropertySpec, ResourceSpec, ResourceToken, Schema, parse_schema,
};
