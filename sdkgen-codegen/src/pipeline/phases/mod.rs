//! Built-in pipeline phases.
//!
//! - [`ValidatePhase`] - runs lints and collects diagnostics
//! - [`LowerPhase`] - builds the package IR from the schema
//! - [`AnalyzePhase`] - computes summary data from the IR

mod analyze;
mod lower;
mod validate;

pub use analyze::AnalyzePhase;
pub use lower::{LowerPhase, lower_schema};
pub use validate::{
    DuplicateResourceLint, EmptyDescriptionLint, Lint, LintInfo, PropertyNamingLint,
    SecretOutputLint, ValidatePhase,
};
