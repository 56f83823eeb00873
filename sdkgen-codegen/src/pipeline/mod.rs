//! Compilation pipeline from a loaded schema to backend-ready IR.
//!
//! [`Pipeline`] runs three built-in phases (validate, lower, analyze) followed
//! by any user phases, calling [`Plugin`] hooks around each one. Lints record
//! [`Diagnostic`]s in the shared [`CompilationContext`]; an error diagnostic
//! stops the pipeline after validation.
//!
//! ```
//! use sdkgen_codegen::pipeline::Pipeline;
//! use sdkgen_schema::Schema;
//!
//! let schema: Schema = r#"{"name": "openai", "resources": {"File": {}}}"#.parse().unwrap();
//! let mut ctx = Pipeline::new().run(schema).unwrap();
//!
//! let package = ctx.take_ir().unwrap();
//! assert_eq!(package.resources[0].token, "openai:index:File");
//! ```

mod context;
mod diagnostic;
mod phase;
pub mod phases;
mod plugin;
mod runner;
mod snapshot;

pub use context::CompilationContext;
pub use diagnostic::{Diagnostic, Severity};
pub use phase::{Phase, PhaseInfo};
pub use plugin::Plugin;
pub use runner::Pipeline;
pub use snapshot::{PhaseSnapshot, SnapshotPlugin};
