//! Core operations.
//!
//! This module contains the business logic for sdkgen commands,
//! separated from CLI argument parsing and output rendering.

pub mod check;
pub mod generate;
pub mod languages;

use std::path::{Path, PathBuf};

use sdkgen_codegen::pipeline::{CompilationContext, Pipeline, SnapshotPlugin};
use sdkgen_schema::Schema;

use crate::failure::{Failure, Stage};

pub use check::check;
pub use generate::{GenerateOptions, generate};
pub use languages::languages;

/// Read and parse a schema file.
fn load_schema(path: &Path) -> Result<Schema, Failure> {
    Schema::from_file(path).map_err(|e| {
        let stage = if e.is_io() {
            Stage::ReadSchema
        } else {
            Stage::ParseSchema
        };
        Failure::diagnostic(stage, *e)
    })
}

/// Validate, lower and analyze `schema`, writing phase snapshots to
/// `snapshot_dir` when given.
fn compile(schema: Schema, snapshot_dir: Option<PathBuf>) -> Result<CompilationContext, Failure> {
    let mut pipeline = Pipeline::new();
    if let Some(dir) = snapshot_dir {
        pipeline = pipeline.plugin(SnapshotPlugin::with_output_dir(dir));
    }
    pipeline
        .run(schema)
        .map_err(|e| Failure::new(Stage::LoadSchema, e))
}

/// Messages of every warning in `ctx`, with their location when known.
fn warnings(ctx: &CompilationContext) -> Vec<String> {
    ctx.warnings()
        .map(|d| match &d.location {
            Some(location) => format!("{}\n  --> {}", d.message, location),
            None => d.message.clone(),
        })
        .collect()
}
