//! Check operation - schema validation.

use std::path::Path;

use sdkgen_codegen::pipeline::Severity;

use super::{compile, load_schema, warnings};
use crate::{
    failure::{Failure, Stage},
    reports::{CheckReport, ResourceLine},
};

/// Execute the check operation.
///
/// Loads the schema and runs the pipeline without generating anything.
pub fn check(schema_path: &Path) -> Result<CheckReport, Failure> {
    let schema = load_schema(schema_path)?;
    let description = schema.description.clone();
    let mut ctx = compile(schema, None)?;
    let warnings = warnings(&ctx);
    let infos = ctx
        .diagnostics
        .iter()
        .filter(|d| d.severity == Severity::Info)
        .map(|d| d.message.clone())
        .collect();

    let package = ctx
        .take_ir()
        .map_err(|e| Failure::new(Stage::LoadSchema, e))?;
    let computed = ctx
        .take_computed()
        .map_err(|e| Failure::new(Stage::LoadSchema, e))?;

    Ok(CheckReport {
        schema_path: schema_path.to_path_buf(),
        package: package.meta.name,
        version: package.meta.version,
        description,
        modules: computed.modules,
        resources: computed
            .resources
            .into_iter()
            .map(|r| ResourceLine {
                token: r.token,
                inputs: r.inputs,
                outputs: r.outputs,
            })
            .collect(),
        warnings,
        infos,
    })
}
