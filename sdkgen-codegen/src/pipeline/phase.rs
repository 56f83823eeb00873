//! Pipeline phase trait.

use eyre::Result;

use super::CompilationContext;

#[derive(Debug, Clone)]
pub struct PhaseInfo {
    pub name: &'static str,
    pub description: &'static str,
}

/// A step of the compilation pipeline.
///
/// Built-in phases:
/// - `ValidatePhase` - runs lints over the schema
/// - `LowerPhase` - builds the package IR
/// - `AnalyzePhase` - computes summary data from the IR
///
/// Fatal problems are returned as errors; anything a user should merely see
/// goes into `ctx.diagnostics`.
pub trait Phase: Send + Sync {
    /// Used in diagnostics, plugin hooks and snapshot file names.
    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str;

    fn run(&self, ctx: &mut CompilationContext) -> Result<()>;

    fn info(&self) -> PhaseInfo {
        PhaseInfo {
            name: self.name(),
            description: self.description(),
        }
    }
}
