//! Lint trait for schema validation.

use sdkgen_schema::Schema;

use crate::pipeline::Diagnostic;

#[derive(Debug, Clone)]
pub struct LintInfo {
    pub name: &'static str,
    pub description: &'static str,
}

/// A check over the validated schema.
///
/// Lints catch problems the loader accepts but that would surprise users of
/// the generated SDKs. They report through diagnostics and never fail
/// directly.
pub trait Lint: Send + Sync {
    /// Kebab-case identifier, used as the diagnostic source.
    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str;

    fn check(&self, schema: &Schema, diagnostics: &mut Vec<Diagnostic>);

    fn info(&self) -> LintInfo {
        LintInfo {
            name: self.name(),
            description: self.description(),
        }
    }
}
