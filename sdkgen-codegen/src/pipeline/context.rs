//! Compilation context passed through pipeline phases.

use eyre::{Result, eyre};
use sdkgen_ir::Package;
use sdkgen_schema::Schema;

use super::diagnostic::Diagnostic;
use crate::analysis::ComputedData;

/// State shared by every phase of one compilation.
#[derive(Debug)]
pub struct CompilationContext {
    /// The validated schema being compiled.
    pub schema: Schema,
    /// The lowered package, set by the lower phase.
    pub ir: Option<Package>,
    /// Analysis results, set by the analyze phase.
    pub computed: Option<ComputedData>,
    pub diagnostics: Vec<Diagnostic>,
}

impl CompilationContext {
    pub fn new(schema: Schema) -> Self {
        Self {
            schema,
            ir: None,
            computed: None,
            diagnostics: Vec::new(),
        }
    }

    pub fn has_errors(&self) -> bool {
        self.errors().next().is_some()
    }

    pub fn has_warnings(&self) -> bool {
        self.warnings().next().is_some()
    }

    pub fn error_count(&self) -> usize {
        self.errors().count()
    }

    pub fn warning_count(&self) -> usize {
        self.warnings().count()
    }

    pub fn add_error(&mut self, phase: &str, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::error(phase, message));
    }

    pub fn add_warning(&mut self, phase: &str, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::warning(phase, message));
    }

    pub fn add_info(&mut self, phase: &str, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::info(phase, message));
    }

    pub fn add_diagnostic(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.severity.is_error())
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.severity.is_warning())
    }

    /// Take the lowered package out of the context.
    pub fn take_ir(&mut self) -> Result<Package> {
        self.ir
            .take()
            .ok_or_else(|| eyre!("package IR not set, the lower phase has not run"))
    }

    /// Take the analysis results out of the context.
    pub fn take_computed(&mut self) -> Result<ComputedData> {
        self.computed
            .take()
            .ok_or_else(|| eyre!("computed data not set, the analyze phase has not run"))
    }
}
