//! Validate phase: runs lints over the schema.

mod lint;
mod lints;

use eyre::{Result, bail};
pub use lint::{Lint, LintInfo};
pub use lints::{DuplicateResourceLint, EmptyDescriptionLint, PropertyNamingLint, SecretOutputLint};

use crate::pipeline::{CompilationContext, Phase};

/// Runs a configurable set of lints. Any error diagnostic fails the phase;
/// warnings are logged and kept in the context.
pub struct ValidatePhase {
    lints: Vec<Box<dyn Lint>>,
}

impl ValidatePhase {
    /// The default lint set.
    pub fn new() -> Self {
        Self {
            lints: vec![
                Box::new(DuplicateResourceLint),
                Box::new(EmptyDescriptionLint),
                Box::new(PropertyNamingLint),
                Box::new(SecretOutputLint),
            ],
        }
    }

    /// A validate phase with no lints.
    pub fn empty() -> Self {
        Self { lints: Vec::new() }
    }

    pub fn with_lint(mut self, lint: impl Lint + 'static) -> Self {
        self.lints.push(Box::new(lint));
        self
    }

    pub fn lint_names(&self) -> Vec<&'static str> {
        self.lints.iter().map(|l| l.name()).collect()
    }

    pub fn lint_info(&self) -> Vec<LintInfo> {
        self.lints.iter().map(|l| l.info()).collect()
    }
}

impl Default for ValidatePhase {
    fn default() -> Self {
        Self::new()
    }
}

impl Phase for ValidatePhase {
    fn name(&self) -> &'static str {
        "validate"
    }

    fn description(&self) -> &'static str {
        "Lint the schema and collect diagnostics"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        let start = ctx.diagnostics.len();
        for lint in &self.lints {
            lint.check(&ctx.schema, &mut ctx.diagnostics);
        }

        for diagnostic in &ctx.diagnostics[start..] {
            if diagnostic.severity.is_warning() {
                tracing::debug!(lint = %diagnostic.phase, "{}", diagnostic);
            }
        }

        if ctx.has_errors() {
            let errors: Vec<String> = ctx.errors().map(|d| format!("  {}", d)).collect();
            bail!(
                "validation failed with {} error(s):\n{}",
                errors.len(),
                errors.join("\n")
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::{
        io,
        sync::{Arc, Mutex},
    };

    use sdkgen_schema::Schema;

    use super::*;
    use crate::pipeline::Diagnostic;

    struct AlwaysError;

    impl Lint for AlwaysError {
        fn name(&self) -> &'static str {
            "always-error"
        }

        fn description(&self) -> &'static str {
            "Always produces an error"
        }

        fn check(&self, _schema: &Schema, diagnostics: &mut Vec<Diagnostic>) {
            diagnostics.push(Diagnostic::error(self.name(), "forced error").at("resources"));
        }
    }

    fn context(src: &str) -> CompilationContext {
        CompilationContext::new(src.parse().unwrap())
    }

    #[test]
    fn test_errors_fail_the_phase() {
        let mut ctx = context(r#"{"name": "openai"}"#);
        let err = ValidatePhase::empty()
            .with_lint(AlwaysError)
            .run(&mut ctx)
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "validation failed with 1 error(s):\n  error: forced error (at resources)"
        );
        assert!(ctx.has_errors());
    }

    #[test]
    fn test_warnings_allowed() {
        let mut ctx = context(r#"{"name": "openai", "resources": {"File": {}}}"#);
        ValidatePhase::empty()
            .with_lint(EmptyDescriptionLint)
            .run(&mut ctx)
            .unwrap();

        assert!(ctx.has_warnings());
        assert!(!ctx.has_errors());
    }

    #[test]
    fn test_default_lints() {
        assert_eq!(
            ValidatePhase::new().lint_names(),
            vec![
                "duplicate-resource",
                "empty-description",
                "property-naming",
                "secret-output"
            ]
        );
        assert!(ValidatePhase::empty().lint_info().is_empty());
    }

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn run_logged(level: tracing::Level) -> String {
        let logs = Captured::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(level)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        let mut ctx = context(r#"{"name": "openai", "resources": {"File": {}}}"#);
        tracing::subscriber::with_default(subscriber, || {
            ValidatePhase::empty()
                .with_lint(EmptyDescriptionLint)
                .run(&mut ctx)
                .unwrap();
        });
        assert!(ctx.has_warnings());

        let bytes = logs.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn test_lint_warnings_are_not_logged_at_warn() {
        assert_eq!(run_logged(tracing::Level::WARN), "");
        assert!(run_logged(tracing::Level::DEBUG).contains("no description"));
    }
}
