//! Pipeline orchestrator.

use eyre::Result;
use sdkgen_schema::Schema;

use super::{
    CompilationContext, Phase, Plugin,
    phases::{AnalyzePhase, LowerPhase, ValidatePhase},
};

/// Runs the built-in phases (validate, lower, analyze) followed by any user
/// phases, calling plugin hooks before and after each.
pub struct Pipeline {
    validate: ValidatePhase,
    phases: Vec<Box<dyn Phase>>,
    plugins: Vec<Box<dyn Plugin>>,
}

impl Pipeline {
    /// A pipeline with the default lint set.
    pub fn new() -> Self {
        Self::with_validation(ValidatePhase::new())
    }

    /// A pipeline with a custom validate phase.
    pub fn with_validation(validate: ValidatePhase) -> Self {
        Self {
            validate,
            phases: Vec::new(),
            plugins: Vec::new(),
        }
    }

    /// Add a phase to run after the built-in phases.
    pub fn phase(mut self, phase: impl Phase + 'static) -> Self {
        self.phases.push(Box::new(phase));
        self
    }

    pub fn plugin(mut self, plugin: impl Plugin + 'static) -> Self {
        self.plugins.push(Box::new(plugin));
        self
    }

    /// Compile `schema` into a context holding the package IR.
    ///
    /// Fails when validation reports an error, when a phase fails or when a
    /// plugin hook aborts.
    pub fn run(&self, schema: Schema) -> Result<CompilationContext> {
        let mut ctx = CompilationContext::new(schema);

        let builtin: [&dyn Phase; 3] = [&self.validate, &LowerPhase, &AnalyzePhase];
        let user = self.phases.iter().map(|p| p.as_ref());

        for phase in builtin.into_iter().chain(user) {
            self.run_phase(phase, &mut ctx)?;
        }

        Ok(ctx)
    }

    fn run_phase(&self, phase: &dyn Phase, ctx: &mut CompilationContext) -> Result<()> {
        let name = phase.name();
        tracing::debug!(phase = name, "running phase");

        for plugin in &self.plugins {
            plugin.on_before_phase(name, ctx)?;
        }

        phase.run(ctx)?;

        for plugin in &self.plugins {
            plugin.on_after_phase(name, ctx)?;
        }

        Ok(())
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        Arc, Mutex,
        atomic::{AtomicUsize, Ordering},
    };

    use super::*;

    #[derive(Default)]
    struct Recorder {
        before: AtomicUsize,
        after: Mutex<Vec<String>>,
    }

    impl Plugin for Recorder {
        fn name(&self) -> &'static str {
            "recorder"
        }

        fn on_before_phase(&self, _phase: &str, _ctx: &mut CompilationContext) -> Result<()> {
            self.before.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }

        fn on_after_phase(&self, phase: &str, _ctx: &mut CompilationContext) -> Result<()> {
            self.after.lock().unwrap().push(phase.to_string());
            Ok(())
        }
    }

    struct CountResources;

    impl Phase for CountResources {
        fn name(&self) -> &'static str {
            "count"
        }

        fn description(&self) -> &'static str {
            "Record the resource count"
        }

        fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
            let count = ctx.ir.as_ref().map_or(0, |p| p.resources.len());
            ctx.add_info("count", format!("{} resources", count));
            Ok(())
        }
    }

    fn schema(src: &str) -> Schema {
        src.parse().unwrap()
    }

    #[test]
    fn test_pipeline_populates_ir_and_computed() {
        let ctx = Pipeline::new()
            .run(schema(r#"{"name": "openai", "resources": {"File": {"description": "A file"}}}"#))
            .unwrap();
        assert!(ctx.ir.is_some());
        assert!(ctx.computed.is_some());
        assert!(!ctx.has_errors());
    }

    #[test]
    fn test_pipeline_plugin_hooks_and_user_phase() {
        let recorder = Arc::new(Recorder::default());
        let ctx = Pipeline::new()
            .plugin(recorder.clone())
            .phase(CountResources)
            .run(schema(r#"{"name": "openai", "resources": {"File": {}}}"#))
            .unwrap();

        assert_eq!(recorder.before.load(Ordering::SeqCst), 4);
        assert_eq!(
            *recorder.after.lock().unwrap(),
            vec!["validate", "lower", "analyze", "count"]
        );
        assert!(ctx.diagnostics.iter().any(|d| d.message == "1 resources"));
    }

    #[test]
    fn test_pipeline_stops_on_lint_error() {
        let recorder = Arc::new(Recorder::default());
        let err = Pipeline::new()
            .plugin(recorder.clone())
            .run(schema(
                r#"{"name": "openai", "resources": {"File": {}, "file": {}}}"#,
            ))
            .unwrap_err();

        assert!(err.to_string().contains("validation failed with 1 error"));
        assert!(recorder.after.lock().unwrap().is_empty());
    }
}
