//! Analyze phase: summary data computed from the IR.

use eyre::{Result, eyre};

use crate::{
    analysis::ComputedData,
    pipeline::{CompilationContext, Phase},
};

/// Computes [`ComputedData`]. Must run after the lower phase.
pub struct AnalyzePhase;

impl Phase for AnalyzePhase {
    fn name(&self) -> &'static str {
        "analyze"
    }

    fn description(&self) -> &'static str {
        "Compute shared data from IR"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        let ir = ctx
            .ir
            .as_ref()
            .ok_or_else(|| eyre!("package IR not set, the analyze phase must run after lower"))?;

        ctx.computed = Some(ComputedData::from_package(ir));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use sdkgen_schema::Schema;

    use super::*;
    use crate::pipeline::phases::LowerPhase;

    fn context() -> CompilationContext {
        let schema: Schema = r#"{"name": "openai", "resources": {"File": {
            "inputProperties": {"content": {"type": "string", "secret": true}},
            "properties": {"id": {"type": "string"}}
        }}}"#
            .parse()
            .unwrap();
        CompilationContext::new(schema)
    }

    #[test]
    fn test_requires_ir() {
        let mut ctx = context();
        let err = AnalyzePhase.run(&mut ctx).unwrap_err();
        assert!(err.to_string().contains("must run after lower"));
    }

    #[test]
    fn test_computes_data() {
        let mut ctx = context();
        LowerPhase.run(&mut ctx).unwrap();
        AnalyzePhase.run(&mut ctx).unwrap();

        let computed = ctx.computed.unwrap();
        assert_eq!(computed.resource_count, 1);
        assert_eq!(computed.resources[0].secret_outputs, vec!["content"]);
    }
}
