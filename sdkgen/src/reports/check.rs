//! Check command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from schema validation.
#[derive(Debug)]
pub struct CheckReport {
    pub schema_path: PathBuf,
    pub package: String,
    pub version: String,
    pub description: Option<String>,
    /// Distinct modules, sorted.
    pub modules: Vec<String>,
    pub resources: Vec<ResourceLine>,
    pub warnings: Vec<String>,
    pub infos: Vec<String>,
}

/// One resource in the check summary.
#[derive(Debug)]
pub struct ResourceLine {
    pub token: String,
    pub inputs: usize,
    pub outputs: usize,
}

fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{} {}", count, noun)
    } else {
        format!("{} {}s", count, noun)
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(warning);
        }
        for info in &self.infos {
            out.preformatted(&format!("info: {}", info));
        }
        if !self.warnings.is_empty() || !self.infos.is_empty() {
            out.newline();
        }

        out.preformatted(&format!("✓ {} is valid", self.schema_path.display()));
        out.newline();
        out.preformatted(&format!("  {} v{}", self.package, self.version));
        if let Some(description) = &self.description {
            out.preformatted(&format!("  {}", description));
        }
        out.newline();

        out.section(&format!(
            "  {} in {}",
            plural(self.resources.len(), "resource"),
            plural(self.modules.len(), "module")
        ));
        for resource in &self.resources {
            out.list_item(&format!(
                "  {} ({}, {})",
                resource.token,
                plural(resource.inputs, "input"),
                plural(resource.outputs, "output")
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::BufferOutput;

    #[test]
    fn test_render_check() {
        let report = CheckReport {
            schema_path: PathBuf::from("schema.json"),
            package: "openai".to_string(),
            version: "0.1.0".to_string(),
            description: Some("OpenAI resources".to_string()),
            modules: vec!["index".to_string()],
            resources: vec![ResourceLine {
                token: "openai:index:VectorStore".to_string(),
                inputs: 4,
                outputs: 1,
            }],
            warnings: Vec::new(),
            infos: Vec::new(),
        };
        let mut out = BufferOutput::default();
        report.render(&mut out);
        assert_eq!(
            out.0,
            "✓ schema.json is valid\n\
             \n\
             \x20 openai v0.1.0\n\
             \x20 OpenAI resources\n\
             \n\
             \x20 1 resource in 1 module:\n\
             \x20   - openai:index:VectorStore (4 inputs, 1 output)\n"
        );
    }
}
