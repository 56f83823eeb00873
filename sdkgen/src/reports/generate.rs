//! Generate command report data structures.

use std::path::PathBuf;

use sdkgen_schema::Language;

use super::output::{Output, Report};

/// Report data from SDK generation.
#[derive(Debug)]
pub struct GenerateReport {
    pub package: String,
    pub version: String,
    pub language: Language,
    /// Warning messages from the pipeline.
    pub warnings: Vec<String>,
    pub result: GenerationResult,
}

/// Result of code generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// Files were written to disk.
    Written(WrittenResult),
    /// Dry-run preview.
    Preview(Vec<PreviewFile>),
}

/// Result when files were written to disk.
#[derive(Debug)]
pub struct WrittenResult {
    pub output_dir: PathBuf,
    /// Relative paths of the written files, in write order.
    pub files: Vec<String>,
    pub bytes: usize,
    /// Path to debug snapshots, if visualization was enabled.
    pub debug_dir: Option<PathBuf>,
}

/// A file in preview mode.
#[derive(Debug)]
pub struct PreviewFile {
    pub path: String,
    pub content: String,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(warning);
        }

        match &self.result {
            GenerationResult::Written(written) => self.render_written(out, written),
            GenerationResult::Preview(files) => self.render_preview(out, files),
        }
    }
}

impl GenerateReport {
    fn render_written(&self, out: &mut dyn Output, written: &WrittenResult) {
        if let Some(debug_dir) = &written.debug_dir {
            out.key_value(
                "Pipeline snapshots written to",
                &debug_dir.display().to_string(),
            );
            out.newline();
        }

        out.preformatted(&format!(
            "{} v{} ({})",
            self.package, self.version, self.language
        ));
        out.newline();

        out.section(&format!("Generated {} files", written.files.len()));
        for file in &written.files {
            out.added_item(file);
        }
        out.newline();

        out.key_value(
            "Output",
            &format!("{} ({} bytes)", written.output_dir.display(), written.bytes),
        );
    }

    fn render_preview(&self, out: &mut dyn Output, files: &[PreviewFile]) {
        for file in files {
            out.divider(&file.path);
            out.preformatted(file.content.trim_end_matches('\n'));
        }

        out.divider("Summary");
        out.preformatted(&format!("{} files would be generated", files.len()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::BufferOutput;

    fn report(result: GenerationResult) -> GenerateReport {
        GenerateReport {
            package: "openai".to_string(),
            version: "0.1.0".to_string(),
            language: Language::Go,
            warnings: vec!["resource 'File' has no description".to_string()],
            result,
        }
    }

    #[test]
    fn test_render_written() {
        let report = report(GenerationResult::Written(WrittenResult {
            output_dir: PathBuf::from("sdk/go"),
            files: vec!["doc.go".to_string(), "openai/file.go".to_string()],
            bytes: 1024,
            debug_dir: None,
        }));
        let mut out = BufferOutput::default();
        report.render(&mut out);
        assert_eq!(
            out.0,
            "warning: resource 'File' has no description\n\
             openai v0.1.0 (go)\n\
             \n\
             Generated 2 files:\n\
             \x20 + doc.go\n\
             \x20 + openai/file.go\n\
             \n\
             Output: sdk/go (1024 bytes)\n"
        );
    }

    #[test]
    fn test_render_preview() {
        let report = report(GenerationResult::Preview(vec![PreviewFile {
            path: "doc.go".to_string(),
            content: "package openai\n".to_string(),
        }]));
        let mut out = BufferOutput::default();
        report.render(&mut out);
        assert!(out.0.contains("── doc.go ──\npackage openai\n── Summary ──\n"));
        assert!(out.0.ends_with("1 files would be generated\n"));
    }
}
