//! CodeFile abstraction for structured TypeScript file generation.
//!
//! Provides a high-level API for generating TypeScript files with a header,
//! organized imports, exports and body content.

use sdkgen_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

use crate::ast::{Export, Import};

/// Header carried by every generated TypeScript file.
pub const HEADER: &str = "\
// *** WARNING: this file was generated by sdkgen. ***
// *** Do not edit by hand unless you're certain you know what you are doing! ***
";

/// A structured representation of a TypeScript file.
///
/// Sections render in order (header, imports, exports, body) separated by
/// blank lines. Body elements are also separated by blank lines.
#[derive(Default)]
pub struct CodeFile {
    header: Option<&'static str>,
    imports: Vec<Import>,
    exports: Vec<Export>,
    body: Vec<Vec<CodeFragment>>,
}

impl CodeFile {
    pub fn new() -> Self {
        Self::default()
    }

    /// A file starting with the generated-code [`HEADER`].
    pub fn generated() -> Self {
        Self {
            header: Some(HEADER),
            ..Self::default()
        }
    }

    pub fn import(mut self, import: Import) -> Self {
        self.imports.push(import);
        self
    }

    pub fn export(mut self, export: Export) -> Self {
        self.exports.push(export);
        self
    }

    pub fn exports(mut self, exports: impl IntoIterator<Item = Export>) -> Self {
        self.exports.extend(exports);
        self
    }

    /// Add a body element (any Renderable).
    #[allow(clippy::should_implement_trait)]
    pub fn add<R: Renderable>(mut self, node: R) -> Self {
        self.body.push(node.to_fragments());
        self
    }

    pub fn render(&self) -> String {
        let mut builder = CodeBuilder::typescript();
        let mut first = true;
        let mut section = |builder: &mut CodeBuilder| {
            if !first {
                builder.push_blank();
            }
            first = false;
        };

        if let Some(header) = self.header {
            section(&mut builder);
            builder.push_raw(header);
        }
        if !self.imports.is_empty() {
            section(&mut builder);
            for import in &self.imports {
                builder.emit(import);
            }
        }
        if !self.exports.is_empty() {
            section(&mut builder);
            for export in &self.exports {
                builder.emit(export);
            }
        }
        for fragments in &self.body {
            section(&mut builder);
            for fragment in fragments {
                builder.apply_fragment(fragment.clone());
            }
        }

        builder.build()
    }
}

/// A raw code fragment that implements Renderable.
#[derive(Debug, Clone)]
pub struct RawCode(String);

impl RawCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }
}

impl Renderable for RawCode {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.0
            .lines()
            .map(|line| CodeFragment::Line(line.to_string()))
            .collect()
    }
}
