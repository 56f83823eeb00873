//! Composable file builder

use super::{CodeBuilder, Indent};
use crate::generation::ImportCollector;

/// Combines import collection with code generation.
///
/// The body is built first while imports accumulate; a backend then renders
/// the import block in its own syntax and prepends it.
///
/// ```
/// use sdkgen_codegen::builder::FileBuilder;
///
/// let file = FileBuilder::go()
///     .add_import("github.com/pulumi/pulumi/sdk/v3/go/pulumi", "")
///     .with_code(|c| c.line("type VectorStore struct {}"));
/// assert!(file.has_imports());
/// ```
#[derive(Debug, Clone)]
pub struct FileBuilder {
    pub imports: ImportCollector,
    pub code: CodeBuilder,
}

impl FileBuilder {
    pub fn new(indent: Indent) -> Self {
        Self {
            imports: ImportCollector::new(),
            code: CodeBuilder::new(indent),
        }
    }

    pub fn go() -> Self {
        Self::new(Indent::GO)
    }

    pub fn typescript() -> Self {
        Self::new(Indent::TYPESCRIPT)
    }

    pub fn python() -> Self {
        Self::new(Indent::PYTHON)
    }

    pub fn csharp() -> Self {
        Self::new(Indent::CSHARP)
    }

    /// Add an import. An empty `symbol` records the module alone.
    pub fn add_import(mut self, module: &str, symbol: &str) -> Self {
        if symbol.is_empty() {
            self.imports.add_module(module);
        } else {
            self.imports.add(module, symbol);
        }
        self
    }

    pub fn add_module(mut self, module: &str) -> Self {
        self.imports.add_module(module);
        self
    }

    /// Apply a function to the code builder.
    pub fn with_code<F>(mut self, f: F) -> Self
    where
        F: FnOnce(CodeBuilder) -> CodeBuilder,
    {
        self.code = f(self.code);
        self
    }

    pub fn has_imports(&self) -> bool {
        !self.imports.is_empty()
    }

    pub fn into_parts(self) -> (ImportCollector, CodeBuilder) {
        (self.imports, self.code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_builder_collects_imports() {
        let builder = FileBuilder::typescript()
            .add_import("@pulumi/pulumi", "")
            .add_import("./utilities", "getVersion")
            .with_code(|c| c.line("export class VectorStore {}"));

        assert!(builder.imports.has_module("@pulumi/pulumi"));
        assert!(builder.imports.has_symbol("./utilities", "getVersion"));

        let (imports, code) = builder.into_parts();
        assert_eq!(imports.len(), 2);
        assert!(code.as_str().contains("export class VectorStore"));
    }

    #[test]
    fn test_file_builder_without_imports() {
        let builder = FileBuilder::csharp().with_code(|c| c.line("namespace Pulumi;"));
        assert!(!builder.has_imports());
    }
}
