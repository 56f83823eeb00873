//! Go import blocks.

use sdkgen_codegen::{
    builder::{CodeFragment, Renderable},
    generation::ImportCollector,
};

/// An `import (...)` block grouped the way gofmt leaves it: standard
/// library paths first, then everything else.
#[derive(Debug, Clone)]
pub struct ImportBlock<'a> {
    imports: &'a ImportCollector,
}

impl<'a> ImportBlock<'a> {
    pub fn new(imports: &'a ImportCollector) -> Self {
        Self { imports }
    }
}

/// Standard library paths have no dot in their first element.
fn is_stdlib(path: &str) -> bool {
    path.split('/').next().is_some_and(|first| !first.contains('.'))
}

impl Renderable for ImportBlock<'_> {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        if self.imports.is_empty() {
            return Vec::new();
        }

        let (stdlib, external): (Vec<&str>, Vec<&str>) = self
            .imports
            .sorted_modules()
            .into_iter()
            .partition(|path| is_stdlib(path));

        let quote = |path: &&str| CodeFragment::line(format!("\"{}\"", path));
        let mut body: Vec<CodeFragment> = stdlib.iter().map(quote).collect();
        if !stdlib.is_empty() && !external.is_empty() {
            body.push(CodeFragment::blank());
        }
        body.extend(external.iter().map(quote));

        vec![CodeFragment::block("import (", body, Some(")".to_string()))]
    }
}
