//! Triple-quoted docstrings.

use sdkgen_codegen::builder::{CodeFragment, Renderable};

/// A `"""` docstring. Renders nothing when it has no lines.
#[derive(Debug, Clone, Default)]
pub struct Docstring {
    lines: Vec<String>,
}

impl Docstring {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `text`, one docstring line per line of text.
    pub fn text(mut self, text: &str) -> Self {
        self.lines.extend(text.lines().map(|l| l.trim_end().to_string()));
        self
    }

    /// Append a `:param` line. Parameters without a description are skipped.
    pub fn param(mut self, ty: &str, name: &str, doc: Option<&str>) -> Self {
        if let Some(doc) = doc {
            self.lines.push(format!(":param {} {}: {}", ty, name, doc));
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl Renderable for Docstring {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        if self.lines.is_empty() {
            return Vec::new();
        }
        let mut fragments = vec![CodeFragment::line("\"\"\"")];
        fragments.extend(self.lines.iter().map(|line| {
            if line.is_empty() {
                CodeFragment::blank()
            } else {
                CodeFragment::line(line.clone())
            }
        }));
        fragments.push(CodeFragment::line("\"\"\""));
        fragments
    }
}
