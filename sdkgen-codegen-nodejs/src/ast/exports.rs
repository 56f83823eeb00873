//! TypeScript export builder.

use sdkgen_codegen::builder::{CodeFragment, Renderable};

/// Builder for re-export statements (`export { a } from "./a";`).
#[derive(Debug, Clone)]
pub struct Export {
    from: String,
    named: Vec<String>,
    type_only: bool,
}

impl Export {
    pub fn from(module: impl Into<String>) -> Self {
        Self {
            from: module.into(),
            named: Vec::new(),
            type_only: false,
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.named.push(name.into());
        self
    }

    /// Make this a type-only export (`export type { ... }`).
    pub fn type_only(mut self) -> Self {
        self.type_only = true;
        self
    }
}

impl Renderable for Export {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let type_kw = if self.type_only { "type " } else { "" };
        let line = if self.named.is_empty() {
            format!("export * from \"{}\";", self.from)
        } else {
            format!(
                "export {}{{ {} }} from \"{}\";",
                type_kw,
                self.named.join(", "),
                self.from
            )
        };
        vec![CodeFragment::line(line)]
    }
}

#[cfg(test)]
mod tests {
    use sdkgen_codegen::builder::CodeBuilder;

    use super::*;

    fn render(export: &Export) -> String {
        let mut builder = CodeBuilder::typescript();
        builder.emit(export);
        builder.build()
    }

    #[test]
    fn test_type_only_export() {
        let export = Export::from("./vectorStore").named("VectorStoreArgs").type_only();
        assert_eq!(
            render(&export),
            "export type { VectorStoreArgs } from \"./vectorStore\";\n"
        );
    }

    #[test]
    fn test_export_all() {
        assert_eq!(
            render(&Export::from("./utilities")),
            "export * from \"./utilities\";\n"
        );
    }
}
