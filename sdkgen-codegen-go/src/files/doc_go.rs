//! doc.go generator.

use sdkgen_codegen::builder::CodeBuilder;
use sdkgen_core::SourceFile;

use super::HEADER;

/// The package documentation file.
pub struct DocGo {
    pub package_name: String,
    pub description: Option<String>,
}

impl SourceFile for DocGo {
    fn path(&self) -> String {
        format!("{}/doc.go", self.package_name)
    }

    fn render(&self) -> String {
        let doc = match &self.description {
            Some(description) => description.clone(),
            None => format!(
                "Package {0} exports types, functions and subpackages for provisioning {0} resources.",
                self.package_name
            ),
        };
        CodeBuilder::go()
            .raw(HEADER)
            .blank()
            .comment("//", &doc)
            .line(&format!("package {}", self.package_name))
            .build()
    }
}
