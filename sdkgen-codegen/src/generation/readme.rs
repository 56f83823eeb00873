//! README generation shared by all backends.

use sdkgen_core::SourceFile;

use crate::builder::CodeBuilder;

/// The `README.md` shipped with a generated SDK.
///
/// Backends supply the install command and a usage snippet in their own
/// language; the layout is the same everywhere.
#[derive(Debug, Clone)]
pub struct Readme {
    pub path: String,
    /// Package name as users install it.
    pub package: String,
    pub description: Option<String>,
    /// Display name of the target language, e.g. `Python`.
    pub language: &'static str,
    /// Shell command that installs the package.
    pub install: String,
    /// Info string of the usage code fence, e.g. `typescript`.
    pub fence: &'static str,
    /// Example program; empty when the package has no resources.
    pub usage: String,
}

impl SourceFile for Readme {
    fn path(&self) -> String {
        self.path.clone()
    }

    fn render(&self) -> String {
        CodeBuilder::default()
            .line(&format!("# {}", self.package))
            .blank()
            .when(self.description.is_some(), |b| {
                b.line(self.description.as_deref().unwrap_or_default())
                    .blank()
            })
            .line(&format!(
                "{} SDK generated by sdkgen. Do not edit by hand.",
                self.language
            ))
            .blank()
            .line("## Installation")
            .blank()
            .line("```sh")
            .line(&self.install)
            .line("```")
            .when(!self.usage.is_empty(), |b| {
                b.blank()
                    .line("## Usage")
                    .blank()
                    .line(&format!("```{}", self.fence))
                    .raw(&self.usage)
                    .line("```")
            })
            .build()
    }
}
