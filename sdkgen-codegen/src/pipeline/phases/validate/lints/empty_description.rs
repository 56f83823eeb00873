//! Lint for undocumented resources.

use sdkgen_schema::Schema;

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Warns on resources without a description. Descriptions become the doc
/// comments of every generated class.
pub struct EmptyDescriptionLint;

impl Lint for EmptyDescriptionLint {
    fn name(&self) -> &'static str {
        "empty-description"
    }

    fn description(&self) -> &'static str {
        "Warn about resources without descriptions"
    }

    fn check(&self, schema: &Schema, diagnostics: &mut Vec<Diagnostic>) {
        for resource in &schema.resources {
            let empty = resource
                .description
                .as_deref()
                .is_none_or(|d| d.trim().is_empty());
            if empty {
                diagnostics.push(
                    Diagnostic::warning(
                        self.name(),
                        format!("resource '{}' has no description", resource.name()),
                    )
                    .at(format!("resources.{}", resource.key)),
                );
            }
        }
    }
}
