//! Lint for resource names that differ only by case.

use std::collections::HashMap;

use sdkgen_schema::Schema;

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Errors on resource names that are equal ignoring case.
///
/// Exact duplicates are rejected by the loader. Names differing only by case
/// still produce clashing files on case-insensitive filesystems
/// (`vectorStore.go` and `VectorStore.go`).
pub struct DuplicateResourceLint;

impl Lint for DuplicateResourceLint {
    fn name(&self) -> &'static str {
        "duplicate-resource"
    }

    fn description(&self) -> &'static str {
        "Detect resource names that collide ignoring case"
    }

    fn check(&self, schema: &Schema, diagnostics: &mut Vec<Diagnostic>) {
        let mut seen: HashMap<String, &str> = HashMap::new();

        for resource in &schema.resources {
            let name = resource.name();
            match seen.get(&name.to_lowercase()) {
                Some(first) => diagnostics.push(
                    Diagnostic::error(
                        self.name(),
                        format!(
                            "resource '{}' conflicts with '{}' (names differ only by case)",
                            name, first
                        ),
                    )
                    .at(format!("resources.{}", resource.key)),
                ),
                None => {
                    seen.insert(name.to_lowercase(), name);
                }
            }
        }
    }
}
