//! Lint for property naming conventions.

use indexmap::IndexMap;
use sdkgen_core::to_camel_case;
use sdkgen_schema::{PropertyKind, PropertySpec, Schema};

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Warns on property names that are not camelCase.
///
/// Backends derive every target identifier from the camelCase form, so a
/// name like `file_ids` still works but reads oddly in Node.js and risks
/// colliding with a camelCase sibling in Python.
pub struct PropertyNamingLint;

impl Lint for PropertyNamingLint {
    fn name(&self) -> &'static str {
        "property-naming"
    }

    fn description(&self) -> &'static str {
        "Check that property names are camelCase"
    }

    fn check(&self, schema: &Schema, diagnostics: &mut Vec<Diagnostic>) {
        for resource in &schema.resources {
            let base = format!("resources.{}", resource.key);
            self.check_properties(
                &resource.input_properties,
                &format!("{}.inputProperties", base),
                diagnostics,
            );
            self.check_properties(
                &resource.properties,
                &format!("{}.properties", base),
                diagnostics,
            );
        }
    }
}

impl PropertyNamingLint {
    fn check_properties(
        &self,
        properties: &IndexMap<String, PropertySpec>,
        location: &str,
        diagnostics: &mut Vec<Diagnostic>,
    ) {
        for (name, spec) in properties {
            let expected = to_camel_case(name);
            if *name != expected {
                diagnostics.push(
                    Diagnostic::warning(
                        self.name(),
                        format!(
                            "property '{}' should be camelCase (e.g., '{}')",
                            name, expected
                        ),
                    )
                    .at(format!("{}.{}", location, name)),
                );
            }
            if let PropertyKind::Object { properties, .. } = &spec.kind {
                self.check_properties(
                    properties,
                    &format!("{}.{}.properties", location, name),
                    diagnostics,
                );
            }
        }
    }
}
