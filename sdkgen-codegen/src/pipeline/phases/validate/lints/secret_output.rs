//! Lint for secret inputs echoed as plain outputs.

use sdkgen_schema::Schema;

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Warns when a secret input has a same-named output not marked secret.
///
/// Backends still list the output as an additional secret output, so the
/// value stays redacted; the schema is just inconsistent.
pub struct SecretOutputLint;

impl Lint for SecretOutputLint {
    fn name(&self) -> &'static str {
        "secret-output"
    }

    fn description(&self) -> &'static str {
        "Check that secret inputs stay secret as outputs"
    }

    fn check(&self, schema: &Schema, diagnostics: &mut Vec<Diagnostic>) {
        for resource in &schema.resources {
            for (name, input) in &resource.input_properties {
                let leaked = input.secret
                    && resource
                        .properties
                        .get(name)
                        .is_some_and(|output| !output.secret);
                if leaked {
                    diagnostics.push(
                        Diagnostic::warning(
                            self.name(),
                            format!(
                                "input '{}' of '{}' is secret but its output is not",
                                name,
                                resource.name()
                            ),
                        )
                        .at(format!("resources.{}.properties.{}", resource.key, name)),
                    );
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secret_input_with_plain_output() {
        let schema: Schema = r#"{"name": "openai", "resources": {"VectorStore": {
            "inputProperties": {
                "apiKey": {"type": "string", "secret": true},
                "token": {"type": "string", "secret": true},
                "name": {"type": "string"}
            },
            "properties": {
                "apiKey": {"type": "string"},
                "token": {"type": "string", "secret": true},
                "name": {"type": "string"}
            }
        }}}"#
            .parse()
            .unwrap();

        let mut diagnostics = Vec::new();
        SecretOutputLint.check(&schema, &mut diagnostics);

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(
            diagnostics[0].message,
            "input 'apiKey' of 'VectorStore' is secret but its output is not"
        );
    }
}
