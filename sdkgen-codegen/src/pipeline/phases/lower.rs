//! Lower phase: schema to package IR.

use eyre::Result;
use indexmap::IndexMap;
use sdkgen_ir::{Package, PackageMeta, Property, PropertyType, Resource};
use sdkgen_schema::{PropertyKind, PropertySpec, ResourceSpec, Schema};

use crate::pipeline::{CompilationContext, Phase};

/// Builds the [`Package`] every backend consumes.
///
/// Resources and properties are sorted by name so backends iterate in a
/// stable order regardless of how the schema was written.
pub struct LowerPhase;

impl Phase for LowerPhase {
    fn name(&self) -> &'static str {
        "lower"
    }

    fn description(&self) -> &'static str {
        "Transform the schema into package IR"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        let package = lower_schema(&ctx.schema);
        tracing::debug!(resources = package.resources.len(), "lowered schema");
        ctx.ir = Some(package);
        Ok(())
    }
}

/// Lower a validated schema into the package IR.
pub fn lower_schema(schema: &Schema) -> Package {
    let mut resources: Vec<Resource> = schema.resources.iter().map(lower_resource).collect();
    resources.sort_by(|a, b| a.name.cmp(&b.name));

    Package {
        meta: PackageMeta {
            name: schema.name.clone(),
            version: schema.version.to_string(),
            description: schema.description.clone(),
            display_name: schema.display_name.clone(),
            publisher: schema.publisher.clone(),
            homepage: schema.homepage.clone(),
            repository: schema.repository.clone(),
            license: schema.license.clone(),
            keywords: schema.keywords.clone(),
        },
        resources,
    }
}

fn lower_resource(spec: &ResourceSpec) -> Resource {
    Resource {
        token: spec.token.to_string(),
        module: spec.token.module.clone(),
        name: spec.token.name.clone(),
        description: spec.description.clone(),
        inputs: lower_properties(&spec.input_properties, &spec.required_inputs),
        outputs: lower_properties(&spec.properties, &spec.required),
    }
}

fn lower_properties(specs: &IndexMap<String, PropertySpec>, required: &[String]) -> Vec<Property> {
    let mut properties: Vec<Property> = specs
        .iter()
        .map(|(name, spec)| Property {
            name: name.clone(),
            ty: lower_kind(&spec.kind),
            required: required.iter().any(|r| r == name),
            secret: spec.secret,
            description: spec.description.clone(),
        })
        .collect();
    properties.sort_by(|a, b| a.name.cmp(&b.name));
    properties
}

fn lower_kind(kind: &PropertyKind) -> PropertyType {
    match kind {
        PropertyKind::String => PropertyType::String,
        PropertyKind::Number => PropertyType::Number,
        PropertyKind::Boolean => PropertyType::Boolean,
        PropertyKind::StringArray => PropertyType::StringArray,
        PropertyKind::StringMap => PropertyType::StringMap,
        PropertyKind::Object {
            properties,
            required,
        } => PropertyType::Object {
            properties: lower_properties(properties, required),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCHEMA: &str = r#"{
  "name": "openai",
  "version": "0.2.0-beta.1",
  "keywords": ["ai"],
  "resources": {
    "VectorStore": {
      "inputProperties": {
        "name": { "type": "string" },
        "apiKey": { "type": "string", "secret": true }
      },
      "requiredInputs": ["name"],
      "properties": {
        "status": { "type": "string" },
        "id": { "type": "string" }
      },
      "required": ["id"]
    },
    "openai:beta:Assistant": {
      "inputProperties": {
        "toolResources": {
          "type": "object",
          "properties": {
            "vectorStoreIds": { "type": "array", "items": { "type": "string" } },
            "codeInterpreter": { "type": "boolean" }
          },
          "required": ["vectorStoreIds"]
        }
      }
    }
  }
}"#;

    fn lowered() -> Package {
        lower_schema(&SCHEMA.parse().unwrap())
    }

    #[test]
    fn test_meta() {
        let package = lowered();
        assert_eq!(package.meta.name, "openai");
        assert_eq!(package.meta.version, "0.2.0-beta.1");
        assert_eq!(package.meta.keywords, vec!["ai"]);
    }

    #[test]
    fn test_resources_and_properties_sorted() {
        let package = lowered();
        let names: Vec<_> = package.resources.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Assistant", "VectorStore"]);

        let store = package.resources.iter().find(|r| r.name == "VectorStore").unwrap();
        let inputs: Vec<_> = store.inputs.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(inputs, vec!["apiKey", "name"]);
        let outputs: Vec<_> = store.outputs.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(outputs, vec!["id", "status"]);
    }

    #[test]
    fn test_flags() {
        let package = lowered();
        let store = package.resources.iter().find(|r| r.name == "VectorStore").unwrap();
        assert!(store.input("name").unwrap().required);
        assert!(store.input("apiKey").unwrap().secret);
        assert!(!store.input("apiKey").unwrap().required);
        assert!(store.output("id").unwrap().required);
        assert!(!store.output("status").unwrap().required);
    }

    #[test]
    fn test_module_and_nested_object() {
        let package = lowered();
        let assistant = package.resources.iter().find(|r| r.name == "Assistant").unwrap();
        assert_eq!(assistant.module, "beta");
        assert_eq!(assistant.token, "openai:beta:Assistant");

        match &assistant.input("toolResources").unwrap().ty {
            PropertyType::Object { properties } => {
                assert_eq!(properties[0].name, "codeInterpreter");
                assert!(!properties[0].required);
                assert_eq!(properties[1].name, "vectorStoreIds");
                assert!(properties[1].required);
            }
            other => panic!("expected object, got {:?}", other),
        }
    }
}
