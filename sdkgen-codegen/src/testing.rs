//! Fixtures and helpers for backend tests.
//!
//! Available with the `testing` feature or during tests.

use eyre::{Result, WrapErr};
use sdkgen_core::{GeneratedFile, emit};
use sdkgen_ir::{Package, PackageMeta, Property, PropertyType, Resource};

/// The VectorStore schema used across the workspace tests.
pub const VECTOR_STORE_SCHEMA: &str = r#"{
  "name": "openai",
  "version": "0.1.0",
  "description": "OpenAI resources",
  "resources": {
    "openai:index:VectorStore": {
      "description": "A vector store",
      "inputProperties": {
        "name": { "type": "string", "description": "The name of the vector store." },
        "apiKey": { "type": "string", "secret": true },
        "fileIds": { "type": "array", "items": { "type": "string" } },
        "metadata": { "type": "object", "additionalProperties": { "type": "string" } }
      },
      "requiredInputs": ["name"],
      "properties": {
        "id": { "type": "string" },
        "createdAt": { "type": "number" },
        "status": { "type": "string" },
        "name": { "type": "string" }
      },
      "required": ["id", "createdAt", "status", "name"]
    }
  },
  "language": {
    "nodejs": { "dependencies": { "openai": "^4.0.0" } }
  }
}"#;

/// The lowered form of [`VECTOR_STORE_SCHEMA`].
pub fn vector_store_package() -> Package {
    Package {
        meta: PackageMeta {
            name: "openai".to_string(),
            version: "0.1.0".to_string(),
            description: Some("OpenAI resources".to_string()),
            ..Default::default()
        },
        resources: vec![Resource {
            token: "openai:index:VectorStore".to_string(),
            module: "index".to_string(),
            name: "VectorStore".to_string(),
            description: Some("A vector store".to_string()),
            inputs: vec![
                Property::new("apiKey", PropertyType::String).secret(),
                Property::new("fileIds", PropertyType::StringArray),
                Property::new("metadata", PropertyType::StringMap),
                Property::new("name", PropertyType::String)
                    .required()
                    .description("The name of the vector store."),
            ],
            outputs: vec![
                Property::new("createdAt", PropertyType::Number).required(),
                Property::new("id", PropertyType::String).required(),
                Property::new("name", PropertyType::String).required(),
                Property::new("status", PropertyType::String).required(),
            ],
        }],
    }
}

/// A package whose only resource has a nested object input.
pub fn nested_object_package() -> Package {
    let mut package = vector_store_package();
    package.resources = vec![Resource {
        token: "openai:beta:Assistant".to_string(),
        module: "beta".to_string(),
        name: "Assistant".to_string(),
        description: None,
        inputs: vec![Property::new(
            "toolResources",
            PropertyType::Object {
                properties: vec![
                    Property::new("vectorStoreIds", PropertyType::StringArray).required(),
                ],
            },
        )],
        outputs: vec![Property::new("id", PropertyType::String).required()],
    }];
    package
}

/// A package with two inputs that differ only in casing style.
pub fn colliding_package() -> Package {
    let mut package = vector_store_package();
    if let Some(resource) = package.resources.first_mut() {
        resource.inputs = vec![
            Property::new("fileIds", PropertyType::StringArray),
            Property::new("file_ids", PropertyType::StringArray),
        ];
    }
    package
}

/// Content of the file at `path`, panicking with the list of generated
/// paths when it is missing.
pub fn file_content<'a>(files: &'a [GeneratedFile], path: &str) -> &'a str {
    match files.iter().find(|f| f.path() == path) {
        Some(file) => file.as_str().unwrap_or_default(),
        None => {
            let paths: Vec<_> = files.iter().map(|f| f.path()).collect();
            panic!("no generated file '{}', have: {:?}", path, paths)
        }
    }
}

/// Assert that two strings are equal, printing differing lines on failure.
pub fn assert_content_eq(expected: &str, actual: &str) {
    if expected != actual {
        let expected_lines: Vec<&str> = expected.lines().collect();
        let actual_lines: Vec<&str> = actual.lines().collect();

        let mut diff = String::new();
        let max_lines = expected_lines.len().max(actual_lines.len());

        for i in 0..max_lines {
            let exp = expected_lines.get(i).copied().unwrap_or("<missing>");
            let act = actual_lines.get(i).copied().unwrap_or("<missing>");

            if exp != act {
                diff.push_str(&format!("Line {}:\n", i + 1));
                diff.push_str(&format!("  expected: {}\n", exp));
                diff.push_str(&format!("  actual:   {}\n", act));
            }
        }

        panic!("Content mismatch:\n{}", diff);
    }
}

/// Emit `files` into a fresh temporary directory.
///
/// The directory is removed when the returned `TempDir` is dropped.
pub fn generate_to_temp(files: &[GeneratedFile]) -> Result<tempfile::TempDir> {
    let temp_dir = tempfile::TempDir::new()?;
    emit(temp_dir.path(), files).wrap_err("failed to emit generated files")?;
    Ok(temp_dir)
}
