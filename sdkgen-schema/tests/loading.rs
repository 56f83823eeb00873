use std::fs;

use sdkgen_schema::{Error, Language, PropertyKind, Schema};
use tempfile::TempDir;

const VECTOR_STORE: &str = r#"{
  "name": "openai",
  "version": "0.1.0",
  "description": "OpenAI resources",
  "resources": {
    "openai:index:VectorStore": {
      "description": "A vector store",
      "inputProperties": {
        "name": { "type": "string" },
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
    "nodejs": { "dependencies": { "openai": "^4.0.0" } },
    "java": { "basePackage": "com.openai" }
  }
}"#;

fn parse(src: &str) -> Result<Schema, Box<Error>> {
    Schema::from_str_with_filename(src, "schema.json")
}

#[test]
fn test_load_vector_store() {
    let schema = parse(VECTOR_STORE).unwrap();

    assert_eq!(schema.name, "openai");
    assert_eq!(schema.version.to_string(), "0.1.0");
    assert_eq!(schema.resources.len(), 1);

    let resource = &schema.resources[0];
    assert_eq!(resource.token.to_string(), "openai:index:VectorStore");
    assert!(resource.is_input_required("name"));
    assert!(!resource.is_input_required("apiKey"));
    assert!(resource.input_properties["apiKey"].secret);
    assert_eq!(
        resource.input_properties["fileIds"].kind,
        PropertyKind::StringArray
    );
    assert_eq!(
        resource.input_properties["metadata"].kind,
        PropertyKind::StringMap
    );
    assert_eq!(resource.properties["createdAt"].kind, PropertyKind::Number);
}

#[test]
fn test_language_options_from_schema() {
    let schema = parse(VECTOR_STORE).unwrap();
    let options = schema.language_options(Language::NodeJs);
    assert!(options.get("dependencies").is_some());
    assert!(schema.language_options(Language::Go).is_empty());
}

#[test]
fn test_bare_resource_name_expands_to_index_module() {
    let schema = parse(r#"{"name": "openai", "resources": {"File": {}}}"#).unwrap();
    assert_eq!(
        schema.resources[0].token.to_string(),
        "openai:index:File"
    );
}

#[test]
fn test_version_defaults() {
    let schema = parse(r#"{"name": "openai"}"#).unwrap();
    assert_eq!(schema.version.to_string(), "0.0.0");
    assert!(schema.resources.is_empty());
}

#[test]
fn test_malformed_json_is_parse_error_with_span() {
    let err = parse("{\"name\": \"openai\",, }").unwrap_err();
    match *err {
        Error::Parse { span, .. } => assert!(span.is_some()),
        other => panic!("expected Parse, got {:?}", other),
    }
}

#[test]
fn test_missing_name_is_parse_error() {
    let err = parse(r#"{"resources": {}}"#).unwrap_err();
    assert!(matches!(*err, Error::Parse { .. }));
}

#[test]
fn test_duplicate_resource_key() {
    let src = r#"{
  "name": "openai",
  "resources": {
    "VectorStore": {},
    "VectorStore": {}
  }
}"#;
    let err = parse(src).unwrap_err();
    match *err {
        Error::DuplicateResource {
            name,
            first_span,
            second_span,
            ..
        } => {
            assert_eq!(name, "VectorStore");
            let (first, second) = (first_span.unwrap(), second_span.unwrap());
            assert!(first.offset() < second.offset());
        }
        other => panic!("expected DuplicateResource, got {:?}", other),
    }
}

#[test]
fn test_duplicate_resource_through_different_tokens() {
    let src = r#"{
  "name": "openai",
  "resources": {
    "openai:index:VectorStore": {},
    "VectorStore": {}
  }
}"#;
    let err = parse(src).unwrap_err();
    match *err {
        Error::DuplicateResource {
            first_key,
            second_key,
            ..
        } => {
            assert_eq!(first_key, "openai:index:VectorStore");
            assert_eq!(second_key, "VectorStore");
        }
        other => panic!("expected DuplicateResource, got {:?}", other),
    }
}

#[test]
fn test_unknown_property_type() {
    let src = r#"{
  "name": "openai",
  "resources": {
    "VectorStore": {
      "inputProperties": { "size": { "type": "integer" } }
    }
  }
}"#;
    let err = parse(src).unwrap_err();
    match *err {
        Error::UnknownType {
            resource,
            property,
            ty,
            span,
            ..
        } => {
            assert_eq!(resource, "VectorStore");
            assert_eq!(property, "size");
            assert_eq!(ty, "integer");
            let span = span.unwrap();
            assert_eq!(&src[span.offset()..span.offset() + span.len()], "integer");
        }
        other => panic!("expected UnknownType, got {:?}", other),
    }
}

#[test]
fn test_array_of_numbers_is_unknown_type() {
    let src = r#"{"name": "openai", "resources": {"R": {"properties": {
        "scores": {"type": "array", "items": {"type": "number"}}
    }}}}"#;
    let err = parse(src).unwrap_err();
    assert!(matches!(*err, Error::UnknownType { ref ty, .. } if ty == "array of number"));
}

#[test]
fn test_map_of_booleans_is_unknown_type() {
    let src = r#"{"name": "openai", "resources": {"R": {"properties": {
        "flags": {"type": "object", "additionalProperties": {"type": "boolean"}}
    }}}}"#;
    let err = parse(src).unwrap_err();
    assert!(matches!(*err, Error::UnknownType { ref ty, .. } if ty == "map of boolean"));
}

#[test]
fn test_nested_object() {
    let src = r#"{"name": "openai", "resources": {"Assistant": {"inputProperties": {
        "toolResources": {
            "type": "object",
            "properties": { "vectorStoreIds": {"type": "array", "items": {"type": "string"}} },
            "required": ["vectorStoreIds"]
        }
    }}}}"#;
    let schema = parse(src).unwrap();
    let prop = &schema.resources[0].input_properties["toolResources"];
    match &prop.kind {
        PropertyKind::Object {
            properties,
            required,
        } => {
            assert_eq!(properties["vectorStoreIds"].kind, PropertyKind::StringArray);
            assert_eq!(required, &vec!["vectorStoreIds".to_string()]);
        }
        other => panic!("expected object, got {:?}", other),
    }
}

#[test]
fn test_undeclared_required_input() {
    let src = r#"{"name": "openai", "resources": {"VectorStore": {
        "inputProperties": { "name": {"type": "string"} },
        "requiredInputs": ["title"]
    }}}"#;
    let err = parse(src).unwrap_err();
    match *err {
        Error::UndeclaredRequired {
            resource,
            name,
            list,
            ..
        } => {
            assert_eq!(resource, "VectorStore");
            assert_eq!(name, "title");
            assert_eq!(list, "requiredInputs");
        }
        other => panic!("expected UndeclaredRequired, got {:?}", other),
    }
}

#[test]
fn test_missing_type_is_validation_error() {
    let src = r#"{"name": "openai", "resources": {"R": {"properties": {"id": {}}}}}"#;
    let err = parse(src).unwrap_err();
    assert!(err.to_string().contains("has no type"));
}

#[test]
fn test_invalid_property_name() {
    let src = r#"{"name": "openai", "resources": {"R": {"properties": {"file-ids": {"type": "string"}}}}}"#;
    let err = parse(src).unwrap_err();
    assert!(matches!(*err, Error::InvalidIdentifier { ref name, .. } if name == "file-ids"));
}

#[test]
fn test_foreign_package_token() {
    let src = r#"{"name": "openai", "resources": {"aws:s3:Bucket": {}}}"#;
    let err = parse(src).unwrap_err();
    assert!(err.to_string().contains("belongs to package 'aws'"));
}

#[test]
fn test_from_file_missing_is_io() {
    let temp = TempDir::new().unwrap();
    let err = Schema::from_file(temp.path().join("missing.json")).unwrap_err();
    assert!(err.is_io());
    assert!(err.to_string().contains("missing.json"));
}

#[test]
fn test_from_file_non_utf8_is_not_io() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("schema.json");
    fs::write(&path, [0xff, 0xfe, 0x00]).unwrap();

    let err = Schema::from_file(&path).unwrap_err();
    assert!(!err.is_io());
}

#[test]
fn test_from_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("schema.json");
    fs::write(&path, VECTOR_STORE).unwrap();

    let schema = Schema::from_file(&path).unwrap();
    assert_eq!(schema.name, "openai");
}
