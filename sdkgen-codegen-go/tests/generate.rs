//! End-to-end tests for Go SDK generation.

use sdkgen_codegen::{
    language::LanguageCodegen,
    testing::{
        colliding_package, file_content, generate_to_temp, nested_object_package,
        vector_store_package,
    },
};
use sdkgen_codegen_go::Generator;
use sdkgen_schema::LanguageOptions;
use serde_json::json;

fn generate(options: &[(&str, serde_json::Value)]) -> Vec<sdkgen_core::GeneratedFile> {
    let options: LanguageOptions = options.iter().cloned().collect();
    Generator
        .generate(&vector_store_package(), &options)
        .expect("generation failed")
}

#[test]
fn test_vector_store_file_set() {
    let files = generate(&[]);
    let paths: Vec<_> = files.iter().map(|f| f.path()).collect();
    assert_eq!(
        paths,
        vec![
            "README.md",
            "openai/doc.go",
            "openai/init.go",
            "openai/internal/pulumiUtilities.go",
            "openai/pulumi-plugin.json",
            "openai/vectorStore.go",
        ]
    );
}

#[test]
fn test_vector_store_api() {
    let files = generate(&[]);
    let content = file_content(&files, "openai/vectorStore.go");

    assert!(content.starts_with("// Code generated by sdkgen DO NOT EDIT.\n"));
    assert!(content.contains("\npackage openai\n"));
    assert!(content.contains("func NewVectorStore(ctx *pulumi.Context,"));
    assert!(content.contains("func GetVectorStore(ctx *pulumi.Context,"));
    assert!(content.contains("func (o VectorStoreOutput) Id() pulumi.StringOutput {"));
    assert!(content.contains("func (o VectorStoreOutput) CreatedAt() pulumi.Float64Output {"));
    assert!(content.contains("func (o VectorStoreOutput) Status() pulumi.StringOutput {"));
    assert!(content.contains("pulumi.ToSecret(args.ApiKey)"));
    assert!(content.contains("\t\t\"apiKey\",\n"));
}

#[test]
fn test_init_registers_token() {
    let files = generate(&[]);
    let content = file_content(&files, "openai/init.go");
    assert!(content.contains("case \"openai:index:VectorStore\":\n\t\tr = &VectorStore{}"));
    assert!(content.contains("\"github.com/openai/pulumi-openai/sdk/go/openai/internal\""));
}

#[test]
fn test_plugin_manifest() {
    let files = generate(&[]);
    let manifest: serde_json::Value =
        serde_json::from_str(file_content(&files, "openai/pulumi-plugin.json")).unwrap();
    assert_eq!(manifest, json!({"resource": true, "name": "openai", "version": "0.1.0"}));
}

#[test]
fn test_options_change_layout() {
    let files = generate(&[
        ("packageName", json!("oai")),
        ("importBasePath", json!("example.com/sdk/oai")),
        ("generateResourceContainerTypes", json!("false")),
    ]);

    let content = file_content(&files, "oai/vectorStore.go");
    assert!(content.contains("\npackage oai\n"));
    assert!(content.contains("\"example.com/sdk/oai/internal\""));
    assert!(!content.contains("VectorStoreArray"));
    assert!(file_content(&files, "README.md").contains("go get example.com/sdk/oai"));
}

#[test]
fn test_unknown_option_is_rejected() {
    let options: LanguageOptions = [("packagename", "oai")].into_iter().collect();
    let err = Generator
        .generate(&vector_store_package(), &options)
        .unwrap_err();
    assert_eq!(
        err.to_string().split(':').next(),
        Some("go generation failed")
    );
    assert!(err.to_string().contains("packagename"));
}

#[test]
fn test_nested_object_is_generation_error() {
    let err = Generator
        .generate(&nested_object_package(), &LanguageOptions::new())
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "go generation failed: property 'toolResources' of resource 'Assistant' has type object, which is not supported"
    );
}

#[test]
fn test_colliding_fields_are_rejected() {
    let err = Generator
        .generate(&colliding_package(), &LanguageOptions::new())
        .unwrap_err();
    assert!(err.to_string().contains("both map to 'FileIds'"));
}

#[test]
fn test_generation_is_deterministic() {
    assert_eq!(generate(&[]), generate(&[]));
}

#[test]
fn test_emits_to_disk() {
    let files = generate(&[]);
    let temp = generate_to_temp(&files).unwrap();
    let written = std::fs::read_to_string(temp.path().join("openai/vectorStore.go")).unwrap();
    assert_eq!(written, file_content(&files, "openai/vectorStore.go"));
}
