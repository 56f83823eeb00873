//! Generate operation - schema to SDK files.

use std::path::Path;

use sdkgen_codegen::language::Dispatcher;
use sdkgen_core::emit;
use sdkgen_schema::OptionsFile;
use tracing::info;

use super::{compile, load_schema, warnings};
use crate::{
    failure::{Failure, Stage},
    reports::{GenerateReport, GenerationResult, PreviewFile, WrittenResult},
};

/// Options for the generate operation.
pub struct GenerateOptions<'a> {
    /// Target language identifier or alias.
    pub language: &'a str,
    pub schema: &'a Path,
    pub output_dir: &'a Path,
    /// Options file overriding the schema's `language` section.
    pub options_file: Option<&'a Path>,
    /// Whether to preview without writing files.
    pub dry_run: bool,
    /// Whether to output debug snapshots.
    pub visualize: bool,
}

/// Execute the generate operation.
///
/// Stages run in order and the first failure ends the run. Nothing is
/// written unless every earlier stage succeeded.
pub fn generate(
    dispatcher: &Dispatcher,
    opts: GenerateOptions,
) -> Result<GenerateReport, Failure> {
    let language = dispatcher
        .resolve(opts.language)
        .map_err(|e| Failure::diagnostic(Stage::UnsupportedLanguage, e))?;

    let schema = load_schema(opts.schema)?;
    let mut options = schema.language_options(language);
    if let Some(path) = opts.options_file {
        let file = OptionsFile::from_file(path)
            .map_err(|e| Failure::diagnostic(Stage::LoadOptions, *e))?;
        options.merge(&file.for_language(language));
    }

    let debug_dir = opts.output_dir.join(".sdkgen/debug");
    let mut ctx = compile(schema, opts.visualize.then(|| debug_dir.clone()))?;
    let warnings = warnings(&ctx);
    let package = ctx
        .take_ir()
        .map_err(|e| Failure::new(Stage::LoadSchema, e))?;

    let files = dispatcher
        .generate(language, &package, &options)
        .map_err(|e| Failure::new(Stage::Generate, e))?;

    let result = if opts.dry_run {
        GenerationResult::Preview(
            files
                .iter()
                .map(|f| PreviewFile {
                    path: f.path().to_string(),
                    content: String::from_utf8_lossy(f.content()).into_owned(),
                })
                .collect(),
        )
    } else {
        let stats = emit(opts.output_dir, &files).map_err(Failure::emit)?;
        info!(
            output = %opts.output_dir.display(),
            files = stats.count(),
            bytes = stats.bytes,
            "wrote sdk"
        );
        GenerationResult::Written(WrittenResult {
            output_dir: opts.output_dir.to_path_buf(),
            files: stats.written,
            bytes: stats.bytes,
            debug_dir: opts.visualize.then_some(debug_dir),
        })
    };

    Ok(GenerateReport {
        package: package.meta.name,
        version: package.meta.version,
        language,
        warnings,
        result,
    })
}

#[cfg(test)]
mod tests {
    use std::{fs, path::PathBuf};

    use sdkgen_codegen::testing::VECTOR_STORE_SCHEMA;
    use tempfile::TempDir;

    use super::*;
    use crate::language::dispatcher;

    struct Workspace {
        dir: TempDir,
        schema: PathBuf,
        output_dir: PathBuf,
    }

    impl Workspace {
        fn new() -> Self {
            let dir = TempDir::new().unwrap();
            let schema = dir.path().join("schema.json");
            fs::write(&schema, VECTOR_STORE_SCHEMA).unwrap();
            let output_dir = dir.path().join("out");
            Self {
                dir,
                schema,
                output_dir,
            }
        }

        fn path(&self, name: &str) -> PathBuf {
            self.dir.path().join(name)
        }

        fn run<'a>(
            &'a self,
            language: &'a str,
            configure: impl FnOnce(&mut GenerateOptions<'a>),
        ) -> Result<GenerateReport, Failure> {
            let mut opts = GenerateOptions {
                language,
                schema: &self.schema,
                output_dir: &self.output_dir,
                options_file: None,
                dry_run: false,
                visualize: false,
            };
            configure(&mut opts);
            generate(&dispatcher(), opts)
        }
    }

    #[test]
    fn test_generate_go() {
        let ws = Workspace::new();
        let report = ws.run("go", |_| {}).unwrap();
        match report.result {
            GenerationResult::Written(written) => {
                assert!(written.files.contains(&"openai/vectorStore.go".to_string()));
                assert!(written.bytes > 0);
            }
            GenerationResult::Preview(_) => panic!("expected written files"),
        }
        let go = fs::read_to_string(ws.path("out/openai/vectorStore.go")).unwrap();
        assert!(go.contains("func NewVectorStore("));
        assert!(go.contains("func (o VectorStoreOutput) CreatedAt() pulumi.Float64Output {"));
    }

    #[test]
    fn test_alias_resolves() {
        let ws = Workspace::new();
        let report = ws.run("ts", |_| {}).unwrap();
        assert_eq!(report.language.as_str(), "nodejs");
        let manifest = fs::read_to_string(ws.path("out/package.json")).unwrap();
        assert!(manifest.contains("\"openai\": \"^4.0.0\""));
    }

    #[test]
    fn test_unsupported_language_writes_nothing() {
        let ws = Workspace::new();
        let failure = ws.run("cobol", |_| {}).unwrap_err();
        assert_eq!(failure.stage, Stage::UnsupportedLanguage);
        assert!(failure.to_string().starts_with("Unsupported language: unsupported language 'cobol'"));
        assert!(!ws.path("out").exists());
    }

    #[test]
    fn test_missing_schema_is_read_failure() {
        let ws = Workspace::new();
        fs::remove_file(&ws.schema).unwrap();
        let failure = ws.run("go", |_| {}).unwrap_err();
        assert_eq!(failure.stage, Stage::ReadSchema);
    }

    #[test]
    fn test_malformed_schema_is_parse_failure() {
        let ws = Workspace::new();
        fs::write(&ws.schema, "{\"name\": ").unwrap();
        let failure = ws.run("python", |_| {}).unwrap_err();
        assert_eq!(failure.stage, Stage::ParseSchema);
        assert!(!ws.path("out").exists());
    }

    #[test]
    fn test_lint_error_is_load_failure() {
        let ws = Workspace::new();
        fs::write(
            &ws.schema,
            r#"{"name": "openai", "resources": {"openai:index:File": {}, "openai:beta:file": {}}}"#,
        )
        .unwrap();
        let failure = ws.run("go", |_| {}).unwrap_err();
        assert_eq!(failure.stage, Stage::LoadSchema);
        assert!(failure.message.contains("validation failed"));
    }

    #[test]
    fn test_generation_failure() {
        let ws = Workspace::new();
        fs::write(
            &ws.schema,
            r#"{"name": "openai", "resources": {"Assistant": {"description": "An assistant", "inputProperties": {
                "toolResources": {"type": "object", "properties": {"fileIds": {"type": "array", "items": {"type": "string"}}}}
            }}}}"#,
        )
        .unwrap();
        let failure = ws.run("go", |_| {}).unwrap_err();
        assert_eq!(failure.stage, Stage::Generate);
        assert!(failure.message.contains("property 'toolResources' of resource 'Assistant'"));
        assert!(!ws.path("out").exists());
    }

    #[test]
    fn test_options_file_overrides_schema() {
        let ws = Workspace::new();
        let options = ws.path("options.toml");
        fs::write(&options, "[nodejs.dependencies]\nopenai = \"^5.0.0\"\n").unwrap();
        ws.run("nodejs", |opts| opts.options_file = Some(options.as_path())).unwrap();
        let manifest = fs::read_to_string(ws.path("out/package.json")).unwrap();
        assert!(manifest.contains("\"openai\": \"^5.0.0\""));
        assert!(!manifest.contains("^4.0.0"));
    }

    #[test]
    fn test_bad_options_file() {
        let ws = Workspace::new();
        let options = ws.path("options.json");
        fs::write(&options, r#"{"cobol": {}}"#).unwrap();
        let failure = ws
            .run("nodejs", |opts| opts.options_file = Some(options.as_path()))
            .unwrap_err();
        assert_eq!(failure.stage, Stage::LoadOptions);
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let ws = Workspace::new();
        let report = ws.run("dotnet", |opts| opts.dry_run = true).unwrap();
        match report.result {
            GenerationResult::Preview(files) => {
                assert!(files.iter().any(|f| f.path == "VectorStore.cs"));
            }
            GenerationResult::Written(_) => panic!("expected a preview"),
        }
        assert!(!ws.path("out").exists());
    }

    #[test]
    fn test_visualize_writes_snapshots() {
        let ws = Workspace::new();
        let report = ws.run("python", |opts| opts.visualize = true).unwrap();
        let debug_dir = ws.path("out/.sdkgen/debug");
        assert!(debug_dir.join("lower.json").exists());
        match report.result {
            GenerationResult::Written(written) => assert_eq!(written.debug_dir, Some(debug_dir)),
            GenerationResult::Preview(_) => panic!("expected written files"),
        }
    }
}
