//! Per-language backend options.
//!
//! Options reach a backend from two places: the schema's `language` section
//! and an options file passed on the command line. Both are string-keyed
//! bags here; each backend decodes the bag into its own typed struct.

use std::{path::Path, str::FromStr};

use indexmap::IndexMap;
use miette::SourceSpan;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::Value;

use crate::{Error, Language, Result, error::SourceContext, span::find_json_key_spans};

/// An opaque option bag for one language backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LanguageOptions(IndexMap<String, Value>);

impl LanguageOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an option, replacing any previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Overlay `other` on top of these options. Keys in `other` win.
    pub fn merge(&mut self, other: &LanguageOptions) {
        for (key, value) in &other.0 {
            self.0.insert(key.clone(), value.clone());
        }
    }

    /// Decode the bag into a backend's typed options struct.
    pub fn decode<T: DeserializeOwned>(&self) -> std::result::Result<T, serde_json::Error> {
        let map: serde_json::Map<String, Value> = self
            .0
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        serde_json::from_value(Value::Object(map))
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for LanguageOptions {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Merge every section whose key names `language`, in document order.
///
/// Keys that are not language identifiers are skipped.
pub(crate) fn merge_sections<'a>(
    language: Language,
    sections: impl IntoIterator<Item = (&'a String, &'a LanguageOptions)>,
) -> LanguageOptions {
    let mut merged = LanguageOptions::new();
    for (key, options) in sections {
        if Language::from_str(key).is_ok_and(|lang| lang == language) {
            merged.merge(options);
        }
    }
    merged
}

/// Options file format, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionsFormat {
    Json,
    Toml,
}

impl OptionsFormat {
    /// `.toml` files are TOML; anything else is read as JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => OptionsFormat::Toml,
            _ => OptionsFormat::Json,
        }
    }
}

/// A parsed options file: one option table per language.
///
/// ```json
/// { "nodejs": { "dependencies": { "openai": "^4.0.0" } } }
/// ```
#[derive(Debug, Clone, Default)]
pub struct OptionsFile {
    sections: IndexMap<String, LanguageOptions>,
}

impl OptionsFile {
    /// Read and parse an options file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        Self::parse(
            &content,
            &path.display().to_string(),
            OptionsFormat::from_path(path),
        )
    }

    /// Parse options from a string with a filename for error reporting.
    pub fn parse(content: &str, filename: &str, format: OptionsFormat) -> Result<Self> {
        let ctx = SourceContext::new(content, filename);
        let sections: IndexMap<String, LanguageOptions> = match format {
            OptionsFormat::Json => serde_json::from_str(content).map_err(|e| {
                let span = ctx.parse_error_span(&e);
                ctx.options_error(e.to_string(), span)
            })?,
            OptionsFormat::Toml => toml::from_str(content).map_err(|e| {
                let span = e.span().map(SourceSpan::from);
                ctx.options_error(e.message().to_string(), span)
            })?,
        };

        for key in sections.keys() {
            if let Err(message) = Language::from_str(key) {
                let span = match format {
                    OptionsFormat::Json => find_json_key_spans(content, key).into_iter().next(),
                    OptionsFormat::Toml => find_toml_table_span(content, key),
                };
                return Err(ctx.options_error(message, span));
            }
        }

        Ok(Self { sections })
    }

    /// Options for one language, merged across aliased sections.
    pub fn for_language(&self, language: Language) -> LanguageOptions {
        merge_sections(language, &self.sections)
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

/// Find `[key]` or `key =` in TOML source.
fn find_toml_table_span(src: &str, key: &str) -> Option<SourceSpan> {
    if let Some(pos) = src.find(&format!("[{}]", key)) {
        return Some(SourceSpan::from((pos + 1, key.len())));
    }
    src.lines()
        .scan(0usize, |offset, line| {
            let start = *offset;
            *offset += line.len() + 1;
            Some((start, line))
        })
        .find(|(_, line)| {
            line.strip_prefix(key)
                .is_some_and(|rest| rest.trim_start().starts_with('='))
        })
        .map(|(start, _)| SourceSpan::from((start, key.len())))
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;
    use serde_json::json;

    use super::*;

    #[test]
    fn test_merge_overrides_key_by_key() {
        let mut base: LanguageOptions = [("packageName", "@pulumi/openai"), ("license", "MIT")]
            .into_iter()
            .collect();
        let overlay: LanguageOptions = [("packageName", "openai-sdk")].into_iter().collect();

        base.merge(&overlay);

        assert_eq!(base.get("packageName"), Some(&json!("openai-sdk")));
        assert_eq!(base.get("license"), Some(&json!("MIT")));
        assert_eq!(base.len(), 2);
    }

    #[test]
    fn test_decode_typed() {
        #[derive(Deserialize)]
        #[serde(rename_all = "camelCase", deny_unknown_fields)]
        struct GoOptions {
            import_base_path: String,
        }

        let mut options = LanguageOptions::new();
        options.insert("importBasePath", "github.com/acme/sdk");
        let decoded: GoOptions = options.decode().unwrap();
        assert_eq!(decoded.import_base_path, "github.com/acme/sdk");

        options.insert("importBasPath", "typo");
        assert!(options.decode::<GoOptions>().is_err());
    }

    #[test]
    fn test_parse_json_file() {
        let src = r#"{ "nodejs": { "dependencies": { "openai": "^4.0.0" } } }"#;
        let file = OptionsFile::parse(src, "options.json", OptionsFormat::Json).unwrap();
        let options = file.for_language(Language::NodeJs);
        assert_eq!(
            options.get("dependencies"),
            Some(&json!({ "openai": "^4.0.0" }))
        );
        assert!(file.for_language(Language::Go).is_empty());
    }

    #[test]
    fn test_parse_toml_file() {
        let src = "[go]\nimportBasePath = \"github.com/acme/sdk\"\n\n[python.requires]\nopenai = \">=1.0\"\n";
        let file = OptionsFile::parse(src, "options.toml", OptionsFormat::Toml).unwrap();
        assert_eq!(
            file.for_language(Language::Go).get("importBasePath"),
            Some(&json!("github.com/acme/sdk"))
        );
        assert_eq!(
            file.for_language(Language::Python).get("requires"),
            Some(&json!({ "openai": ">=1.0" }))
        );
    }

    #[test]
    fn test_aliases_merge_in_order() {
        let src = r#"{ "csharp": { "rootNamespace": "Acme" }, "dotnet": { "rootNamespace": "Pulumi" } }"#;
        let file = OptionsFile::parse(src, "options.json", OptionsFormat::Json).unwrap();
        assert_eq!(
            file.for_language(Language::DotNet).get("rootNamespace"),
            Some(&json!("Pulumi"))
        );
    }

    #[test]
    fn test_unknown_language_section() {
        let src = r#"{ "cobol": {} }"#;
        let err = OptionsFile::parse(src, "options.json", OptionsFormat::Json).unwrap_err();
        match *err {
            Error::OptionsParse { span, message, .. } => {
                assert!(message.contains("cobol"));
                assert_eq!(span.map(|s| s.offset()), Some(3));
            }
            other => panic!("expected OptionsParse, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_toml_has_span() {
        let src = "[go\nimportBasePath = 1";
        let err = OptionsFile::parse(src, "options.toml", OptionsFormat::Toml).unwrap_err();
        assert!(matches!(*err, Error::OptionsParse { span: Some(_), .. }));
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(
            OptionsFormat::from_path(Path::new("opts.toml")),
            OptionsFormat::Toml
        );
        assert_eq!(
            OptionsFormat::from_path(Path::new("opts.json")),
            OptionsFormat::Json
        );
        assert_eq!(
            OptionsFormat::from_path(Path::new("opts")),
            OptionsFormat::Json
        );
    }

    #[test]
    fn test_find_toml_table_span() {
        let src = "[go]\nx = 1\n";
        assert_eq!(find_toml_table_span(src, "go").map(|s| s.offset()), Some(1));
        let inline = "go = { x = 1 }\n";
        assert_eq!(find_toml_table_span(inline, "go").map(|s| s.offset()), Some(0));
    }
}
