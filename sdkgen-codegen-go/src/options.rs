//! Options accepted by the Go backend.

use sdkgen_codegen::{Error, Result};
use sdkgen_core::to_kebab_case;
use sdkgen_ir::PackageMeta;
use sdkgen_schema::Language;
use serde::{Deserialize, Deserializer, de::Error as _};

use crate::naming::GO_KEYWORDS;

/// The `go` option bag, as written in the schema or an options file.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct GoOptions {
    /// Module import path of the generated package.
    pub import_base_path: Option<String>,
    pub package_name: Option<String>,
    #[serde(deserialize_with = "bool_or_string")]
    pub generate_resource_container_types: Option<bool>,
}

/// Options with every default applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoSettings {
    pub import_base_path: String,
    pub package_name: String,
    pub container_types: bool,
}

impl GoSettings {
    /// Import path of the generated `internal` package.
    pub fn internal_import(&self) -> String {
        format!("{}/internal", self.import_base_path)
    }
}

impl GoOptions {
    pub fn resolve(self, meta: &PackageMeta) -> Result<GoSettings> {
        let package_name = match self.package_name {
            Some(name) => {
                validate_package_name(&name)?;
                name
            }
            None => default_package_name(&meta.name),
        };

        let import_base_path = self.import_base_path.unwrap_or_else(|| {
            let owner = meta
                .publisher
                .as_deref()
                .map(to_kebab_case)
                .filter(|owner| !owner.is_empty())
                .unwrap_or_else(|| package_name.clone());
            format!(
                "github.com/{}/pulumi-{}/sdk/go/{}",
                owner, meta.name, package_name
            )
        });

        Ok(GoSettings {
            import_base_path: import_base_path.trim_end_matches('/').to_string(),
            package_name,
            container_types: self.generate_resource_container_types.unwrap_or(true),
        })
    }
}

/// The schema name reduced to lowercase letters and digits.
fn default_package_name(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect();
    if cleaned.is_empty() || cleaned.starts_with(|c: char| c.is_ascii_digit()) {
        format!("pkg{}", cleaned)
    } else if GO_KEYWORDS.contains(&cleaned.as_str()) {
        format!("{}pkg", cleaned)
    } else {
        cleaned
    }
}

fn validate_package_name(name: &str) -> Result<()> {
    let valid = name.starts_with(|c: char| c.is_ascii_lowercase())
        && name
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
        && !GO_KEYWORDS.contains(&name);
    if valid {
        Ok(())
    } else {
        Err(Error::invalid_options(
            Language::Go,
            format!("packageName '{}' is not a valid Go package name", name),
        ))
    }
}

/// Accept `true`, `false`, `"true"` or `"false"`.
fn bool_or_string<'de, D>(deserializer: D) -> std::result::Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Text(String),
    }

    match Option::<Flag>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Flag::Bool(value)) => Ok(Some(value)),
        Some(Flag::Text(text)) => match text.as_str() {
            "true" => Ok(Some(true)),
            "false" => Ok(Some(false)),
            other => Err(D::Error::custom(format!(
                "expected \"true\" or \"false\", found \"{}\"",
                other
            ))),
        },
    }
}
