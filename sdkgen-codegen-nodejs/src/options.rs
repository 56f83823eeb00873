//! Options accepted by the Node.js backend.

use std::collections::BTreeMap;

use sdkgen_codegen::{Error, Result};
use sdkgen_ir::PackageMeta;
use sdkgen_schema::Language;
use serde::{Deserialize, Deserializer, de::Error as _};
use serde_json::{Map, Value};

/// The `nodejs` option bag.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct NodeOptions {
    /// npm package name, default `@pulumi/<pkg>`.
    pub package_name: Option<String>,
    #[serde(deserialize_with = "map_or_json")]
    pub dependencies: Option<BTreeMap<String, String>>,
    #[serde(deserialize_with = "map_or_json")]
    pub dev_dependencies: Option<BTreeMap<String, String>>,
    /// Base document for `package.json`, as an object or JSON text.
    #[serde(alias = "packagejsontemplate")]
    pub package_json_template: Option<Value>,
}

impl NodeOptions {
    pub fn package_name(&self, meta: &PackageMeta) -> String {
        self.package_name
            .clone()
            .unwrap_or_else(|| format!("@pulumi/{}", meta.name))
    }

    /// The template with `${PKG}` and `${VERSION}` substituted.
    pub fn template(&self, meta: &PackageMeta) -> Result<Option<Map<String, Value>>> {
        let Some(template) = &self.package_json_template else {
            return Ok(None);
        };
        let text = match template {
            Value::String(text) => text.clone(),
            other => other.to_string(),
        };
        let text = text
            .replace("${PKG}", &self.package_name(meta))
            .replace("${VERSION}", &meta.version);

        match serde_json::from_str(&text) {
            Ok(Value::Object(map)) => Ok(Some(map)),
            Ok(_) => Err(Error::invalid_options(
                Language::NodeJs,
                "packageJsonTemplate must be a JSON object",
            )),
            Err(e) => Err(Error::invalid_options(
                Language::NodeJs,
                format!("packageJsonTemplate is not valid JSON: {}", e),
            )),
        }
    }
}

/// Accept a name-to-version map, or the same map encoded as JSON text.
fn map_or_json<'de, D>(
    deserializer: D,
) -> std::result::Result<Option<BTreeMap<String, String>>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Deps {
        Map(BTreeMap<String, String>),
        Text(String),
    }

    match Option::<Deps>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Deps::Map(map)) => Ok(Some(map)),
        Some(Deps::Text(text)) => serde_json::from_str(&text)
            .map(Some)
            .map_err(|e| D::Error::custom(format!("invalid dependency map: {}", e))),
    }
}
