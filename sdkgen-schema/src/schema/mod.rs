//! The resource schema model.
//!
//! A schema file is deserialized into private document types, then checked
//! and resolved into the public [`Schema`]. Every `Schema` value has passed
//! validation: resource names are unique, every property type is one of the
//! supported kinds and every required entry names a declared property.

mod document;
mod parse;
mod validate;

pub use parse::parse_schema;
pub use validate::ParseContext;

use indexmap::IndexMap;
use sdkgen_core::Version;

use crate::{Language, LanguageOptions, options::merge_sections};

/// A validated package of resource types.
#[derive(Debug, Clone)]
pub struct Schema {
    /// Package name, e.g. `openai`.
    pub name: String,
    pub version: Version,
    pub description: Option<String>,
    pub display_name: Option<String>,
    pub publisher: Option<String>,
    pub homepage: Option<String>,
    pub repository: Option<String>,
    pub license: Option<String>,
    pub keywords: Vec<String>,
    /// Resources in document order.
    pub resources: Vec<ResourceSpec>,
    /// Raw `language` sections, keyed as written.
    pub language: IndexMap<String, LanguageOptions>,
}

impl Schema {
    /// Option defaults the schema carries for `language`.
    pub fn language_options(&self, language: Language) -> LanguageOptions {
        merge_sections(language, &self.language)
    }
}

/// A resource type token, `pkg:module:Name`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceToken {
    pub package: String,
    pub module: String,
    pub name: String,
}

impl ResourceToken {
    /// Resolve a resource key. A bare `Name` lives in the `index` module.
    pub fn parse(key: &str, package: &str) -> std::result::Result<Self, String> {
        let parts: Vec<&str> = key.split(':').collect();
        match parts.as_slice() {
            [name] => Ok(Self {
                package: package.to_string(),
                module: "index".to_string(),
                name: name.to_string(),
            }),
            [pkg, module, name] => {
                if *pkg != package {
                    return Err(format!(
                        "resource '{}' belongs to package '{}', expected '{}'",
                        key, pkg, package
                    ));
                }
                if module.is_empty() {
                    return Err(format!("resource '{}' has an empty module", key));
                }
                Ok(Self {
                    package: pkg.to_string(),
                    module: module.to_string(),
                    name: name.to_string(),
                })
            }
            _ => Err(format!(
                "resource key '{}' must be 'Name' or 'package:module:Name'",
                key
            )),
        }
    }
}

impl std::fmt::Display for ResourceToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.package, self.module, self.name)
    }
}

/// A validated resource definition.
#[derive(Debug, Clone)]
pub struct ResourceSpec {
    /// The key as written in the schema.
    pub key: String,
    pub token: ResourceToken,
    pub description: Option<String>,
    /// Properties settable at creation.
    pub input_properties: IndexMap<String, PropertySpec>,
    pub required_inputs: Vec<String>,
    /// Properties readable after creation.
    pub properties: IndexMap<String, PropertySpec>,
    pub required: Vec<String>,
}

impl ResourceSpec {
    pub fn name(&self) -> &str {
        &self.token.name
    }

    pub fn is_input_required(&self, name: &str) -> bool {
        self.required_inputs.iter().any(|r| r == name)
    }

    pub fn is_output_required(&self, name: &str) -> bool {
        self.required.iter().any(|r| r == name)
    }
}

/// A validated property definition.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertySpec {
    pub kind: PropertyKind,
    pub secret: bool,
    pub description: Option<String>,
}

/// The resolved type of a property.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyKind {
    String,
    Number,
    Boolean,
    StringArray,
    StringMap,
    Object {
        properties: IndexMap<String, PropertySpec>,
        required: Vec<String>,
    },
}

impl PropertyKind {
    /// Short name used in messages and reports.
    pub fn describe(&self) -> &'static str {
        match self {
            PropertyKind::String => "string",
            PropertyKind::Number => "number",
            PropertyKind::Boolean => "boolean",
            PropertyKind::StringArray => "array of string",
            PropertyKind::StringMap => "map of string",
            PropertyKind::Object { .. } => "object",
        }
    }
}
