//! Package Intermediate Representation.
//!
//! The lowered form of a schema: package metadata plus resources whose
//! properties are split into inputs and outputs, each sorted by name.

use serde::Serialize;

use crate::Property;

/// A package of resources, ready for code generation.
#[derive(Debug, Clone, Serialize)]
pub struct Package {
    pub meta: PackageMeta,
    /// Resources sorted by name.
    pub resources: Vec<Resource>,
}

/// Package metadata.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PackageMeta {
    /// Package name, e.g. `openai`.
    pub name: String,
    /// Version string, `X.Y.Z[-pre]`.
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub homepage: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repository: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<String>,
}

/// A resource type.
#[derive(Debug, Clone, Serialize)]
pub struct Resource {
    /// Full type token, `pkg:module:Name`.
    pub token: String,
    pub module: String,
    /// Resource name, e.g. `VectorStore`.
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Properties settable at creation, sorted by name.
    pub inputs: Vec<Property>,
    /// Properties readable after creation, sorted by name.
    pub outputs: Vec<Property>,
}

impl Resource {
    pub fn input(&self, name: &str) -> Option<&Property> {
        self.inputs.iter().find(|p| p.name == name)
    }

    pub fn output(&self, name: &str) -> Option<&Property> {
        self.outputs.iter().find(|p| p.name == name)
    }

    pub fn is_input(&self, name: &str) -> bool {
        self.input(name).is_some()
    }

    pub fn required_inputs(&self) -> impl Iterator<Item = &Property> {
        self.inputs.iter().filter(|p| p.required)
    }

    pub fn secret_inputs(&self) -> impl Iterator<Item = &Property> {
        self.inputs.iter().filter(|p| p.secret)
    }

    /// Names the runtime must treat as secret outputs: every secret input and
    /// every secret output, sorted and deduplicated.
    pub fn additional_secret_outputs(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .inputs
            .iter()
            .chain(&self.outputs)
            .filter(|p| p.secret)
            .map(|p| p.name.as_str())
            .collect();
        names.sort_unstable();
        names.dedup();
        names
    }
}
