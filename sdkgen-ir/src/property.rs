//! Property types.

use serde::Serialize;

/// A typed property of a resource.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Property {
    /// Property name as declared in the schema (camelCase by convention).
    pub name: String,
    #[serde(rename = "type")]
    pub ty: PropertyType,
    pub required: bool,
    /// Whether the value must be redacted by the runtime.
    pub secret: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Property {
    pub fn new(name: impl Into<String>, ty: PropertyType) -> Self {
        Self {
            name: name.into(),
            ty,
            required: false,
            secret: false,
            description: None,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn secret(mut self) -> Self {
        self.secret = true;
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Whether this is the engine-assigned `id` or `urn` every resource
    /// already exposes.
    pub fn is_resource_identity(&self) -> bool {
        matches!(self.name.as_str(), "id" | "urn")
    }
}

/// Language-agnostic property type.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PropertyType {
    String,
    Number,
    Boolean,
    StringArray,
    StringMap,
    /// A nested object with its own properties, sorted by name.
    Object { properties: Vec<Property> },
}

impl PropertyType {
    /// Short name used in messages and reports.
    pub fn describe(&self) -> &'static str {
        match self {
            PropertyType::String => "string",
            PropertyType::Number => "number",
            PropertyType::Boolean => "boolean",
            PropertyType::StringArray => "array of string",
            PropertyType::StringMap => "map of string",
            PropertyType::Object { .. } => "object",
        }
    }

    pub fn is_object(&self) -> bool {
        matches!(self, PropertyType::Object { .. })
    }
}
