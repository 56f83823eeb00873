//! TypeScript type mapper implementation.

use sdkgen_codegen::{Result, language::TypeMapper};
use sdkgen_ir::{Property, PropertyType};
use sdkgen_schema::Language;

/// TypeScript type mapper implementation.
///
/// Every IR type is representable: nested objects become inline structural
/// types.
pub struct NodeTypeMapper;

impl NodeTypeMapper {
    /// The plain TypeScript type of a value.
    pub fn plain_type(&self, ty: &PropertyType) -> String {
        match ty {
            PropertyType::String => "string".to_string(),
            PropertyType::Number => "number".to_string(),
            PropertyType::Boolean => "boolean".to_string(),
            PropertyType::StringArray => "string[]".to_string(),
            PropertyType::StringMap => "{[key: string]: string}".to_string(),
            PropertyType::Object { properties } => {
                object_type(properties, |p| self.plain_type(&p.ty))
            }
        }
    }

    /// The type of a value accepted as input, with every level wrapped in
    /// `pulumi.Input` so callers can pass outputs of other resources.
    pub fn input_value_type(&self, ty: &PropertyType) -> String {
        let inner = match ty {
            PropertyType::StringArray => "pulumi.Input<string>[]".to_string(),
            PropertyType::StringMap => "{[key: string]: pulumi.Input<string>}".to_string(),
            PropertyType::Object { properties } => {
                object_type(properties, |p| self.input_value_type(&p.ty))
            }
            scalar => self.plain_type(scalar),
        };
        format!("pulumi.Input<{}>", inner)
    }

    /// Example literal for `property`, used in generated documentation.
    pub fn example_value(&self, property: &Property) -> String {
        match &property.ty {
            PropertyType::String => "\"example\"".to_string(),
            PropertyType::Number => "1".to_string(),
            PropertyType::Boolean => "true".to_string(),
            PropertyType::StringArray => "[\"example\"]".to_string(),
            PropertyType::StringMap => "{ key: \"value\" }".to_string(),
            PropertyType::Object { properties } => {
                let fields: Vec<String> = properties
                    .iter()
                    .filter(|p| p.required)
                    .map(|p| format!("{}: {}", p.name, self.example_value(p)))
                    .collect();
                if fields.is_empty() {
                    "{}".to_string()
                } else {
                    format!("{{ {} }}", fields.join(", "))
                }
            }
        }
    }
}

/// Inline structural type, e.g. `{ anchor: string; days?: number }`.
fn object_type(properties: &[Property], field_type: impl Fn(&Property) -> String) -> String {
    if properties.is_empty() {
        return "{}".to_string();
    }
    let fields: Vec<String> = properties
        .iter()
        .map(|p| {
            let optional = if p.required { "" } else { "?" };
            format!("{}{}: {}", p.name, optional, field_type(p))
        })
        .collect();
    format!("{{ {} }}", fields.join("; "))
}

impl TypeMapper for NodeTypeMapper {
    fn language(&self) -> Language {
        Language::NodeJs
    }

    fn input_type(&self, _resource: &str, property: &Property) -> Result<String> {
        Ok(self.input_value_type(&property.ty))
    }

    fn output_type(&self, _resource: &str, property: &Property) -> Result<String> {
        let plain = self.plain_type(&property.ty);
        Ok(if property.required {
            format!("pulumi.Output<{}>", plain)
        } else {
            format!("pulumi.Output<{} | undefined>", plain)
        })
    }
}
