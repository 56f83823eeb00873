//! Python type mapper implementation.

use sdkgen_codegen::{Error, Result, language::TypeMapper};
use sdkgen_ir::{Property, PropertyType};
use sdkgen_schema::Language;

/// Maps IR properties onto `pulumi.Input` / `pulumi.Output` annotations.
pub struct PythonTypeMapper;

impl PythonTypeMapper {
    /// Plain annotation of a resolved value.
    pub fn plain_type(&self, resource: &str, property: &Property) -> Result<&'static str> {
        match property.ty {
            PropertyType::String => Ok("str"),
            PropertyType::Number => Ok("float"),
            PropertyType::Boolean => Ok("bool"),
            PropertyType::StringArray => Ok("Sequence[str]"),
            PropertyType::StringMap => Ok("Mapping[str, str]"),
            PropertyType::Object { .. } => {
                Err(Error::unrepresentable(Language::Python, resource, property))
            }
        }
    }

    /// Annotation of an input value, ignoring whether it is required.
    pub fn input_value_type(&self, resource: &str, property: &Property) -> Result<String> {
        let inner = match property.ty {
            PropertyType::StringArray => "Sequence[pulumi.Input[str]]",
            PropertyType::StringMap => "Mapping[str, pulumi.Input[str]]",
            _ => self.plain_type(resource, property)?,
        };
        Ok(format!("pulumi.Input[{}]", inner))
    }

    /// Annotation of a keyword argument of the resource constructor, where
    /// every property defaults to `None`.
    pub fn keyword_type(&self, resource: &str, property: &Property) -> Result<String> {
        Ok(format!(
            "Optional[{}]",
            self.input_value_type(resource, property)?
        ))
    }

    /// Example literal for `property`, used in generated documentation.
    pub fn example_value(&self, property: &Property) -> &'static str {
        match property.ty {
            PropertyType::String => "\"example\"",
            PropertyType::Number => "1.0",
            PropertyType::Boolean => "True",
            PropertyType::StringArray => "[\"example\"]",
            PropertyType::StringMap => "{\"key\": \"value\"}",
            PropertyType::Object { .. } => "None",
        }
    }
}

impl TypeMapper for PythonTypeMapper {
    fn language(&self) -> Language {
        Language::Python
    }

    fn input_type(&self, resource: &str, property: &Property) -> Result<String> {
        if property.required {
            self.input_value_type(resource, property)
        } else {
            self.keyword_type(resource, property)
        }
    }

    fn output_type(&self, resource: &str, property: &Property) -> Result<String> {
        let plain = self.plain_type(resource, property)?;
        Ok(if property.required {
            format!("pulumi.Output[{}]", plain)
        } else {
            format!("pulumi.Output[Optional[{}]]", plain)
        })
    }
}
