//! C# type mapper implementation.

use sdkgen_codegen::{Error, Result, language::TypeMapper};
use sdkgen_ir::{Property, PropertyType};
use sdkgen_schema::Language;

/// Maps IR properties onto the Pulumi .NET SDK's `Input`/`Output` types.
///
/// Optional scalars are nullable. Lists and maps use `InputList`/`InputMap`
/// for inputs and immutable collections for outputs, and are never null.
pub struct DotNetTypeMapper;

impl DotNetTypeMapper {
    fn element(&self, resource: &str, property: &Property) -> Result<&'static str> {
        match property.ty {
            PropertyType::String | PropertyType::StringArray | PropertyType::StringMap => {
                Ok("string")
            }
            PropertyType::Number => Ok("double"),
            PropertyType::Boolean => Ok("bool"),
            PropertyType::Object { .. } => {
                Err(Error::unrepresentable(Language::DotNet, resource, property))
            }
        }
    }

    /// Type of the resolved output value.
    pub fn output_value_type(&self, resource: &str, property: &Property) -> Result<String> {
        let element = self.element(resource, property)?;
        Ok(match property.ty {
            PropertyType::StringArray => format!("ImmutableArray<{}>", element),
            PropertyType::StringMap => format!("ImmutableDictionary<string, {}>", element),
            _ if property.required => element.to_string(),
            _ => format!("{}?", element),
        })
    }

    /// Example initializer for `property`, used in generated documentation.
    pub fn example_value(&self, property: &Property) -> &'static str {
        match property.ty {
            PropertyType::String => "\"example\"",
            PropertyType::Number => "1",
            PropertyType::Boolean => "true",
            PropertyType::StringArray => "new[] { \"example\" }",
            PropertyType::StringMap => {
                "new Dictionary<string, string> { [\"key\"] = \"value\" }"
            }
            PropertyType::Object { .. } => "null",
        }
    }
}

/// Whether `ty` maps to `InputList`/`InputMap`.
pub fn is_collection(ty: &PropertyType) -> bool {
    matches!(ty, PropertyType::StringArray | PropertyType::StringMap)
}

impl TypeMapper for DotNetTypeMapper {
    fn language(&self) -> Language {
        Language::DotNet
    }

    /// The input type without nullability, which depends on where the
    /// property is declared.
    fn input_type(&self, resource: &str, property: &Property) -> Result<String> {
        let element = self.element(resource, property)?;
        Ok(match property.ty {
            PropertyType::StringArray => format!("InputList<{}>", element),
            PropertyType::StringMap => format!("InputMap<{}>", element),
            _ => format!("Input<{}>", element),
        })
    }

    fn output_type(&self, resource: &str, property: &Property) -> Result<String> {
        Ok(format!(
            "Output<{}>",
            self.output_value_type(resource, property)?
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_types() {
        let mapper = DotNetTypeMapper;
        let created = Property::new("createdAt", PropertyType::Number).required();
        let status = Property::new("status", PropertyType::String);
        let ids = Property::new("fileIds", PropertyType::StringArray);

        assert_eq!(mapper.output_type("R", &created).unwrap(), "Output<double>");
        assert_eq!(mapper.output_type("R", &status).unwrap(), "Output<string?>");
        assert_eq!(
            mapper.output_type("R", &ids).unwrap(),
            "Output<ImmutableArray<string>>"
        );
    }

    #[test]
    fn test_input_types() {
        let mapper = DotNetTypeMapper;
        let metadata = Property::new("metadata", PropertyType::StringMap);
        let flag = Property::new("enabled", PropertyType::Boolean);
        assert_eq!(mapper.input_type("R", &metadata).unwrap(), "InputMap<string>");
        assert_eq!(mapper.input_type("R", &flag).unwrap(), "Input<bool>");
    }

    #[test]
    fn test_object_is_unrepresentable() {
        let prop = Property::new("toolResources", PropertyType::Object { properties: vec![] });
        let err = DotNetTypeMapper.input_type("Assistant", &prop).unwrap_err();
        assert!(err.to_string().starts_with("dotnet generation failed: property 'toolResources'"));
    }
}
