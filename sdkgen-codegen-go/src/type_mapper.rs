//! Go type mapper implementation.

use sdkgen_codegen::{Error, Result, language::TypeMapper};
use sdkgen_ir::{Property, PropertyType};
use sdkgen_schema::Language;

/// Maps IR properties onto the pulumi Go SDK's typed inputs and outputs.
///
/// Scalars come in plain and `Ptr` flavours depending on whether the
/// property is required. Arrays and maps are nilable and never use `Ptr`.
pub struct GoTypeMapper;

impl GoTypeMapper {
    /// Type family prefix shared by the input and output types.
    fn family(&self, resource: &str, property: &Property) -> Result<&'static str> {
        match property.ty {
            PropertyType::String => Ok("String"),
            PropertyType::Number => Ok("Float64"),
            PropertyType::Boolean => Ok("Bool"),
            PropertyType::StringArray => Ok("StringArray"),
            PropertyType::StringMap => Ok("StringMap"),
            PropertyType::Object { .. } => {
                Err(Error::unrepresentable(Language::Go, resource, property))
            }
        }
    }

    fn wrapper(&self, resource: &str, property: &Property, kind: &str) -> Result<String> {
        let family = self.family(resource, property)?;
        let ptr = if property.required || is_collection(&property.ty) {
            ""
        } else {
            "Ptr"
        };
        Ok(format!("pulumi.{}{}{}", family, ptr, kind))
    }

    /// Plain Go type of an argument, as held by the private args struct.
    pub fn plain_type(&self, resource: &str, property: &Property) -> Result<String> {
        let scalar = match property.ty {
            PropertyType::String => "string",
            PropertyType::Number => "float64",
            PropertyType::Boolean => "bool",
            PropertyType::StringArray => return Ok("[]string".to_string()),
            PropertyType::StringMap => return Ok("map[string]string".to_string()),
            PropertyType::Object { .. } => {
                return Err(Error::unrepresentable(Language::Go, resource, property));
            }
        };
        Ok(if property.required {
            scalar.to_string()
        } else {
            format!("*{}", scalar)
        })
    }

    /// Example literal for `property`, used in generated documentation.
    pub fn example_value(&self, property: &Property) -> &'static str {
        match property.ty {
            PropertyType::String => "pulumi.String(\"example\")",
            PropertyType::Number => "pulumi.Float64(1)",
            PropertyType::Boolean => "pulumi.Bool(true)",
            PropertyType::StringArray => "pulumi.StringArray{pulumi.String(\"example\")}",
            PropertyType::StringMap => "pulumi.StringMap{\"key\": pulumi.String(\"value\")}",
            PropertyType::Object { .. } => "nil",
        }
    }
}

fn is_collection(ty: &PropertyType) -> bool {
    matches!(ty, PropertyType::StringArray | PropertyType::StringMap)
}

impl TypeMapper for GoTypeMapper {
    fn language(&self) -> Language {
        Language::Go
    }

    fn input_type(&self, resource: &str, property: &Property) -> Result<String> {
        self.wrapper(resource, property, "Input")
    }

    fn output_type(&self, resource: &str, property: &Property) -> Result<String> {
        self.wrapper(resource, property, "Output")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_go_scalar_types() {
        let mapper = GoTypeMapper;
        let required = Property::new("name", PropertyType::String).required();
        let optional = Property::new("expiresAt", PropertyType::Number);

        assert_eq!(mapper.input_type("R", &required).unwrap(), "pulumi.StringInput");
        assert_eq!(mapper.output_type("R", &required).unwrap(), "pulumi.StringOutput");
        assert_eq!(mapper.plain_type("R", &required).unwrap(), "string");
        assert_eq!(mapper.input_type("R", &optional).unwrap(), "pulumi.Float64PtrInput");
        assert_eq!(mapper.output_type("R", &optional).unwrap(), "pulumi.Float64PtrOutput");
        assert_eq!(mapper.plain_type("R", &optional).unwrap(), "*float64");
    }

    #[test]
    fn test_go_collection_types() {
        let mapper = GoTypeMapper;
        let ids = Property::new("fileIds", PropertyType::StringArray);
        let metadata = Property::new("metadata", PropertyType::StringMap).required();

        assert_eq!(mapper.input_type("R", &ids).unwrap(), "pulumi.StringArrayInput");
        assert_eq!(mapper.output_type("R", &ids).unwrap(), "pulumi.StringArrayOutput");
        assert_eq!(mapper.plain_type("R", &ids).unwrap(), "[]string");
        assert_eq!(mapper.output_type("R", &metadata).unwrap(), "pulumi.StringMapOutput");
        assert_eq!(mapper.plain_type("R", &metadata).unwrap(), "map[string]string");
    }

    #[test]
    fn test_go_object_is_unrepresentable() {
        let mapper = GoTypeMapper;
        let nested = Property::new(
            "toolResources",
            PropertyType::Object {
                properties: Vec::new(),
            },
        );
        let err = mapper.input_type("Assistant", &nested).unwrap_err();
        assert!(err.to_string().contains("'toolResources'"));
        assert!(mapper.plain_type("Assistant", &nested).is_err());
    }
}
