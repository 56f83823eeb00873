//! C#-specific naming conventions.

use sdkgen_codegen::language::NamingConvention;
use sdkgen_core::to_pascal_case;

fn escape_cs_reserved(name: &str) -> String {
    format!("{}Value", name)
}

/// C# naming conventions.
///
/// Members are PascalCase, so C# keywords cannot collide; the reserved list
/// holds members inherited from `Pulumi.CustomResource`.
pub const DOTNET_NAMING: NamingConvention = NamingConvention {
    type_case: to_pascal_case,
    file_case: to_pascal_case,
    field_case: to_pascal_case,
    reserved_words: &[
        "Id",
        "Urn",
        "GetResourceName",
        "GetResourceType",
        "RegisterOutputs",
    ],
    escape_reserved: escape_cs_reserved,
};
