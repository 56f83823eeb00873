//! Go-specific naming conventions.

use sdkgen_codegen::language::NamingConvention;
use sdkgen_core::{to_camel_case, to_pascal_case};

fn escape_go_reserved(name: &str) -> String {
    format!("{}Prop", name)
}

/// Go naming conventions.
///
/// Exported identifiers are PascalCase, so Go keywords can never collide
/// with them. The reserved list instead holds the methods and embedded
/// types the generated resource and output structs already carry.
pub const GO_NAMING: NamingConvention = NamingConvention {
    type_case: to_pascal_case,
    // Files use camelCase
    file_case: to_camel_case,
    field_case: to_pascal_case,
    reserved_words: &[
        // pulumi.CustomResourceState
        "CustomResourceState",
        "ID",
        "URN",
        "GetProvider",
        "Keepers",
        // pulumi.OutputState
        "OutputState",
        "ApplyT",
        "ApplyTWithContext",
        "ElementType",
        "Index",
        "MapIndex",
    ],
    escape_reserved: escape_go_reserved,
};

/// Go keywords, which a package name must avoid.
pub const GO_KEYWORDS: &[&str] = &[
    "break",
    "case",
    "chan",
    "const",
    "continue",
    "default",
    "defer",
    "else",
    "fallthrough",
    "for",
    "func",
    "go",
    "goto",
    "if",
    "import",
    "interface",
    "map",
    "package",
    "range",
    "return",
    "select",
    "struct",
    "switch",
    "type",
    "var",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_go_naming() {
        assert_eq!(GO_NAMING.type_name("vectorStore"), "VectorStore");
        assert_eq!(GO_NAMING.file_name("VectorStore"), "vectorStore");
        assert_eq!(GO_NAMING.field_name("apiKey"), "ApiKey");
        assert_eq!(GO_NAMING.field_name("createdAt"), "CreatedAt");
    }

    #[test]
    fn test_escapes_embedded_methods() {
        assert_eq!(GO_NAMING.field_name("elementType"), "ElementTypeProp");
        assert_eq!(GO_NAMING.field_name("applyT"), "ApplyTProp");
        assert_eq!(GO_NAMING.field_name("id"), "Id");
    }
}
