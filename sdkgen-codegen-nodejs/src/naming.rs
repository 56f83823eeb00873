//! TypeScript-specific naming conventions.

use sdkgen_codegen::language::NamingConvention;
use sdkgen_core::{to_camel_case, to_pascal_case};

fn escape_ts_reserved(name: &str) -> String {
    format!("_{}", name)
}

/// Instance methods of `pulumi.CustomResource` an output field would shadow.
pub const INHERITED_METHODS: &[&str] = &["getProvider"];

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_' || c == '$')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

/// Key of a class field or interface member. The runtime reads and writes
/// these under their wire name, and reserved words are legal here.
pub fn member_name(wire: &str) -> String {
    if is_identifier(wire) {
        wire.to_string()
    } else {
        format!("\"{}\"", wire)
    }
}

/// `object.wire`, or an optional chain `object?.wire` when `optional`.
pub fn member_access(object: &str, wire: &str, optional: bool) -> String {
    match (is_identifier(wire), optional) {
        (true, false) => format!("{}.{}", object, wire),
        (true, true) => format!("{}?.{}", object, wire),
        (false, false) => format!("{}[\"{}\"]", object, wire),
        (false, true) => format!("{}?.[\"{}\"]", object, wire),
    }
}

/// TypeScript naming conventions for local identifiers.
pub const TS_NAMING: NamingConvention = NamingConvention {
    // Types use PascalCase
    type_case: to_pascal_case,
    // Files use camelCase, matching the exported class
    file_case: to_camel_case,
    // Fields use camelCase
    field_case: to_camel_case,
    reserved_words: &[
        // JavaScript reserved words
        "break",
        "case",
        "catch",
        "class",
        "const",
        "continue",
        "debugger",
        "default",
        "delete",
        "do",
        "else",
        "enum",
        "export",
        "extends",
        "false",
        "finally",
        "for",
        "function",
        "if",
        "import",
        "in",
        "instanceof",
        "let",
        "new",
        "null",
        "return",
        "super",
        "switch",
        "this",
        "throw",
        "true",
        "try",
        "typeof",
        "var",
        "void",
        "while",
        "with",
        "yield",
    ],
    escape_reserved: escape_ts_reserved,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ts_naming() {
        assert_eq!(TS_NAMING.type_name("vector_store"), "VectorStore");
        assert_eq!(TS_NAMING.file_name("VectorStore"), "vectorStore");
        assert_eq!(TS_NAMING.field_name("created_at"), "createdAt");
        assert_eq!(TS_NAMING.field_name("apiKey"), "apiKey");
    }

    #[test]
    fn test_escapes_reserved() {
        assert_eq!(TS_NAMING.field_name("delete"), "_delete");
        assert_eq!(TS_NAMING.field_name("default"), "_default");
    }

    #[test]
    fn test_members_keep_wire_name() {
        assert_eq!(member_name("class"), "class");
        assert_eq!(member_name("file_ids"), "file_ids");
        assert_eq!(member_name("x-trace"), "\"x-trace\"");
        assert_eq!(member_access("args", "class", false), "args.class");
        assert_eq!(member_access("args", "apiKey", true), "args?.apiKey");
        assert_eq!(member_access("args", "x-trace", true), "args?.[\"x-trace\"]");
    }
}
