//! Python-specific naming conventions.

use sdkgen_codegen::language::NamingConvention;
use sdkgen_core::{to_pascal_case, to_snake_case};

fn escape_py_reserved(name: &str) -> String {
    format!("{}_", name)
}

/// Python naming conventions.
pub const PY_NAMING: NamingConvention = NamingConvention {
    type_case: to_pascal_case,
    file_case: to_snake_case,
    field_case: to_snake_case,
    reserved_words: &[
        // Python keywords
        "False",
        "None",
        "True",
        "and",
        "as",
        "assert",
        "async",
        "await",
        "break",
        "class",
        "continue",
        "def",
        "del",
        "elif",
        "else",
        "except",
        "finally",
        "for",
        "from",
        "global",
        "if",
        "import",
        "in",
        "is",
        "lambda",
        "nonlocal",
        "not",
        "or",
        "pass",
        "raise",
        "return",
        "try",
        "while",
        "with",
        "yield",
        // Parameters of the generated constructors
        "resource_name",
        "opts",
    ],
    escape_reserved: escape_py_reserved,
};
