//! Python file generators.

mod init_py;
mod readme;
mod resource_py;
mod setup_py;
mod utilities_py;

pub use init_py::{InitPy, ModuleClass};
pub use readme::python_readme;
pub use resource_py::ResourcePy;
pub use setup_py::SetupPy;
pub use utilities_py::UtilitiesPy;

/// Header carried by every generated Python file.
pub const HEADER: &str = "\
# coding=utf-8
# *** WARNING: this file was generated by sdkgen. ***
# *** Do not edit by hand unless you're certain you know what you are doing! ***
";

/// A Python string literal for `s`.
///
/// JSON string escapes are a subset of Python's, so a JSON literal reads
/// back as the same string.
pub(crate) fn py_str(s: &str) -> String {
    serde_json::Value::from(s).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_py_str_escapes() {
        assert_eq!(py_str("openai"), "\"openai\"");
        assert_eq!(py_str("say \"hi\"\n"), "\"say \\\"hi\\\"\\n\"");
    }
}
