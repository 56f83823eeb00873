//! C# file generators.

mod csproj;
mod readme;
mod resource_cs;
mod utilities_cs;

pub use csproj::Csproj;
pub use readme::dotnet_readme;
pub use resource_cs::ResourceCs;
pub use utilities_cs::UtilitiesCs;

/// Header carried by every generated C# file.
pub const HEADER: &str = "\
// *** WARNING: this file was generated by sdkgen. ***
// *** Do not edit by hand unless you're certain you know what you are doing! ***
";

/// A C# regular string literal for `s`.
pub(crate) fn cs_str(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}
