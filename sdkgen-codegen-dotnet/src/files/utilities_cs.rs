//! `Utilities.cs` generator.

use sdkgen_core::SourceFile;

use super::{HEADER, cs_str};
use crate::DotNetSettings;

const TEMPLATE: &str = r#"namespace {{NAMESPACE}}
{
    static class Utilities
    {
        public static string Version => {{VERSION}};

        public static global::Pulumi.CustomResourceOptions WithDefaults(this global::Pulumi.CustomResourceOptions? options)
        {
            var merged = global::Pulumi.CustomResourceOptions.Merge(null, options);
            merged.Version = options?.Version ?? Version;
            return merged;
        }
    }

    internal sealed class {{ATTRIBUTE}}Attribute : global::Pulumi.ResourceTypeAttribute
    {
        public {{ATTRIBUTE}}Attribute(string type) : base(type, Utilities.Version)
        {
        }
    }
}
"#;

/// The package version and the resource type attribute every resource
/// class carries.
pub struct UtilitiesCs<'a> {
    pub settings: &'a DotNetSettings,
    pub version: &'a str,
}

impl SourceFile for UtilitiesCs<'_> {
    fn path(&self) -> String {
        "Utilities.cs".to_string()
    }

    fn render(&self) -> String {
        let body = TEMPLATE
            .replace("{{NAMESPACE}}", &self.settings.namespace)
            .replace("{{VERSION}}", &cs_str(self.version))
            .replace("{{ATTRIBUTE}}", &self.settings.resource_type_attribute());
        format!("{}\n{}", HEADER, body)
    }
}
