//! `_utilities.py` generator.

use sdkgen_core::SourceFile;

use super::HEADER;

const TEMPLATE: &str = r#"import importlib
import importlib.metadata
import json

import pulumi
import pulumi.runtime


def get_version():
    try:
        return importlib.metadata.version("{{PACKAGE}}")
    except importlib.metadata.PackageNotFoundError:
        return None


def get_resource_opts_defaults() -> pulumi.ResourceOptions:
    return pulumi.ResourceOptions(version=get_version())


def get_resource_args_opts(resource_args_type, resource_options_type, *args, **kwargs):
    """
    Return the resource args and options given the *args and **kwargs of a
    resource's __init__ method.
    """
    resource_args, opts = None, None

    if len(args) > 0 and isinstance(args[0], resource_args_type):
        resource_args, args = args[0], args[1:]
    if len(args) > 0 and isinstance(args[0], resource_options_type):
        opts = args[0]

    if resource_args is None:
        a = kwargs.get("args")
        if isinstance(a, resource_args_type):
            resource_args = a
    if opts is None:
        opts = kwargs.get("opts")

    return resource_args, opts


class Module(pulumi.runtime.ResourceModule):
    def __init__(self, mod_info):
        self.mod_info = mod_info

    def version(self):
        return get_version()

    def construct(self, name: str, typ: str, urn: str) -> pulumi.Resource:
        class_name = self.mod_info["classes"].get(typ, None)
        if class_name is None:
            raise Exception(f"unknown resource type {typ}")
        cls = getattr(importlib.import_module(self.mod_info["fqn"]), class_name)
        return cls(name, pulumi.ResourceOptions(urn=urn))


def register(resource_modules):
    for mod_info in json.loads(resource_modules):
        pulumi.runtime.register_resource_module(mod_info["pkg"], mod_info["mod"], Module(mod_info))
"#;

/// Runtime helpers shared by the resource modules.
pub struct UtilitiesPy {
    pub package_name: String,
}

impl SourceFile for UtilitiesPy {
    fn path(&self) -> String {
        format!("{}/_utilities.py", self.package_name)
    }

    fn render(&self) -> String {
        format!(
            "{}\n{}",
            HEADER,
            TEMPLATE.replace("{{PACKAGE}}", &self.package_name)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_lookup_uses_distribution() {
        let content = UtilitiesPy {
            package_name: "pulumi_openai".to_string(),
        }
        .render();
        assert!(content.starts_with(HEADER));
        assert!(content.contains("importlib.metadata.version(\"pulumi_openai\")"));
        assert!(content.contains("def register(resource_modules):"));
    }
}
