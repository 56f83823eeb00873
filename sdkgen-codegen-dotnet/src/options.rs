//! Options accepted by the .NET backend.

use std::collections::BTreeMap;

use sdkgen_codegen::{Error, Result, generation::DependencyCollector};
use sdkgen_core::to_pascal_case;
use sdkgen_ir::PackageMeta;
use sdkgen_schema::Language;
use serde::Deserialize;

const DEFAULT_ROOT_NAMESPACE: &str = "Pulumi";
const PULUMI_REFERENCE: &str = "3.*";

/// The `dotnet` option bag.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct DotNetOptions {
    /// Namespace prefix, default `Pulumi`. The package lives in
    /// `<rootNamespace>.<Pkg>`.
    pub root_namespace: Option<String>,
    /// NuGet package id to version, e.g. `OpenAI` to `2.*`.
    pub package_references: Option<BTreeMap<String, String>>,
}

/// Options with every default applied.
#[derive(Debug, Clone)]
pub struct DotNetSettings {
    /// Namespace of every generated type, e.g. `Pulumi.Openai`.
    pub namespace: String,
    /// PascalCase package name, e.g. `Openai`.
    pub package_class: String,
    pub package_references: DependencyCollector,
}

impl DotNetSettings {
    /// Name of the assembly-local resource type attribute, without the
    /// `Attribute` suffix.
    pub fn resource_type_attribute(&self) -> String {
        format!("{}ResourceType", self.package_class)
    }
}

impl DotNetOptions {
    pub fn resolve(self, meta: &PackageMeta) -> Result<DotNetSettings> {
        let root = self
            .root_namespace
            .unwrap_or_else(|| DEFAULT_ROOT_NAMESPACE.to_string());
        validate_namespace(&root)?;

        let package_class = to_pascal_case(&meta.name);
        let mut package_references = DependencyCollector::new();
        package_references.add("Pulumi", PULUMI_REFERENCE);
        for (name, version) in self.package_references.into_iter().flatten() {
            package_references.set(name, version);
        }

        Ok(DotNetSettings {
            namespace: format!("{}.{}", root, package_class),
            package_class,
            package_references,
        })
    }
}

fn validate_namespace(namespace: &str) -> Result<()> {
    let valid = namespace.split('.').all(|segment| {
        segment.starts_with(|c: char| c.is_ascii_alphabetic() || c == '_')
            && segment.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
    });
    if valid {
        Ok(())
    } else {
        Err(Error::invalid_options(
            Language::DotNet,
            format!("rootNamespace '{}' is not a valid C# namespace", namespace),
        ))
    }
}
