//! Go code generator for pulumi-style resource SDKs.

use std::collections::HashMap;

use sdkgen_codegen::{
    Error, Result,
    generation::{FileCategory, FileEntry, FileRegistry, plugin_manifest},
    language::{LanguageCodegen, decode_options},
};
use sdkgen_core::GeneratedFile;
use sdkgen_ir::Package;
use sdkgen_schema::{Language, LanguageOptions};
use tracing::debug;

use crate::{
    GoOptions, GoSettings,
    files::{DocGo, InitGo, ModuleResource, ResourceGo, UtilitiesGo, go_readme},
    naming::GO_NAMING,
};

/// Go code generator.
///
/// All resources land in one Go package named by the `packageName` option,
/// whatever schema module they belong to.
#[derive(Debug, Default, Clone, Copy)]
pub struct Generator;

impl LanguageCodegen for Generator {
    fn language(&self) -> Language {
        Language::Go
    }

    fn generate(&self, package: &Package, options: &LanguageOptions) -> Result<Vec<GeneratedFile>> {
        let settings = decode_options::<GoOptions>(Language::Go, options)?.resolve(&package.meta)?;
        check_type_names(package, settings.container_types)?;

        let mut registry = FileRegistry::new(Language::Go);
        for resource in &package.resources {
            let file = ResourceGo::new(resource, &settings)?;
            registry.register(FileEntry::from_source(&file, FileCategory::Resource))?;
        }
        self.register_support(&mut registry, package, &settings)?;

        debug!(
            package = %settings.package_name,
            import_path = %settings.import_base_path,
            files = registry.len(),
            "rendered go sdk"
        );
        Ok(registry.into_files())
    }
}

impl Generator {
    fn register_support(
        &self,
        registry: &mut FileRegistry,
        package: &Package,
        settings: &GoSettings,
    ) -> Result<()> {
        let pkg = &settings.package_name;
        let meta = &package.meta;

        registry.register(FileEntry::from_source(
            &DocGo {
                package_name: pkg.clone(),
                description: meta.description.clone(),
            },
            FileCategory::Support,
        ))?;

        // init.go declares `version` only to register modules
        if !package.resources.is_empty() {
            let init = InitGo {
                package_name: pkg.clone(),
                plugin: meta.name.clone(),
                internal_import: settings.internal_import(),
                resources: package
                    .resources
                    .iter()
                    .map(|r| ModuleResource {
                        token: r.token.clone(),
                        module: r.module.clone(),
                        type_name: GO_NAMING.type_name(&r.name),
                    })
                    .collect(),
            };
            registry.register(FileEntry::from_source(&init, FileCategory::Support))?;
        }

        registry.register(FileEntry::from_source(
            &UtilitiesGo {
                package_name: pkg.clone(),
                plugin: meta.name.clone(),
                version: meta.version.clone(),
            },
            FileCategory::Support,
        ))?;
        registry.register(FileEntry::manifest(
            format!("{}/pulumi-plugin.json", pkg),
            plugin_manifest(&meta.name, &meta.version),
        ))?;
        registry.register(FileEntry::from_source(
            &go_readme(package, settings),
            FileCategory::Docs,
        ))
    }
}

/// Types each resource declares in the shared package.
fn declared_types(type_name: &str, container_types: bool) -> Vec<String> {
    let mut suffixes = vec!["", "Args", "State", "Input", "Output"];
    if container_types {
        suffixes.extend([
            "Array",
            "ArrayInput",
            "ArrayOutput",
            "Map",
            "MapInput",
            "MapOutput",
        ]);
    }
    suffixes
        .into_iter()
        .map(|suffix| format!("{}{}", type_name, suffix))
        .collect()
}

/// Reject packages where two resources would declare the same Go type,
/// e.g. `Vector` with containers (`VectorMap`) next to `VectorMap`.
fn check_type_names(package: &Package, container_types: bool) -> Result<()> {
    let mut owners: HashMap<String, &str> = HashMap::new();
    for resource in &package.resources {
        for ty in declared_types(&GO_NAMING.type_name(&resource.name), container_types) {
            let owner = owners.insert(ty.clone(), &resource.name);
            if let Some(owner) = owner.filter(|owner| *owner != resource.name) {
                return Err(Error::generation(
                    Language::Go,
                    format!(
                        "resources '{}' and '{}' both declare the Go type '{}'",
                        owner, resource.name, ty
                    ),
                ));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use sdkgen_codegen::testing::vector_store_package;
    use sdkgen_ir::Resource;

    use super::*;

    fn resource(name: &str) -> Resource {
        Resource {
            token: format!("openai:index:{}", name),
            module: "index".to_string(),
            name: name.to_string(),
            description: None,
            inputs: Vec::new(),
            outputs: Vec::new(),
        }
    }

    #[test]
    fn test_type_name_clash() {
        let mut package = vector_store_package();
        package.resources = vec![resource("Vector"), resource("VectorMap")];

        let err = check_type_names(&package, true).unwrap_err();
        assert!(err.to_string().contains("the Go type 'VectorMap'"));
        assert!(check_type_names(&package, false).is_ok());
    }

    #[test]
    fn test_empty_package_skips_init() {
        let mut package = vector_store_package();
        package.resources.clear();

        let files = Generator
            .generate(&package, &LanguageOptions::new())
            .unwrap();
        let paths: Vec<_> = files.iter().map(|f| f.path()).collect();
        assert_eq!(
            paths,
            vec![
                "README.md",
                "openai/doc.go",
                "openai/internal/pulumiUtilities.go",
                "openai/pulumi-plugin.json",
            ]
        );
    }
}
