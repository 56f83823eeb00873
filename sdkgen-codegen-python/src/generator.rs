//! Python code generator for pulumi-style resource SDKs.

use sdkgen_codegen::{
    Result,
    generation::{FileCategory, FileEntry, FileRegistry, plugin_manifest},
    language::{LanguageCodegen, decode_options},
};
use sdkgen_core::GeneratedFile;
use sdkgen_ir::Package;
use sdkgen_schema::{Language, LanguageOptions};
use tracing::debug;

use crate::{
    PythonOptions,
    files::{InitPy, ModuleClass, ResourcePy, SetupPy, UtilitiesPy, python_readme},
};

/// Python code generator.
///
/// Every resource is a module of the one top-level package; `__init__.py`
/// re-exports them all.
#[derive(Debug, Default, Clone, Copy)]
pub struct Generator;

impl LanguageCodegen for Generator {
    fn language(&self) -> Language {
        Language::Python
    }

    fn generate(&self, package: &Package, options: &LanguageOptions) -> Result<Vec<GeneratedFile>> {
        let settings =
            decode_options::<PythonOptions>(Language::Python, options)?.resolve(&package.meta)?;
        let pkg = &settings.package_name;
        let meta = &package.meta;

        let mut registry = FileRegistry::new(Language::Python);
        let mut init = InitPy {
            package_name: pkg.clone(),
            plugin: meta.name.clone(),
            classes: Vec::with_capacity(package.resources.len()),
        };
        for resource in &package.resources {
            let file = ResourcePy::new(resource, &settings)?;
            init.classes.push(ModuleClass {
                token: resource.token.clone(),
                module: resource.module.clone(),
                class_name: file.class_name().to_string(),
                file_stem: file.file_stem().to_string(),
            });
            registry.register(FileEntry::from_source(&file, FileCategory::Resource))?;
        }

        registry.register_all([
            FileEntry::from_source(&SetupPy { meta, settings: &settings }, FileCategory::Manifest),
            FileEntry::manifest(
                format!("{}/pulumi-plugin.json", pkg),
                plugin_manifest(&meta.name, &meta.version),
            ),
            FileEntry::support(format!("{}/py.typed", pkg), ""),
            FileEntry::from_source(&init, FileCategory::Support),
            FileEntry::from_source(
                &UtilitiesPy {
                    package_name: pkg.clone(),
                },
                FileCategory::Support,
            ),
            FileEntry::from_source(&python_readme(package, &settings), FileCategory::Docs),
        ])?;

        debug!(package = %pkg, files = registry.len(), "rendered python sdk");
        Ok(registry.into_files())
    }
}
