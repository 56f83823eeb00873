//! .NET code generator for pulumi-style resource SDKs.

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
    DotNetOptions,
    files::{Csproj, ResourceCs, UtilitiesCs, dotnet_readme},
};

/// .NET code generator.
///
/// Every resource lands in the one package namespace; the project file packs
/// `pulumi-plugin.json` alongside the assembly.
#[derive(Debug, Default, Clone, Copy)]
pub struct Generator;

impl LanguageCodegen for Generator {
    fn language(&self) -> Language {
        Language::DotNet
    }

    fn generate(&self, package: &Package, options: &LanguageOptions) -> Result<Vec<GeneratedFile>> {
        let settings =
            decode_options::<DotNetOptions>(Language::DotNet, options)?.resolve(&package.meta)?;
        let meta = &package.meta;

        let mut registry = FileRegistry::new(Language::DotNet);
        for resource in &package.resources {
            let file = ResourceCs::new(resource, &settings)?;
            registry.register(FileEntry::from_source(&file, FileCategory::Resource))?;
        }

        registry.register_all([
            FileEntry::from_source(
                &Csproj {
                    meta,
                    settings: &settings,
                },
                FileCategory::Manifest,
            ),
            FileEntry::manifest(
                "pulumi-plugin.json",
                plugin_manifest(&meta.name, &meta.version),
            ),
            FileEntry::from_source(
                &UtilitiesCs {
                    settings: &settings,
                    version: &meta.version,
                },
                FileCategory::Support,
            ),
            FileEntry::from_source(&dotnet_readme(package, &settings), FileCategory::Docs),
        ])?;

        debug!(namespace = %settings.namespace, files = registry.len(), "rendered dotnet sdk");
        Ok(registry.into_files())
    }
}
