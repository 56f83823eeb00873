//! TypeScript code generator for pulumi-style resource SDKs.

use sdkgen_codegen::{
    Result,
    generation::{FileCategory, FileEntry, FileRegistry},
    language::{LanguageCodegen, decode_options},
};
use sdkgen_core::{GeneratedFile, SourceFile};
use sdkgen_ir::Package;
use sdkgen_schema::{Language, LanguageOptions};
use tracing::debug;

use crate::{
    NodeOptions,
    files::{IndexResource, IndexTs, PackageJson, ResourceTs, TsConfig, UtilitiesTs, node_readme},
};

/// TypeScript code generator.
///
/// Output is a flat npm package: one module per resource next to the
/// `index.ts` entry point.
#[derive(Debug, Default, Clone, Copy)]
pub struct Generator;

impl LanguageCodegen for Generator {
    fn language(&self) -> Language {
        Language::NodeJs
    }

    fn generate(&self, package: &Package, options: &LanguageOptions) -> Result<Vec<GeneratedFile>> {
        let options: NodeOptions = decode_options(Language::NodeJs, options)?;
        let package_json = PackageJson::from_options(&package.meta, &options)?;

        let mut registry = FileRegistry::new(Language::NodeJs);
        let mut sources = vec!["index.ts".to_string(), "utilities.ts".to_string()];
        let mut index = IndexTs {
            plugin: package.meta.name.clone(),
            resources: Vec::with_capacity(package.resources.len()),
        };

        for resource in &package.resources {
            let file = ResourceTs::new(resource)?;
            sources.push(file.path());
            index.resources.push(IndexResource {
                token: resource.token.clone(),
                module: resource.module.clone(),
                class_name: file.class_name().to_string(),
                file_stem: file.file_stem().to_string(),
            });
            registry.register(FileEntry::from_source(&file, FileCategory::Resource))?;
        }
        sources.sort();

        registry.register_all([
            FileEntry::from_source(&package_json, FileCategory::Manifest),
            FileEntry::from_source(&TsConfig { files: sources }, FileCategory::Manifest),
            FileEntry::from_source(&index, FileCategory::Support),
            FileEntry::from_source(&UtilitiesTs, FileCategory::Support),
            FileEntry::from_source(
                &node_readme(package, &package_json.name),
                FileCategory::Docs,
            ),
        ])?;

        debug!(
            package = %package_json.name,
            files = registry.len(),
            "rendered nodejs sdk"
        );
        Ok(registry.into_files())
    }
}

#[cfg(test)]
mod tests {
    use sdkgen_codegen::testing::vector_store_package;
    use sdkgen_ir::Resource;

    use super::*;

    #[test]
    fn test_resource_named_like_support_file() {
        let mut package = vector_store_package();
        package.resources.push(Resource {
            token: "openai:index:Utilities".to_string(),
            module: "index".to_string(),
            name: "Utilities".to_string(),
            description: None,
            inputs: Vec::new(),
            outputs: Vec::new(),
        });

        let err = Generator
            .generate(&package, &LanguageOptions::new())
            .unwrap_err();
        assert!(err.to_string().contains("'utilities.ts' would be generated twice"));
    }
}
