//! `<Namespace>.csproj` generator.

use sdkgen_codegen::builder::CodeBuilder;
use sdkgen_core::SourceFile;
use sdkgen_ir::PackageMeta;

use crate::{DotNetSettings, ast::xml_escape};

/// The SDK-style project file. Metadata the schema leaves out is omitted.
#[derive(Debug, Clone)]
pub struct Csproj<'a> {
    pub meta: &'a PackageMeta,
    pub settings: &'a DotNetSettings,
}

impl Csproj<'_> {
    fn properties(&self) -> Vec<(&'static str, String)> {
        let meta = self.meta;
        let mut props = vec![("GeneratePackageOnBuild", "true".to_string())];
        let optional = [
            ("Authors", meta.publisher.as_deref()),
            ("Description", meta.description.as_deref()),
            ("PackageLicenseExpression", meta.license.as_deref()),
            ("PackageProjectUrl", meta.homepage.as_deref()),
            ("RepositoryUrl", meta.repository.as_deref()),
        ];
        props.extend(
            optional
                .into_iter()
                .filter_map(|(tag, value)| value.map(|v| (tag, v.to_string()))),
        );
        if !meta.keywords.is_empty() {
            props.push(("PackageTags", meta.keywords.join(";")));
        }
        props.extend([
            ("Version", meta.version.clone()),
            ("TargetFramework", "net6.0".to_string()),
            ("Nullable", "enable".to_string()),
            ("RootNamespace", self.settings.namespace.clone()),
        ]);
        props
    }
}

impl SourceFile for Csproj<'_> {
    fn path(&self) -> String {
        format!("{}.csproj", self.settings.namespace)
    }

    fn render(&self) -> String {
        let properties = self.properties();
        CodeBuilder::csharp()
            .line("<Project Sdk=\"Microsoft.NET.Sdk\">")
            .blank()
            .indent()
            .block_with_close("<PropertyGroup>", "</PropertyGroup>", |b| {
                b.each(&properties, |b, (tag, value)| {
                    b.line(&format!("<{0}>{1}</{0}>", tag, xml_escape(value)))
                })
            })
            .blank()
            .block_with_close("<ItemGroup>", "</ItemGroup>", |b| {
                b.each(self.settings.package_references.iter(), |b, (id, version)| {
                    b.line(&format!(
                        "<PackageReference Include=\"{}\" Version=\"{}\" />",
                        xml_escape(id),
                        xml_escape(version)
                    ))
                })
            })
            .blank()
            .block_with_close("<ItemGroup>", "</ItemGroup>", |b| {
                b.block_with_close("<None Include=\"pulumi-plugin.json\">", "</None>", |b| {
                    b.line("<Pack>True</Pack>").line("<PackagePath></PackagePath>")
                })
            })
            .dedent()
            .blank()
            .line("</Project>")
            .build()
    }
}

#[cfg(test)]
mod tests {
    use sdkgen_codegen::generation::DependencyCollector;

    use super::*;

    fn settings() -> DotNetSettings {
        DotNetSettings {
            namespace: "Pulumi.Openai".to_string(),
            package_class: "Openai".to_string(),
            package_references: [("Pulumi", "3.*")].into_iter().collect::<DependencyCollector>(),
        }
    }

    #[test]
    fn test_csproj() {
        let meta = PackageMeta {
            name: "openai".to_string(),
            version: "0.1.0".to_string(),
            description: Some("OpenAI & friends".to_string()),
            keywords: vec!["pulumi".to_string(), "openai".to_string()],
            ..Default::default()
        };
        let settings = settings();
        let file = Csproj {
            meta: &meta,
            settings: &settings,
        };
        assert_eq!(file.path(), "Pulumi.Openai.csproj");

        let content = file.render();
        assert!(content.starts_with("<Project Sdk=\"Microsoft.NET.Sdk\">\n\n    <PropertyGroup>\n"));
        assert!(content.contains("        <Description>OpenAI &amp; friends</Description>\n"));
        assert!(content.contains("        <PackageTags>pulumi;openai</PackageTags>\n"));
        assert!(content.contains("        <Version>0.1.0</Version>\n"));
        assert!(content.contains("        <RootNamespace>Pulumi.Openai</RootNamespace>\n"));
        assert!(content.contains("        <PackageReference Include=\"Pulumi\" Version=\"3.*\" />\n"));
        assert!(!content.contains("<Authors>"));
        assert!(content.ends_with("    </ItemGroup>\n\n</Project>\n"));
    }
}
