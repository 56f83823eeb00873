//! README.md for the .NET SDK.

use sdkgen_codegen::{builder::CodeBuilder, generation::Readme};
use sdkgen_core::to_camel_case;
use sdkgen_ir::Package;

use crate::{DotNetSettings, naming::DOTNET_NAMING, type_mapper::DotNetTypeMapper};

/// Build the README, with a stack program creating the first resource.
pub fn dotnet_readme(package: &Package, settings: &DotNetSettings) -> Readme {
    Readme {
        path: "README.md".to_string(),
        package: settings.namespace.clone(),
        description: package.meta.description.clone(),
        language: ".NET",
        install: format!("dotnet add package {}", settings.namespace),
        fence: "csharp",
        usage: usage(package, settings),
    }
}

fn usage(package: &Package, settings: &DotNetSettings) -> String {
    let Some(resource) = package.resources.first() else {
        return String::new();
    };
    let mapper = DotNetTypeMapper;
    let class = DOTNET_NAMING.type_name(&resource.name);
    let local = to_camel_case(&resource.name);
    let required: Vec<_> = resource.required_inputs().collect();

    CodeBuilder::csharp()
        .line("using Pulumi;")
        .line(&format!(
            "using {} = {};",
            settings.package_class, settings.namespace
        ))
        .blank()
        .line("return await Deployment.RunAsync(() =>")
        .line("{")
        .indent()
        .line(&format!(
            "var {0} = new {1}.{2}(\"{0}\", new()",
            local, settings.package_class, class
        ))
        .line("{")
        .indent()
        .each(&required, |b, p| {
            b.line(&format!(
                "{} = {},",
                DOTNET_NAMING.field_name(&p.name),
                mapper.example_value(p)
            ))
        })
        .dedent()
        .line("});")
        .dedent()
        .line("});")
        .build()
}
