//! README.md for the Go SDK.

use sdkgen_codegen::{builder::CodeBuilder, generation::Readme};
use sdkgen_ir::Package;

use super::PULUMI_SDK;
use crate::{GoSettings, naming::GO_NAMING, type_mapper::GoTypeMapper};

/// Build the README, with a usage example creating the first resource.
pub fn go_readme(package: &Package, settings: &GoSettings) -> Readme {
    Readme {
        path: "README.md".to_string(),
        package: settings.import_base_path.clone(),
        description: package.meta.description.clone(),
        language: "Go",
        install: format!("go get {}", settings.import_base_path),
        fence: "go",
        usage: usage(package, settings),
    }
}

fn usage(package: &Package, settings: &GoSettings) -> String {
    let Some(resource) = package.resources.first() else {
        return String::new();
    };
    let mapper = GoTypeMapper;
    let pkg = &settings.package_name;
    let type_name = GO_NAMING.type_name(&resource.name);

    CodeBuilder::go()
        .line("package main")
        .blank()
        .block_with_close("import (", ")", |b| {
            b.line(&format!("\"{}\"", PULUMI_SDK))
                .line(&format!("{} \"{}\"", pkg, settings.import_base_path))
        })
        .blank()
        .block_with_close("func main() {", "}", |b| {
            b.block_with_close(
                "pulumi.Run(func(ctx *pulumi.Context) error {",
                "})",
                |b| {
                    b.block_with_close(
                        &format!(
                            "_, err := {0}.New{1}(ctx, \"{2}\", &{0}.{1}Args{{",
                            pkg,
                            type_name,
                            sdkgen_core::to_camel_case(&resource.name)
                        ),
                        "})",
                        |b| {
                            b.each(resource.required_inputs(), |b, p| {
                                b.line(&format!(
                                    "{}: {},",
                                    GO_NAMING.field_name(&p.name),
                                    mapper.example_value(p)
                                ))
                            })
                        },
                    )
                    .line("return err")
                },
            )
        })
        .build()
}
