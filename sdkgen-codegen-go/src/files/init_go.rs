//! init.go generator.

use sdkgen_codegen::{
    builder::{CodeBuilder, CodeFragment},
    generation::ImportCollector,
};
use sdkgen_core::SourceFile;

use super::{HEADER, PULUMI_SDK};
use crate::ast::{Func, ImportBlock, Struct, StructField};

/// A resource the module can construct by token.
#[derive(Debug, Clone)]
pub struct ModuleResource {
    pub token: String,
    pub module: String,
    pub type_name: String,
}

/// Registers the package's resource modules with the pulumi runtime.
///
/// Every resource lives in the one Go package, so a single `module` value
/// serves each schema module.
pub struct InitGo {
    pub package_name: String,
    pub plugin: String,
    pub internal_import: String,
    pub resources: Vec<ModuleResource>,
}

impl InitGo {
    fn modules(&self) -> Vec<&str> {
        let mut modules: Vec<&str> = self.resources.iter().map(|r| r.module.as_str()).collect();
        modules.sort_unstable();
        modules.dedup();
        modules
    }

    fn construct(&self) -> Func {
        let mut cases = Vec::new();
        for resource in &self.resources {
            cases.push(CodeFragment::line(format!("case \"{}\":", resource.token)));
            cases.push(CodeFragment::indent(vec![CodeFragment::line(format!(
                "r = &{}{{}}",
                resource.type_name
            ))]));
        }
        cases.push(CodeFragment::line("default:"));
        cases.push(CodeFragment::indent(vec![CodeFragment::line(
            "return nil, fmt.Errorf(\"unknown resource type: %s\", typ)",
        )]));

        Func::new("Construct")
            .receiver("m *module")
            .params("ctx *pulumi.Context, name, typ, urn string")
            .returns("(r pulumi.Resource, err error)")
            .body([
                CodeFragment::line("switch typ {"),
                CodeFragment::sequence(cases),
                CodeFragment::line("}"),
                CodeFragment::blank(),
                CodeFragment::line("err = ctx.RegisterResource(typ, name, nil, r, pulumi.URN_(urn))"),
                CodeFragment::line("return"),
            ])
    }

    fn init(&self) -> Func {
        let mut body = vec![
            CodeFragment::line("version, err := internal.PkgVersion()"),
            CodeFragment::block(
                "if err != nil {",
                vec![CodeFragment::line("version = semver.Version{Major: 1}")],
                Some("}".to_string()),
            ),
        ];
        for module in self.modules() {
            body.push(CodeFragment::block(
                "pulumi.RegisterResourceModule(",
                vec![
                    CodeFragment::line(format!("\"{}\",", self.plugin)),
                    CodeFragment::line(format!("\"{}\",", module)),
                    CodeFragment::line("&module{version},"),
                ],
                Some(")".to_string()),
            ));
        }
        Func::new("init").body(body)
    }
}

impl SourceFile for InitGo {
    fn path(&self) -> String {
        format!("{}/init.go", self.package_name)
    }

    fn render(&self) -> String {
        let mut imports = ImportCollector::new();
        imports.add_module("fmt");
        imports.add_module("github.com/blang/semver");
        imports.add_module(&self.internal_import);
        imports.add_module(PULUMI_SDK);

        let module = Struct::new("module").field(StructField::new("version", "semver.Version"));
        let version = Func::new("Version")
            .receiver("m *module")
            .returns("semver.Version")
            .line("return m.version");

        let mut code = CodeBuilder::go();
        code.push_raw(HEADER)
            .push_blank()
            .push_line(&format!("package {}", self.package_name))
            .push_blank()
            .emit(&ImportBlock::new(&imports))
            .push_blank()
            .emit(&module)
            .push_blank()
            .emit(&version)
            .push_blank()
            .emit(&self.construct())
            .push_blank()
            .emit(&self.init());
        code.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn init_go() -> InitGo {
        InitGo {
            package_name: "openai".to_string(),
            plugin: "openai".to_string(),
            internal_import: "github.com/pulumi/pulumi-openai/sdk/go/openai/internal".to_string(),
            resources: vec![
                ModuleResource {
                    token: "openai:beta:Assistant".to_string(),
                    module: "beta".to_string(),
                    type_name: "Assistant".to_string(),
                },
                ModuleResource {
                    token: "openai:index:VectorStore".to_string(),
                    module: "index".to_string(),
                    type_name: "VectorStore".to_string(),
                },
            ],
        }
    }

    #[test]
    fn test_construct_switch() {
        let content = init_go().render();
        assert!(content.contains(
            "\tswitch typ {\n\tcase \"openai:beta:Assistant\":\n\t\tr = &Assistant{}\n"
        ));
        assert!(content.contains("\tdefault:\n\t\treturn nil, fmt.Errorf("));
    }

    #[test]
    fn test_registers_each_module() {
        let content = init_go().render();
        assert!(content.contains("\tpulumi.RegisterResourceModule(\n\t\t\"openai\",\n\t\t\"beta\",\n"));
        assert!(content.contains("\t\t\"index\",\n\t\t&module{version},\n\t)\n"));
        assert_eq!(content.matches("RegisterResourceModule").count(), 2);
    }
}
