//! index.ts generator.

use sdkgen_codegen::builder::CodeFragment;
use sdkgen_core::SourceFile;

use crate::{
    ast::{Export, Import},
    code_file::{CodeFile, RawCode},
};

/// A resource exported from the package entry point.
#[derive(Debug, Clone)]
pub struct IndexResource {
    pub token: String,
    pub module: String,
    pub class_name: String,
    /// File stem without extension, e.g. `vectorStore`.
    pub file_stem: String,
}

/// The package entry point.
///
/// Resource classes load lazily on first access; argument interfaces are
/// re-exported as types only.
pub struct IndexTs {
    pub plugin: String,
    pub resources: Vec<IndexResource>,
}

impl IndexTs {
    fn modules(&self) -> Vec<&str> {
        let mut modules: Vec<&str> = self.resources.iter().map(|r| r.module.as_str()).collect();
        modules.sort_unstable();
        modules.dedup();
        modules
    }

    fn lazy_exports(&self) -> RawCode {
        let lines: Vec<String> = self
            .resources
            .iter()
            .flat_map(|r| {
                let from = format!("./{}", r.file_stem);
                [
                    format!("export type {0} = import(\"{1}\").{0};", r.class_name, from),
                    format!(
                        "export const {0}: typeof import(\"{1}\").{0} = null as any;",
                        r.class_name, from
                    ),
                    format!(
                        "utilities.lazyLoad(exports, [\"{}\"], () => require(\"{}\"));",
                        r.class_name, from
                    ),
                ]
            })
            .collect();
        RawCode::new(lines.join("\n"))
    }

    fn construct(&self) -> Vec<CodeFragment> {
        let mut cases = Vec::new();
        for resource in &self.resources {
            cases.push(CodeFragment::line(format!("case \"{}\":", resource.token)));
            cases.push(CodeFragment::indent(vec![CodeFragment::line(format!(
                "return new {}(name, <any>undefined, {{ urn }});",
                resource.class_name
            ))]));
        }
        cases.push(CodeFragment::line("default:"));
        cases.push(CodeFragment::indent(vec![CodeFragment::line(
            "throw new Error(`unknown resource type ${type}`);",
        )]));

        let mut fragments = vec![CodeFragment::block(
            "const _module = {",
            vec![
                CodeFragment::line("version: utilities.getVersion(),"),
                CodeFragment::block(
                    "construct: (name: string, type: string, urn: string): pulumi.Resource => {",
                    vec![CodeFragment::block(
                        "switch (type) {",
                        cases,
                        Some("}".to_string()),
                    )],
                    Some("},".to_string()),
                ),
            ],
            Some("};".to_string()),
        )];
        for module in self.modules() {
            fragments.push(CodeFragment::line(format!(
                "pulumi.runtime.registerResourceModule(\"{}\", \"{}\", _module);",
                self.plugin, module
            )));
        }
        fragments
    }
}

impl SourceFile for IndexTs {
    fn path(&self) -> String {
        "index.ts".to_string()
    }

    fn render(&self) -> String {
        if self.resources.is_empty() {
            return CodeFile::generated()
                .add(RawCode::new("export {};"))
                .render();
        }

        CodeFile::generated()
            .import(Import::new("@pulumi/pulumi").namespace("pulumi"))
            .import(Import::new("./utilities").namespace("utilities"))
            .exports(self.resources.iter().map(|r| {
                Export::from(format!("./{}", r.file_stem))
                    .named(format!("{}Args", r.class_name))
                    .type_only()
            }))
            .add(self.lazy_exports())
            .add(CodeFragment::sequence(self.construct()))
            .render()
    }
}
