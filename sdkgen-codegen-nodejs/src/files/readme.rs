//! README.md for the Node.js SDK.

use sdkgen_codegen::{builder::CodeBuilder, generation::Readme};
use sdkgen_ir::Package;

use crate::{
    naming::{TS_NAMING, member_name},
    type_mapper::NodeTypeMapper,
};

/// Build the README, with a usage example creating the first resource.
pub fn node_readme(package: &Package, package_name: &str) -> Readme {
    Readme {
        path: "README.md".to_string(),
        package: package_name.to_string(),
        description: package.meta.description.clone(),
        language: "Node.js",
        install: format!("npm install {}", package_name),
        fence: "typescript",
        usage: usage(package, package_name),
    }
}

fn usage(package: &Package, package_name: &str) -> String {
    let Some(resource) = package.resources.first() else {
        return String::new();
    };
    let mapper = NodeTypeMapper;
    let alias = TS_NAMING.field_name(&package.meta.name);
    let variable = TS_NAMING.field_name(&resource.name);

    CodeBuilder::typescript()
        .line(&format!("import * as {} from \"{}\";", alias, package_name))
        .blank()
        .block_with_close(
            &format!(
                "const {0} = new {1}.{2}(\"{0}\", {{",
                variable,
                alias,
                TS_NAMING.type_name(&resource.name)
            ),
            "});",
            |b| {
                b.each(resource.required_inputs(), |b, p| {
                    b.line(&format!(
                        "{}: {},",
                        member_name(&p.name),
                        mapper.example_value(p)
                    ))
                })
            },
        )
        .build()
}

#[cfg(test)]
mod tests {
    use sdkgen_codegen::testing::vector_store_package;
    use sdkgen_core::SourceFile;

    use super::*;

    #[test]
    fn test_node_readme_usage() {
        let content = node_readme(&vector_store_package(), "@pulumi/openai").render();
        assert!(content.contains("npm install @pulumi/openai"));
        assert!(content.contains(
            "import * as openai from \"@pulumi/openai\";\n\nconst vectorStore = new openai.VectorStore(\"vectorStore\", {\n  name: \"example\",\n});\n"
        ));
    }
}
