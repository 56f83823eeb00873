//! README.md for the Python SDK.

use sdkgen_codegen::{builder::CodeBuilder, generation::Readme};
use sdkgen_ir::Package;

use crate::{PythonSettings, naming::PY_NAMING, type_mapper::PythonTypeMapper};

/// Build the README, with a usage example creating the first resource.
pub fn python_readme(package: &Package, settings: &PythonSettings) -> Readme {
    Readme {
        path: "README.md".to_string(),
        package: settings.package_name.clone(),
        description: package.meta.description.clone(),
        language: "Python",
        install: format!("pip install {}", settings.package_name),
        fence: "python",
        usage: usage(package, settings),
    }
}

fn usage(package: &Package, settings: &PythonSettings) -> String {
    let Some(resource) = package.resources.first() else {
        return String::new();
    };
    let mapper = PythonTypeMapper;
    let alias = PY_NAMING.field_name(&package.meta.name);
    let variable = PY_NAMING.field_name(&resource.name);
    let required: Vec<_> = resource.required_inputs().collect();

    CodeBuilder::python()
        .line(&format!("import {} as {}", settings.package_name, alias))
        .blank()
        .line(&format!(
            "{} = {}.{}(\"{}\"{}",
            variable,
            alias,
            PY_NAMING.type_name(&resource.name),
            PY_NAMING.file_name(&resource.name),
            if required.is_empty() { ")" } else { "," }
        ))
        .when(!required.is_empty(), |b| {
            b.indent()
                .each(&required, |b, p| {
                    b.line(&format!(
                        "{}={},",
                        PY_NAMING.field_name(&p.name),
                        mapper.example_value(p)
                    ))
                })
                .dedent()
                .line(")")
        })
        .build()
}

#[cfg(test)]
mod tests {
    use sdkgen_codegen::{generation::DependencyCollector, testing::vector_store_package};
    use sdkgen_core::SourceFile;

    use super::*;

    #[test]
    fn test_python_readme_usage() {
        let settings = PythonSettings {
            package_name: "pulumi_openai".to_string(),
            requires: DependencyCollector::new(),
            python_requires: ">=3.9".to_string(),
        };
        let content = python_readme(&vector_store_package(), &settings).render();
        assert!(content.contains("pip install pulumi_openai"));
        assert!(content.contains(
            "import pulumi_openai as openai\n\nvector_store = openai.VectorStore(\"vector_store\",\n    name=\"example\",\n)\n"
        ));
    }
}
