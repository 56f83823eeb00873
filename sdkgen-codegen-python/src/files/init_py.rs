//! Package `__init__.py` generator.

use std::collections::BTreeMap;

use sdkgen_codegen::builder::CodeBuilder;
use sdkgen_core::SourceFile;
use serde_json::{Value, json};

use super::HEADER;

/// A resource class the runtime can construct by token.
#[derive(Debug, Clone)]
pub struct ModuleClass {
    pub token: String,
    pub module: String,
    pub class_name: String,
    /// Module file stem, e.g. `vector_store`.
    pub file_stem: String,
}

/// Re-exports every resource module and registers them with the runtime.
pub struct InitPy {
    pub package_name: String,
    pub plugin: String,
    pub classes: Vec<ModuleClass>,
}

impl InitPy {
    /// The `resource_modules` registry, one entry per schema module.
    fn resource_modules(&self) -> Value {
        let mut modules: BTreeMap<&str, BTreeMap<&str, &str>> = BTreeMap::new();
        for class in &self.classes {
            modules
                .entry(class.module.as_str())
                .or_default()
                .insert(class.token.as_str(), class.class_name.as_str());
        }
        Value::Array(
            modules
                .into_iter()
                .map(|(module, classes)| {
                    json!({
                        "pkg": self.plugin,
                        "mod": module,
                        "fqn": self.package_name,
                        "classes": classes,
                    })
                })
                .collect(),
        )
    }
}

impl SourceFile for InitPy {
    fn path(&self) -> String {
        format!("{}/__init__.py", self.package_name)
    }

    fn render(&self) -> String {
        CodeBuilder::python()
            .raw(HEADER)
            .blank()
            .line("from . import _utilities")
            .when(!self.classes.is_empty(), |b| {
                b.line("# Export this package's modules as members:")
                    .each(&self.classes, |b, class| {
                        b.line(&format!("from .{} import *", class.file_stem))
                    })
                    .blank()
                    .block_with_close("_utilities.register(", ")", |b| {
                        b.line("resource_modules=\"\"\"")
                            .raw(&format!("{:#}\n", self.resource_modules()))
                            .line("\"\"\"")
                    })
            })
            .build()
    }
}
