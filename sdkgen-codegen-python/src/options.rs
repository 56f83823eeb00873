//! Options accepted by the Python backend.

use std::collections::BTreeMap;

use sdkgen_codegen::{Error, Result, generation::DependencyCollector};
use sdkgen_core::to_snake_case;
use sdkgen_ir::PackageMeta;
use sdkgen_schema::Language;
use serde::Deserialize;

use crate::naming::PY_NAMING;

const PULUMI_REQUIREMENT: &str = ">=3.0.0,<4.0.0";
const PYTHON_REQUIRES: &str = ">=3.9";

/// The `python` option bag.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct PythonOptions {
    /// Import name of the package, default `pulumi_<pkg>`.
    pub package_name: Option<String>,
    /// Requirement name to version specifier, e.g. `openai` to `>=1.0.0,<2.0.0`.
    pub requires: Option<BTreeMap<String, String>>,
    /// Interpreter constraint, default `>=3.9`.
    pub python_requires: Option<String>,
}

/// Options with every default applied.
#[derive(Debug, Clone)]
pub struct PythonSettings {
    pub package_name: String,
    pub requires: DependencyCollector,
    pub python_requires: String,
}

impl PythonOptions {
    pub fn resolve(self, meta: &PackageMeta) -> Result<PythonSettings> {
        let package_name = match self.package_name {
            Some(name) => {
                validate_package_name(&name)?;
                name
            }
            None => format!("pulumi_{}", to_snake_case(&meta.name)),
        };

        let mut requires = DependencyCollector::new();
        requires.add("pulumi", PULUMI_REQUIREMENT);
        for (name, specifier) in self.requires.into_iter().flatten() {
            requires.set(name, specifier);
        }

        Ok(PythonSettings {
            package_name,
            requires,
            python_requires: self
                .python_requires
                .unwrap_or_else(|| PYTHON_REQUIRES.to_string()),
        })
    }
}

fn validate_package_name(name: &str) -> Result<()> {
    let valid = name.starts_with(|c: char| c.is_ascii_alphabetic() || c == '_')
        && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
        && !PY_NAMING.is_reserved(name);
    if valid {
        Ok(())
    } else {
        Err(Error::invalid_options(
            Language::Python,
            format!("packageName '{}' is not a valid Python module name", name),
        ))
    }
}
