//! package.json generator.

use sdkgen_codegen::{Result, generation::DependencyCollector};
use sdkgen_core::SourceFile;
use sdkgen_ir::PackageMeta;
use serde_json::{Map, Value, json};

use crate::NodeOptions;

const PULUMI_VERSION: &str = "^3.0.0";
const DEFAULT_DEV_DEPENDENCIES: &[(&str, &str)] = &[("@types/node", "^18"), ("typescript", "^4.6.3")];

/// The package.json manifest.
///
/// Built from the package metadata, or from `packageJsonTemplate` when one
/// is given. Dependencies merge in three layers: the template, the defaults
/// (which never override the template) and the `dependencies` options
/// (which override both).
#[derive(Debug, Clone)]
pub struct PackageJson {
    pub name: String,
    pub version: String,
    /// Plugin name recorded under the `pulumi` key.
    pub plugin: String,
    base: Map<String, Value>,
    pub dependencies: DependencyCollector,
    pub dev_dependencies: DependencyCollector,
}

impl PackageJson {
    pub fn from_options(meta: &PackageMeta, options: &NodeOptions) -> Result<Self> {
        let name = options.package_name(meta);
        let template = options.template(meta)?;

        let mut dependencies = template_dependencies(template.as_ref(), "dependencies");
        dependencies.add("@pulumi/pulumi", PULUMI_VERSION);
        for (dep, version) in options.dependencies.iter().flatten() {
            dependencies.set(dep, version);
        }

        let mut dev_dependencies = template_dependencies(template.as_ref(), "devDependencies");
        for (dep, version) in DEFAULT_DEV_DEPENDENCIES {
            dev_dependencies.add(*dep, *version);
        }
        for (dep, version) in options.dev_dependencies.iter().flatten() {
            dev_dependencies.set(dep, version);
        }

        let base = template.unwrap_or_else(|| default_document(&name, meta));
        Ok(Self {
            name,
            version: meta.version.clone(),
            plugin: meta.name.clone(),
            base,
            dependencies,
            dev_dependencies,
        })
    }
}

fn template_dependencies(template: Option<&Map<String, Value>>, key: &str) -> DependencyCollector {
    template
        .and_then(|t| t.get(key))
        .and_then(Value::as_object)
        .map(|deps| {
            deps.iter()
                .filter_map(|(name, version)| Some((name.clone(), version.as_str()?.to_string())))
                .collect()
        })
        .unwrap_or_default()
}

fn default_document(name: &str, meta: &PackageMeta) -> Map<String, Value> {
    let mut doc = Map::new();
    doc.insert("name".into(), json!(name));
    doc.insert("version".into(), json!(meta.version));
    if let Some(description) = &meta.description {
        doc.insert("description".into(), json!(description));
    }
    if !meta.keywords.is_empty() {
        doc.insert("keywords".into(), json!(meta.keywords));
    }
    for (key, value) in [
        ("homepage", &meta.homepage),
        ("repository", &meta.repository),
        ("license", &meta.license),
    ] {
        if let Some(value) = value {
            doc.insert(key.into(), json!(value));
        }
    }
    doc.insert("main".into(), json!("bin/index.js"));
    doc.insert("types".into(), json!("bin/index.d.ts"));
    doc.insert("scripts".into(), json!({ "build": "tsc" }));
    doc
}

fn dependency_object(deps: &DependencyCollector) -> Value {
    Value::Object(
        deps.iter()
            .map(|(name, version)| (name.to_string(), json!(version)))
            .collect(),
    )
}

impl SourceFile for PackageJson {
    fn path(&self) -> String {
        "package.json".to_string()
    }

    fn render(&self) -> String {
        let mut doc = self.base.clone();
        doc.entry("name").or_insert_with(|| json!(self.name));
        doc.entry("version").or_insert_with(|| json!(self.version));
        doc.insert("dependencies".into(), dependency_object(&self.dependencies));
        doc.insert("devDependencies".into(), dependency_object(&self.dev_dependencies));

        let mut pulumi = doc
            .get("pulumi")
            .and_then(Value::as_object)
            .cloned()
            .unwrap_or_default();
        pulumi.insert("resource".into(), json!(true));
        pulumi.insert("name".into(), json!(self.plugin));
        pulumi.insert("version".into(), json!(self.version));
        doc.insert("pulumi".into(), Value::Object(pulumi));

        format!("{:#}\n", Value::Object(doc))
    }
}
