//! Import and dependency collection utilities.

use std::collections::{BTreeMap, BTreeSet};

use indexmap::IndexMap;

/// Tracks imports and deduplicates them.
///
/// Modules keep insertion order; symbols within a module are sorted.
///
/// ```
/// use sdkgen_codegen::generation::ImportCollector;
///
/// let mut imports = ImportCollector::new();
/// imports.add("./utilities", "getVersion");
/// imports.add_module("@pulumi/pulumi");
/// imports.add("./utilities", "getPackage");
///
/// let modules: Vec<&str> = imports.iter().map(|(m, _)| m).collect();
/// assert_eq!(modules, ["./utilities", "@pulumi/pulumi"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ImportCollector {
    imports: IndexMap<String, BTreeSet<String>>,
}

impl ImportCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a symbol import from a module.
    pub fn add(&mut self, module: &str, symbol: &str) {
        self.imports
            .entry(module.to_string())
            .or_default()
            .insert(symbol.to_string());
    }

    /// Add a module import without specific symbols (e.g. `import * as pulumi`).
    pub fn add_module(&mut self, module: &str) {
        self.imports.entry(module.to_string()).or_default();
    }

    pub fn merge(&mut self, other: &ImportCollector) {
        for (module, symbols) in &other.imports {
            let entry = self.imports.entry(module.clone()).or_default();
            entry.extend(symbols.iter().cloned());
        }
    }

    pub fn has_module(&self, module: &str) -> bool {
        self.imports.contains_key(module)
    }

    pub fn has_symbol(&self, module: &str, symbol: &str) -> bool {
        self.imports
            .get(module)
            .is_some_and(|symbols| symbols.contains(symbol))
    }

    /// Iterate over all imports in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeSet<String>)> {
        self.imports.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Module paths sorted lexically, as Go and C# tooling expect.
    pub fn sorted_modules(&self) -> Vec<&str> {
        let mut modules: Vec<&str> = self.imports.keys().map(String::as_str).collect();
        modules.sort_unstable();
        modules
    }

    pub fn is_empty(&self) -> bool {
        self.imports.is_empty()
    }

    pub fn len(&self) -> usize {
        self.imports.len()
    }
}

/// Tracks package dependencies and their version requirements.
///
/// Iteration is sorted by package name so manifests render the same way on
/// every run.
///
/// ```
/// use sdkgen_codegen::generation::DependencyCollector;
///
/// let mut deps = DependencyCollector::new();
/// deps.add("@pulumi/pulumi", "^3.0.0");
/// deps.set("openai", "^4.0.0");
/// deps.add("@pulumi/pulumi", "^2.0.0");
///
/// assert_eq!(deps.get("@pulumi/pulumi"), Some("^3.0.0"));
/// assert_eq!(deps.len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct DependencyCollector {
    deps: BTreeMap<String, String>,
}

impl DependencyCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a dependency. If it already exists, this is a no-op.
    pub fn add(&mut self, name: impl Into<String>, version: impl Into<String>) {
        self.deps.entry(name.into()).or_insert_with(|| version.into());
    }

    /// Add a dependency, replacing any existing requirement.
    pub fn set(&mut self, name: impl Into<String>, version: impl Into<String>) {
        self.deps.insert(name.into(), version.into());
    }

    /// Overlay `other`; its requirements win on conflict.
    pub fn merge(&mut self, other: &DependencyCollector) {
        for (name, version) in other.iter() {
            self.set(name, version);
        }
    }

    pub fn has(&self, name: &str) -> bool {
        self.deps.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.deps.get(name).map(String::as_str)
    }

    /// Iterate over dependencies sorted by name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.deps.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.deps.is_empty()
    }

    pub fn len(&self) -> usize {
        self.deps.len()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for DependencyCollector {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut deps = Self::new();
        for (name, version) in iter {
            deps.set(name, version);
        }
        deps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_import_collector_basic() {
        let mut imports = ImportCollector::new();
        imports.add("./utilities", "getVersion");
        imports.add("./utilities", "getPackage");
        imports.add_module("@pulumi/pulumi");

        assert!(imports.has_module("@pulumi/pulumi"));
        assert!(imports.has_symbol("./utilities", "getPackage"));
        assert!(!imports.has_symbol("./utilities", "resourceOptsDefaults"));
        assert_eq!(imports.len(), 2);

        let symbols: Vec<_> = imports
            .iter()
            .next()
            .map(|(_, s)| s.iter().cloned().collect())
            .unwrap_or_default();
        assert_eq!(symbols, vec!["getPackage", "getVersion"]);
    }

    #[test]
    fn test_import_collector_merge() {
        let mut a = ImportCollector::new();
        a.add_module("reflect");

        let mut b = ImportCollector::new();
        b.add_module("context");
        b.add_module("reflect");

        a.merge(&b);

        assert_eq!(a.len(), 2);
        assert_eq!(a.sorted_modules(), vec!["context", "reflect"]);
    }

    #[test]
    fn test_dependency_collector_sorted() {
        let deps: DependencyCollector =
            [("openai", "^4.0.0"), ("@pulumi/pulumi", "^3.0.0"), ("axios", "^1")]
                .into_iter()
                .collect();

        let names: Vec<_> = deps.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["@pulumi/pulumi", "axios", "openai"]);
    }

    #[test]
    fn test_dependency_collector_merge_overrides() {
        let mut base = DependencyCollector::new();
        base.add("pulumi", ">=3.0.0,<4.0.0");

        let mut extra = DependencyCollector::new();
        extra.add("pulumi", ">=3.100.0,<4.0.0");
        extra.add("requests", ">=2");

        base.merge(&extra);
        assert_eq!(base.get("pulumi"), Some(">=3.100.0,<4.0.0"));
        assert!(base.has("requests"));
    }
}
