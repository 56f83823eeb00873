//! File registration for declarative code generation.
//!
//! Backends register every file they produce; the registry rejects two files
//! claiming the same path and hands the set back sorted by path so output is
//! byte-identical across runs.
//!
//! ```
//! use sdkgen_codegen::generation::{FileEntry, FileRegistry};
//! use sdkgen_schema::Language;
//!
//! let mut registry = FileRegistry::new(Language::NodeJs);
//! registry.register(FileEntry::manifest("package.json", "{}\n")).unwrap();
//! registry.register(FileEntry::resource("vectorStore.ts", "export {}\n")).unwrap();
//!
//! let files = registry.into_files();
//! assert_eq!(files[0].path(), "package.json");
//! ```

use std::collections::BTreeMap;

use sdkgen_core::{GeneratedFile, SourceFile};
use sdkgen_schema::Language;

use crate::{Error, Result};

/// Category of a generated file, used for logging and reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum FileCategory {
    /// Package manifests (package.json, setup.py, .csproj, pulumi-plugin.json).
    Manifest,
    /// Shared runtime helpers and package entry points.
    Support,
    /// One file per resource.
    Resource,
    Docs,
}

impl FileCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            FileCategory::Manifest => "manifest",
            FileCategory::Support => "support",
            FileCategory::Resource => "resource",
            FileCategory::Docs => "docs",
        }
    }
}

#[derive(Debug, Clone)]
pub struct FileEntry {
    /// Relative path from the output root.
    pub path: String,
    pub content: String,
    pub category: FileCategory,
}

impl FileEntry {
    pub fn new(
        path: impl Into<String>,
        content: impl Into<String>,
        category: FileCategory,
    ) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            category,
        }
    }

    pub fn manifest(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self::new(path, content, FileCategory::Manifest)
    }

    pub fn support(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self::new(path, content, FileCategory::Support)
    }

    pub fn resource(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self::new(path, content, FileCategory::Resource)
    }

    pub fn docs(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self::new(path, content, FileCategory::Docs)
    }

    /// Render a [`SourceFile`] into an entry.
    pub fn from_source(file: &impl SourceFile, category: FileCategory) -> Self {
        Self::new(file.path(), file.render(), category)
    }
}

/// Collects the files produced by one backend run.
#[derive(Debug)]
pub struct FileRegistry {
    language: Language,
    entries: BTreeMap<String, FileEntry>,
}

impl FileRegistry {
    pub fn new(language: Language) -> Self {
        Self {
            language,
            entries: BTreeMap::new(),
        }
    }

    /// Register a file. Two files with the same path are a generation error.
    pub fn register(&mut self, entry: FileEntry) -> Result<()> {
        if self.entries.contains_key(&entry.path) {
            return Err(Error::generation(
                self.language,
                format!("file '{}' would be generated twice", entry.path),
            ));
        }
        tracing::trace!(
            path = %entry.path,
            category = entry.category.as_str(),
            "registered file"
        );
        self.entries.insert(entry.path.clone(), entry);
        Ok(())
    }

    pub fn register_all(&mut self, entries: impl IntoIterator<Item = FileEntry>) -> Result<()> {
        entries.into_iter().try_for_each(|e| self.register(e))
    }

    pub fn contains(&self, path: &str) -> bool {
        self.entries.contains_key(path)
    }

    /// Entries in path order.
    pub fn entries(&self) -> impl Iterator<Item = &FileEntry> {
        self.entries.values()
    }

    pub fn entries_by_category(&self, category: FileCategory) -> impl Iterator<Item = &FileEntry> {
        self.entries().filter(move |e| e.category == category)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Consume the registry, yielding files sorted by path.
    pub fn into_files(self) -> Vec<GeneratedFile> {
        self.entries
            .into_values()
            .map(|e| GeneratedFile::new(e.path, e.content))
            .collect()
    }
}
