//! Routing a language identifier to its backend.

use std::collections::BTreeMap;

use sdkgen_core::GeneratedFile;
use sdkgen_ir::Package;
use sdkgen_schema::{Language, LanguageOptions};

use super::LanguageCodegen;
use crate::{Error, Result};

/// Registry of language backends keyed by [`Language`].
///
/// The dispatcher only routes: option validation and defaults belong to the
/// backend it selects.
#[derive(Default)]
pub struct Dispatcher {
    backends: BTreeMap<Language, Box<dyn LanguageCodegen>>,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a backend, replacing any backend for the same language.
    pub fn register(mut self, backend: impl LanguageCodegen + 'static) -> Self {
        self.backends.insert(backend.language(), Box::new(backend));
        self
    }

    /// Registered languages in declaration order.
    pub fn languages(&self) -> impl Iterator<Item = Language> + '_ {
        self.backends.keys().copied()
    }

    /// Resolve an identifier or alias to a registered language.
    pub fn resolve(&self, identifier: &str) -> Result<Language> {
        identifier
            .parse::<Language>()
            .ok()
            .filter(|language| self.backends.contains_key(language))
            .ok_or_else(|| Error::UnsupportedLanguage {
                name: identifier.to_string(),
                supported: self
                    .languages()
                    .map(|l| l.as_str())
                    .collect::<Vec<_>>()
                    .join(", "),
            })
    }

    /// Run the backend registered for `language`.
    ///
    /// Files come back sorted by path; a backend producing the same path twice
    /// is a generation error.
    pub fn generate(
        &self,
        language: Language,
        package: &Package,
        options: &LanguageOptions,
    ) -> Result<Vec<GeneratedFile>> {
        let backend = self
            .backends
            .get(&language)
            .ok_or_else(|| Error::UnsupportedLanguage {
                name: language.to_string(),
                supported: self
                    .languages()
                    .map(|l| l.as_str())
                    .collect::<Vec<_>>()
                    .join(", "),
            })?;

        let mut files = backend.generate(package, options)?;
        files.sort_by(|a, b| a.path().cmp(b.path()));

        if let Some(pair) = files.windows(2).find(|w| w[0].path() == w[1].path()) {
            return Err(Error::generation(
                language,
                format!("file '{}' was generated twice", pair[0].path()),
            ));
        }

        tracing::info!(
            language = %language,
            package = %package.meta.name,
            resources = package.resources.len(),
            files = files.len(),
            "generated sdk"
        );
        Ok(files)
    }
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("languages", &self.backends.keys().collect::<Vec<_>>())
            .finish()
    }
}
