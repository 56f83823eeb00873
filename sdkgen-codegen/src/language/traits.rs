//! Language-agnostic code generation traits.

use sdkgen_core::GeneratedFile;
use sdkgen_ir::{Package, Property};
use sdkgen_schema::{Language, LanguageOptions};
use serde::de::DeserializeOwned;

use crate::{Error, Result};

/// A per-language generation backend.
///
/// Generation must be a pure function of its inputs: the same package and
/// options always yield byte-identical files. A backend either returns every
/// file or an error, never a partial set.
pub trait LanguageCodegen: Send + Sync {
    fn language(&self) -> Language;

    /// Generate the SDK for `package`.
    ///
    /// `options` is the merged option bag for this language; the backend
    /// validates it and applies its own defaults.
    fn generate(&self, package: &Package, options: &LanguageOptions) -> Result<Vec<GeneratedFile>>;
}

/// Maps IR property types to target type expressions.
pub trait TypeMapper {
    fn language(&self) -> Language;

    /// Type of a constructor argument for `property`.
    fn input_type(&self, resource: &str, property: &Property) -> Result<String>;

    /// Type of the readable output for `property`.
    fn output_type(&self, resource: &str, property: &Property) -> Result<String>;
}

/// Decode a backend's typed options, reporting bad keys as generation errors.
pub fn decode_options<T: DeserializeOwned>(
    language: Language,
    options: &LanguageOptions,
) -> Result<T> {
    options
        .decode()
        .map_err(|e| Error::invalid_options(language, e))
}
