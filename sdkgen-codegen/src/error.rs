use miette::Diagnostic;
use sdkgen_ir::Property;
use sdkgen_schema::Language;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while dispatching to and running a language backend.
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("unsupported language '{name}'")]
    #[diagnostic(
        code(sdkgen::unsupported_language),
        help("supported languages are: {supported}")
    )]
    UnsupportedLanguage { name: String, supported: String },

    #[error("{language} generation failed: {message}")]
    #[diagnostic(code(sdkgen::generation))]
    Generation { language: Language, message: String },
}

impl Error {
    pub fn generation(language: Language, message: impl Into<String>) -> Self {
        Self::Generation {
            language,
            message: message.into(),
        }
    }

    /// A property whose type the target language cannot express.
    pub fn unrepresentable(language: Language, resource: &str, property: &Property) -> Self {
        Self::generation(
            language,
            format!(
                "property '{}' of resource '{}' has type {}, which is not supported",
                property.name,
                resource,
                property.ty.describe()
            ),
        )
    }

    /// An `id` or `urn` output whose type differs from the base resource's.
    pub fn identity_type(language: Language, resource: &str, property: &Property) -> Self {
        Self::generation(
            language,
            format!(
                "output '{}' of resource '{}' has type {}, but every resource's {} is a string",
                property.name,
                resource,
                property.ty.describe(),
                property.name
            ),
        )
    }

    /// Options that failed to decode into a backend's option struct.
    pub fn invalid_options(language: Language, source: impl std::fmt::Display) -> Self {
        Self::generation(language, format!("invalid options: {}", source))
    }

    pub fn is_unsupported_language(&self) -> bool {
        matches!(self, Self::UnsupportedLanguage { .. })
    }
}
