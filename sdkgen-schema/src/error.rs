use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for sdkgen-schema operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Encapsulates the source content and filename, reducing parameter passing
/// in error factory functions.
///
/// # Example
///
/// ```ignore
/// let ctx = SourceContext::new(content, "schema.json");
/// ctx.validation_error("missing package name");
/// ctx.unknown_type_error("VectorStore", "size", "integer", span);
/// ```
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    /// Create a new source context.
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    /// Get the source content.
    pub fn src(&self) -> &str {
        &self.src
    }

    /// Get the filename.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Create a parse error from a JSON error.
    pub fn parse_error(&self, source: serde_json::Error) -> Box<Error> {
        let span = json_error_span(&self.src, &source);
        Box::new(Error::Parse {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Byte span of a JSON error in this source.
    pub(crate) fn parse_error_span(&self, error: &serde_json::Error) -> Option<SourceSpan> {
        json_error_span(&self.src, error)
    }

    /// Create a validation error without a span.
    pub fn validation_error(&self, message: impl Into<String>) -> Box<Error> {
        Box::new(Error::Validation {
            src: self.named_source(),
            span: None,
            message: message.into(),
        })
    }

    /// Create a validation error with an optional span.
    pub fn validation_error_at(
        &self,
        message: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::Validation {
            src: self.named_source(),
            span,
            message: message.into(),
        })
    }

    /// Create a duplicate resource error.
    pub fn duplicate_resource_error(
        &self,
        name: impl Into<String>,
        first_key: impl Into<String>,
        second_key: impl Into<String>,
        first_span: Option<SourceSpan>,
        second_span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::DuplicateResource {
            src: self.named_source(),
            first_span,
            second_span,
            name: name.into(),
            first_key: first_key.into(),
            second_key: second_key.into(),
        })
    }

    /// Create an unknown property type error.
    pub fn unknown_type_error(
        &self,
        resource: impl Into<String>,
        property: impl Into<String>,
        ty: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::UnknownType {
            src: self.named_source(),
            span,
            resource: resource.into(),
            property: property.into(),
            ty: ty.into(),
        })
    }

    /// Create an error for a `required` entry naming an undeclared property.
    pub fn undeclared_required_error(
        &self,
        resource: impl Into<String>,
        name: impl Into<String>,
        list: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::UndeclaredRequired {
            src: self.named_source(),
            span,
            resource: resource.into(),
            name: name.into(),
            list: list.into(),
        })
    }

    /// Create an invalid identifier error.
    pub fn invalid_identifier_error(
        &self,
        name: impl Into<String>,
        context: impl Into<String>,
        reason: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::InvalidIdentifier {
            src: self.named_source(),
            span,
            name: name.into(),
            context: context.into(),
            reason: reason.into(),
        })
    }

    /// Create an options file error.
    pub fn options_error(
        &self,
        message: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::OptionsParse {
            src: self.named_source(),
            span,
            message: message.into(),
        })
    }
}

/// Convert the 1-based line/column of a JSON error into a byte span.
fn json_error_span(src: &str, error: &serde_json::Error) -> Option<SourceSpan> {
    if error.line() == 0 {
        return None;
    }

    let line_start: usize = src
        .split_inclusive('\n')
        .take(error.line() - 1)
        .map(str::len)
        .sum();
    let offset = (line_start + error.column().saturating_sub(1)).min(src.len());
    let len = usize::from(offset < src.len());
    Some(SourceSpan::from((offset, len)))
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{}'", path.display())]
    #[diagnostic(code(sdkgen::io_error))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse schema")]
    #[diagnostic(code(sdkgen::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: serde_json::Error,
    },

    #[error("duplicate resource '{name}'")]
    #[diagnostic(
        code(sdkgen::duplicate_resource),
        help("resource names must be unique within a package; rename or remove '{second_key}'")
    )]
    DuplicateResource {
        #[source_code]
        src: NamedSource<String>,
        #[label("first declared here as '{first_key}'")]
        first_span: Option<SourceSpan>,
        #[label("declared again here")]
        second_span: Option<SourceSpan>,
        name: String,
        first_key: String,
        second_key: String,
    },

    #[error("unknown type '{ty}' for property '{property}' of resource '{resource}'")]
    #[diagnostic(
        code(sdkgen::unknown_type),
        help(
            "valid types are: string, number, boolean, array of string, map of string (object with additionalProperties), object with properties"
        )
    )]
    UnknownType {
        #[source_code]
        src: NamedSource<String>,
        #[label("unknown type")]
        span: Option<SourceSpan>,
        resource: String,
        property: String,
        ty: String,
    },

    #[error("'{list}' of '{resource}' names undeclared property '{name}'")]
    #[diagnostic(
        code(sdkgen::undeclared_required),
        help("declare '{name}' in the matching property map or remove it from '{list}'")
    )]
    UndeclaredRequired {
        #[source_code]
        src: NamedSource<String>,
        #[label("not declared")]
        span: Option<SourceSpan>,
        resource: String,
        name: String,
        list: String,
    },

    #[error("{message}")]
    #[diagnostic(code(sdkgen::validation_error))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },

    #[error("invalid {context} name '{name}'")]
    #[diagnostic(
        code(sdkgen::invalid_identifier),
        help(
            "{reason}. Use only letters, numbers, and underscores, starting with a letter or underscore."
        )
    )]
    InvalidIdentifier {
        #[source_code]
        src: NamedSource<String>,
        #[label("invalid identifier")]
        span: Option<SourceSpan>,
        name: String,
        context: String,
        reason: String,
    },

    #[error("failed to parse options file: {message}")]
    #[diagnostic(
        code(sdkgen::options_error),
        help("options files map a language name to a table of backend options")
    )]
    OptionsParse {
        #[source_code]
        src: NamedSource<String>,
        #[label("here")]
        span: Option<SourceSpan>,
        message: String,
    },
}

impl Error {
    /// Whether this error came from reading the file rather than its content.
    pub fn is_io(&self) -> bool {
        matches!(self, Error::Io { .. })
    }
}
