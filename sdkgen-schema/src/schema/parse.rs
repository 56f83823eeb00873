//! Schema parsing from files and strings.

use std::{path::Path, str::FromStr};

use tracing::debug;

use super::{Schema, document::SchemaDocument, validate::ParseContext};
use crate::{Error, Result, SourceContext};

impl FromStr for Schema {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_schema(s, "schema.json")
    }
}

impl Schema {
    /// Read and validate a schema file.
    ///
    /// Read failures are [`Error::Io`]; everything after the read, including
    /// content that is not UTF-8, is a parse or validation error.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        let content = String::from_utf8(bytes).map_err(|e| {
            let lossy = String::from_utf8_lossy(e.as_bytes()).into_owned();
            SourceContext::new(lossy, &filename).validation_error("schema file is not valid UTF-8")
        })?;
        parse_schema(&content, &filename)
    }

    /// Parse a schema from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_schema(content, filename)
    }
}

/// Parse and validate a schema from content with the given filename for
/// error reporting.
pub fn parse_schema(content: &str, filename: &str) -> Result<Schema> {
    let ctx = ParseContext::new(content, filename);
    let doc: SchemaDocument =
        serde_json::from_str(content).map_err(|e| ctx.source_context().parse_error(e))?;
    let schema = super::validate::resolve(doc, &ctx)?;

    debug!(
        package = %schema.name,
        version = %schema.version,
        resources = schema.resources.len(),
        "loaded schema"
    );
    Ok(schema)
}
