use std::fmt;

/// A file produced by a backend: a relative output path and raw bytes.
///
/// Generated files are created in memory during generation and persisted
/// verbatim by [`emit`](crate::emit). They are never mutated after creation,
/// so the type exposes no setters.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct GeneratedFile {
    path: String,
    content: Vec<u8>,
}

impl GeneratedFile {
    /// Create a new file with the given relative path and content.
    pub fn new(path: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Relative path from the output root, using `/` separators.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Raw file content.
    pub fn content(&self) -> &[u8] {
        &self.content
    }

    /// File content as UTF-8 text, if it is valid UTF-8.
    pub fn as_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.content).ok()
    }

    /// Size of the content in bytes.
    pub fn len(&self) -> usize {
        self.content.len()
    }

    /// Whether the content is empty.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

impl fmt::Debug for GeneratedFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeneratedFile")
            .field("path", &self.path)
            .field("len", &self.content.len())
            .finish()
    }
}

/// Trait for types that render a single source file.
///
/// Backends describe fixed files (manifests, utilities, READMEs) as small
/// structs implementing this trait and convert them with
/// [`SourceFile::to_generated`].
pub trait SourceFile {
    /// Path relative to the output root.
    fn path(&self) -> String;

    /// Render the file content.
    fn render(&self) -> String;

    /// Render into an immutable [`GeneratedFile`].
    fn to_generated(&self) -> GeneratedFile {
        GeneratedFile::new(self.path(), self.render())
    }
}
