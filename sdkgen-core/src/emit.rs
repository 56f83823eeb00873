//! Persisting a generated file set under an output root.

use std::{
    fs,
    path::{Component, Path, PathBuf},
};

use miette::Diagnostic;
use thiserror::Error;
use tracing::debug;

use crate::GeneratedFile;

/// Errors raised while writing generated files.
#[derive(Debug, Error, Diagnostic)]
pub enum EmitError {
    #[error("refusing to write '{path}': path escapes the output directory")]
    #[diagnostic(
        code(sdkgen::path_traversal),
        help("generated paths must be relative and must not contain '..' components")
    )]
    PathTraversal { path: String },

    #[error("failed to write file {}", path.display())]
    #[diagnostic(code(sdkgen::write_error))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl EmitError {
    /// The path of the file that failed.
    pub fn path(&self) -> String {
        match self {
            EmitError::PathTraversal { path } => path.clone(),
            EmitError::Io { path, .. } => path.display().to_string(),
        }
    }
}

/// Statistics from an emit operation.
#[derive(Debug, Default)]
pub struct EmitStats {
    /// Relative paths of written files, in write order.
    pub written: Vec<String>,
    /// Total number of bytes written.
    pub bytes: usize,
}

impl EmitStats {
    /// Number of files written.
    pub fn count(&self) -> usize {
        self.written.len()
    }
}

/// Join a generated relative path under `root`.
///
/// Rejects empty paths, absolute paths, drive or root prefixes and any `..`
/// component. `.` components are dropped.
pub fn resolve_path(root: &Path, relative: &str) -> Result<PathBuf, EmitError> {
    let traversal = || EmitError::PathTraversal {
        path: relative.to_string(),
    };

    let mut resolved = root.to_path_buf();
    let mut depth = 0usize;
    for component in Path::new(relative).components() {
        match component {
            Component::Normal(part) => {
                resolved.push(part);
                depth += 1;
            }
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                return Err(traversal());
            }
        }
    }

    if depth == 0 {
        return Err(traversal());
    }
    Ok(resolved)
}

/// Write every file under `root`, creating parent directories and
/// overwriting existing files.
///
/// All paths are checked before anything is written, so a set containing an
/// escaping path leaves the disk untouched. After that the first write
/// failure is returned immediately and names the failing file; files written
/// before it are left in place.
pub fn emit(root: &Path, files: &[GeneratedFile]) -> Result<EmitStats, EmitError> {
    let targets = files
        .iter()
        .map(|file| resolve_path(root, file.path()).map(|path| (path, file)))
        .collect::<Result<Vec<_>, _>>()?;

    let mut stats = EmitStats::default();
    for (path, file) in targets {
        write_file(&path, file.content())?;
        debug!(path = %file.path(), bytes = file.len(), "wrote file");
        stats.written.push(file.path().to_string());
        stats.bytes += file.len();
    }

    Ok(stats)
}

fn write_file(path: &Path, content: &[u8]) -> Result<(), EmitError> {
    let io_error = |source| EmitError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(io_error)?;
    }
    fs::write(path, content).map_err(io_error)
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_resolve_path_joins_relative() {
        let root = Path::new("/out");
        let path = resolve_path(root, "go/openai/doc.go").unwrap();
        assert_eq!(path, PathBuf::from("/out/go/openai/doc.go"));
    }

    #[test]
    fn test_resolve_path_drops_current_dir() {
        let root = Path::new("/out");
        let path = resolve_path(root, "./a/./b.txt").unwrap();
        assert_eq!(path, PathBuf::from("/out/a/b.txt"));
    }

    #[test]
    fn test_resolve_path_rejects_parent_components() {
        let root = Path::new("/out");
        assert!(matches!(
            resolve_path(root, "../../etc/passwd"),
            Err(EmitError::PathTraversal { .. })
        ));
        assert!(matches!(
            resolve_path(root, "a/../../b"),
            Err(EmitError::PathTraversal { .. })
        ));
        // Even a `..` that would stay inside the root is rejected
        assert!(matches!(
            resolve_path(root, "a/../b"),
            Err(EmitError::PathTraversal { .. })
        ));
    }

    #[test]
    fn test_resolve_path_rejects_absolute_and_empty() {
        let root = Path::new("/out");
        assert!(resolve_path(root, "/etc/passwd").is_err());
        assert!(resolve_path(root, "").is_err());
        assert!(resolve_path(root, ".").is_err());
    }

    #[test]
    fn test_emit_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let files = vec![GeneratedFile::new("a/b/c/test.txt", "nested")];

        let stats = emit(temp.path(), &files).unwrap();

        let path = temp.path().join("a/b/c/test.txt");
        assert_eq!(fs::read_to_string(path).unwrap(), "nested");
        assert_eq!(stats.count(), 1);
        assert_eq!(stats.bytes, 6);
    }

    #[test]
    fn test_emit_creates_missing_root() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("does/not/exist");

        emit(&root, &[GeneratedFile::new("x.txt", "x")]).unwrap();

        assert!(root.join("x.txt").exists());
    }

    #[test]
    fn test_emit_overwrites_existing() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("test.txt");
        fs::write(&path, "original").unwrap();

        emit(temp.path(), &[GeneratedFile::new("test.txt", "updated")]).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "updated");
    }

    #[test]
    fn test_emit_rejects_traversal_before_writing() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("out");
        let files = vec![
            GeneratedFile::new("ok.txt", "fine"),
            GeneratedFile::new("../../etc/passwd", "root::0:0"),
        ];

        let err = emit(&root, &files).unwrap_err();

        assert!(matches!(err, EmitError::PathTraversal { ref path } if path == "../../etc/passwd"));
        assert!(!root.join("ok.txt").exists());
        assert!(!temp.path().join("etc").exists());
    }

    #[test]
    fn test_emit_reports_failing_file() {
        let temp = TempDir::new().unwrap();
        // A regular file where a directory is needed makes create_dir_all fail
        fs::write(temp.path().join("blocker"), "").unwrap();
        let files = vec![GeneratedFile::new("blocker/inner.txt", "x")];

        let err = emit(temp.path(), &files).unwrap_err();

        match err {
            EmitError::Io { path, .. } => assert!(path.ends_with("blocker/inner.txt")),
            other => panic!("expected Io error, got {:?}", other),
        }
    }
}
