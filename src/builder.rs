//! Materializes a single rendered file under a root directory.

use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

use log::debug;

use crate::error::{Error, Result};
use crate::params::ArchetypeParameters;
use crate::renderer::FileRenderer;

/// Returns true if `subpath` is non-empty, relative and never climbs above
/// the directory it is joined onto.
pub fn is_subpath_valid<P: AsRef<Path>>(subpath: P) -> bool {
    let subpath = subpath.as_ref();
    if subpath.as_os_str().is_empty() {
        return false;
    }
    subpath.components().all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
        && subpath.components().any(|c| matches!(c, Component::Normal(_)))
}

/// Wraps a [`FileRenderer`] with path joining and disk writes.
///
/// The root directory is supplied per call and never stored.
#[derive(Debug, Clone)]
pub struct FileBuilder<R> {
    renderer: R,
}

impl<R: FileRenderer> FileBuilder<R> {
    pub fn new(renderer: R) -> Self {
        Self { renderer }
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Returns the subpath computed by the wrapped renderer.
    pub fn subpath(&self, params: &ArchetypeParameters) -> PathBuf {
        self.renderer.subpath(params)
    }

    /// Returns `root_dir` joined with the subpath. Never touches the disk.
    ///
    /// # Errors
    /// * `Error::InvalidSubpathError` if the subpath is empty, absolute or
    ///   contains `..`
    pub fn path<P: AsRef<Path>>(&self, root_dir: P, params: &ArchetypeParameters) -> Result<PathBuf> {
        let subpath = self.subpath(params);
        if !is_subpath_valid(&subpath) {
            return Err(Error::InvalidSubpathError { subpath });
        }
        Ok(root_dir.as_ref().join(subpath))
    }

    /// Renders the file and writes it to [`FileBuilder::path`].
    ///
    /// Missing parent directories are created; directories that already exist
    /// are fine. An existing file at the target is overwritten.
    ///
    /// # Errors
    /// * Render and subpath errors from the wrapped renderer
    /// * `Error::IoError` if a directory cannot be created or the file cannot
    ///   be written
    pub fn build<P: AsRef<Path>>(&self, root_dir: P, params: &ArchetypeParameters) -> Result<()> {
        let content = self.renderer.render(params)?;
        let target = self.path(root_dir, params)?;

        if let Some(parent) = target.parent() {
            create_dir_all(parent)?;
        }

        debug!("Writing file: {}", target.display());
        fs::write(&target, content).map_err(|source| Error::IoError { path: target, source })
    }
}

/// Creates `path` and its ancestors. Losing a creation race to another
/// process is not an error as long as a directory ends up there.
fn create_dir_all(path: &Path) -> Result<()> {
    if path.as_os_str().is_empty() {
        return Ok(());
    }
    match fs::create_dir_all(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists && path.is_dir() => Ok(()),
        Err(source) => Err(Error::IoError { path: path.to_path_buf(), source }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_subpath_valid() {
        assert!(is_subpath_valid("LICENSE"));
        assert!(is_subpath_valid("foo/__init__.py"));
        assert!(is_subpath_valid("./setup.py"));
        assert!(!is_subpath_valid(""));
        assert!(!is_subpath_valid("."));
        assert!(!is_subpath_valid("/etc/passwd"));
        assert!(!is_subpath_valid("../outside"));
        assert!(!is_subpath_valid("foo/../../outside"));
    }

    #[test]
    fn test_create_dir_all_accepts_existing_directory() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        create_dir_all(temp_dir.path()).unwrap();
        create_dir_all(&temp_dir.path().join("a/b")).unwrap();
        create_dir_all(&temp_dir.path().join("a/b")).unwrap();
        assert!(temp_dir.path().join("a/b").is_dir());
    }

    #[test]
    fn test_create_dir_all_fails_over_a_file() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let file = temp_dir.path().join("taken");
        fs::write(&file, "").unwrap();

        let err = create_dir_all(&file.join("sub")).unwrap_err();
        assert!(matches!(err, Error::IoError { .. }));
    }
}
