//! File renderers: the pure half of an archetype member.
//! A renderer decides where a file goes and what it contains, but never
//! touches the filesystem.

use std::path::PathBuf;

use log::debug;

use crate::error::{Error, Result};
use crate::params::ArchetypeParameters;
use crate::templates::TemplateStore;

/// Computes the location of a file relative to the project root.
pub type SubpathFn = fn(&ArchetypeParameters) -> PathBuf;

/// Trait for anything that can describe one generated file.
///
/// Both methods must be deterministic functions of `params` with no side
/// effects, which is what lets paths be previewed without building.
pub trait FileRenderer: Send + Sync {
    /// Returns the destination of the file relative to the root directory.
    fn subpath(&self, params: &ArchetypeParameters) -> PathBuf;

    /// Returns the full content of the file.
    fn render(&self, params: &ArchetypeParameters) -> Result<String>;
}

impl<R: FileRenderer + ?Sized> FileRenderer for Box<R> {
    fn subpath(&self, params: &ArchetypeParameters) -> PathBuf {
        (**self).subpath(params)
    }

    fn render(&self, params: &ArchetypeParameters) -> Result<String> {
        (**self).render(params)
    }
}

impl<R: FileRenderer + ?Sized> FileRenderer for &R {
    fn subpath(&self, params: &ArchetypeParameters) -> PathBuf {
        (**self).subpath(params)
    }

    fn render(&self, params: &ArchetypeParameters) -> Result<String> {
        (**self).render(params)
    }
}

/// Static pairing of a template resource with the rule placing its output.
#[derive(Debug, Clone, Copy)]
pub struct TemplateFile {
    /// Stable identifier used in listings and logs
    pub id: &'static str,
    /// Name of the template in the archetype data directory
    pub template: &'static str,
    pub subpath: SubpathFn,
}

/// A [`TemplateFile`] bound to the store its template is rendered from.
#[derive(Clone, Copy)]
pub struct TemplateRenderer {
    file: &'static TemplateFile,
    store: &'static TemplateStore,
}

impl TemplateRenderer {
    /// Binds `file` to `store`, compiling its template up front.
    ///
    /// # Errors
    /// * `Error::TemplateError` if the template is missing or malformed
    pub fn new(file: &'static TemplateFile, store: &'static TemplateStore) -> Result<Self> {
        store.compile(file.template)?;
        Ok(Self { file, store })
    }

    pub fn file(&self) -> &'static TemplateFile {
        self.file
    }
}

impl FileRenderer for TemplateRenderer {
    fn subpath(&self, params: &ArchetypeParameters) -> PathBuf {
        (self.file.subpath)(params)
    }

    fn render(&self, params: &ArchetypeParameters) -> Result<String> {
        debug!("Rendering '{}' from template '{}'", self.file.id, self.file.template);
        self.store.render(self.file.template, params).map_err(|source| Error::RenderError {
            template: self.file.template.to_string(),
            subpath: self.subpath(params),
            source,
        })
    }
}

impl std::fmt::Debug for TemplateRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TemplateRenderer").field("file", self.file).finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::path::Path;
    use std::sync::LazyLock;

    static STORE: LazyLock<TemplateStore> = LazyLock::new(|| {
        TemplateStore::from_sources([
            ("greeting.jinja", "Hello {{ author }} from {{ package_name }}!\n"),
            ("broken.jinja", "{{ missing }}"),
        ])
        .unwrap()
    });

    static GREETING: TemplateFile = TemplateFile {
        id: "greeting",
        template: "greeting.jinja",
        subpath: |p| Path::new(p.package_name()).join("GREETING"),
    };

    static BROKEN: TemplateFile =
        TemplateFile { id: "broken", template: "broken.jinja", subpath: |_| PathBuf::from("x") };

    static MISSING: TemplateFile =
        TemplateFile { id: "missing", template: "nope.jinja", subpath: |_| PathBuf::from("y") };

    fn params() -> ArchetypeParameters {
        let date = NaiveDate::from_ymd_opt(1900, 1, 1).unwrap();
        ArchetypeParameters::on_date("foo", "A", "a@example.com", date).unwrap()
    }

    #[test]
    fn test_render_and_subpath_are_deterministic() {
        let renderer = TemplateRenderer::new(&GREETING, &STORE).unwrap();
        let params = params();

        for _ in 0..3 {
            assert_eq!(renderer.subpath(&params), PathBuf::from("foo/GREETING"));
            assert_eq!(renderer.render(&params).unwrap(), "Hello A from foo!\n");
        }
    }

    #[test]
    fn test_missing_template_fails_at_construction() {
        let err = TemplateRenderer::new(&MISSING, &STORE).unwrap_err();
        assert!(matches!(err, Error::TemplateError { ref template, .. } if template == "nope.jinja"));
    }

    #[test]
    fn test_render_error_names_destination() {
        let renderer = TemplateRenderer::new(&BROKEN, &STORE).unwrap();
        match renderer.render(&params()).unwrap_err() {
            Error::RenderError { template, subpath, .. } => {
                assert_eq!(template, "broken.jinja");
                assert_eq!(subpath, PathBuf::from("x"));
            }
            other => panic!("Expected RenderError, got {other:?}"),
        }
    }

    #[test]
    fn test_boxed_renderer_delegates() {
        let boxed: Box<dyn FileRenderer> = Box::new(TemplateRenderer::new(&GREETING, &STORE).unwrap());
        assert_eq!(boxed.subpath(&params()), PathBuf::from("foo/GREETING"));
    }
}
