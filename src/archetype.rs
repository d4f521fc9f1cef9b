//! Archetypes: ordered collections of file builders describing one project tree.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use indexmap::IndexSet;
use log::{debug, info};

use crate::builder::FileBuilder;
use crate::error::{Error, Result};
use crate::params::ArchetypeParameters;
use crate::renderer::{FileRenderer, TemplateFile, TemplateRenderer};
use crate::templates::TemplateStore;

/// Member type stored by an [`Archetype`].
pub type Member = FileBuilder<Box<dyn FileRenderer>>;

/// A named set of files that are generated together.
///
/// Members are independent of each other: building the archetype is the same
/// as building every member, in any order. Every member must resolve to a
/// distinct path; a collision is reported as `Error::DuplicatePathError`
/// before anything is written.
pub struct Archetype {
    name: String,
    builders: Vec<Member>,
}

impl Archetype {
    /// Creates an archetype from arbitrary renderers.
    pub fn new<S, I>(name: S, renderers: I) -> Self
    where
        S: Into<String>,
        I: IntoIterator<Item = Box<dyn FileRenderer>>,
    {
        Self { name: name.into(), builders: renderers.into_iter().map(FileBuilder::new).collect() }
    }

    /// Creates an archetype from static template records.
    ///
    /// # Errors
    /// * `Error::TemplateError` if any referenced template is missing or
    ///   malformed
    pub fn from_templates<S, I>(name: S, files: I, store: &'static TemplateStore) -> Result<Self>
    where
        S: Into<String>,
        I: IntoIterator<Item = &'static TemplateFile>,
    {
        let renderers = files
            .into_iter()
            .map(|file| {
                TemplateRenderer::new(file, store).map(|r| Box::new(r) as Box<dyn FileRenderer>)
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::new(name, renderers))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn builders(&self) -> &[Member] {
        &self.builders
    }

    pub fn len(&self) -> usize {
        self.builders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.builders.is_empty()
    }

    /// Returns every path [`Archetype::build`] would write, in member order.
    ///
    /// # Errors
    /// * `Error::InvalidSubpathError` if a member's subpath escapes the root
    /// * `Error::DuplicatePathError` if two members resolve to the same path
    pub fn paths<P: AsRef<Path>>(
        &self,
        root_dir: P,
        params: &ArchetypeParameters,
    ) -> Result<Vec<PathBuf>> {
        let root_dir = root_dir.as_ref();
        let mut paths = IndexSet::with_capacity(self.builders.len());
        for builder in &self.builders {
            let path = builder.path(root_dir, params)?;
            if paths.contains(&path) {
                return Err(Error::DuplicatePathError { path });
            }
            paths.insert(path);
        }
        Ok(paths.into_iter().collect())
    }

    /// Returns the directories [`Archetype::build`] ensures exist, `root_dir`
    /// included, sorted.
    pub fn dir_paths<P: AsRef<Path>>(
        &self,
        root_dir: P,
        params: &ArchetypeParameters,
    ) -> Result<Vec<PathBuf>> {
        let root_dir = root_dir.as_ref();
        let mut dirs = BTreeSet::new();
        dirs.insert(root_dir.to_path_buf());
        for path in self.paths(root_dir, params)? {
            let mut current = path.parent();
            while let Some(dir) = current {
                if dir == root_dir || !dir.starts_with(root_dir) {
                    break;
                }
                dirs.insert(dir.to_path_buf());
                current = dir.parent();
            }
        }
        Ok(dirs.into_iter().collect())
    }

    /// Builds every member under `root_dir`.
    ///
    /// Paths are checked before anything is written. The first failing member
    /// aborts the build; files already written stay on disk.
    pub fn build<P: AsRef<Path>>(&self, root_dir: P, params: &ArchetypeParameters) -> Result<()> {
        let root_dir = root_dir.as_ref();
        info!("Building archetype '{}' into {}", self.name, root_dir.display());

        self.paths(root_dir, params)?;
        for builder in &self.builders {
            builder.build(root_dir, params)?;
        }

        debug!("Built {} files for archetype '{}'", self.builders.len(), self.name);
        Ok(())
    }
}

impl std::fmt::Debug for Archetype {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Archetype")
            .field("name", &self.name)
            .field("members", &self.builders.len())
            .finish()
    }
}
