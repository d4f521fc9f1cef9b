//! incept generates the directory tree of a new project from a built-in
//! archetype: a fixed set of templates, each paired with the rule that places
//! its output under the project root.

/// Archetypes: ordered collections of file builders
pub mod archetype;

/// Path joining and disk writes for a single rendered file
pub mod builder;

/// Command-line interface module for the incept application
pub mod cli;

/// Optional defaults file handling
/// Supports JSON and YAML formats (incept.json, incept.yml, incept.yaml)
pub mod config;

pub mod constants;

/// Error types and handling for the incept application
pub mod error;

pub mod logger;

/// Validated scaffold inputs and their template mapping
pub mod params;

/// The catalog of built-in archetypes
pub mod registry;

/// File renderer capability and template-backed renderers
pub mod renderer;

/// Embedded template storage and MiniJinja rendering
pub mod templates;

pub use archetype::Archetype;
pub use builder::FileBuilder;
pub use error::{Error, Result};
pub use params::ArchetypeParameters;
pub use registry::ArchetypeKind;
pub use renderer::{FileRenderer, TemplateFile, TemplateRenderer};
