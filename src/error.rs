//! Error handling for the incept application.
//! Defines the error type and result alias used throughout the crate.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while preparing or building an archetype.
///
/// Every variant carries enough context (template name, subpath or
/// destination path) to tell which member of an archetype failed.
#[derive(Error, Debug)]
pub enum Error {
    /// A required parameter is missing or empty
    #[error("Validation error: {0}.")]
    ValidationError(String),

    /// A template resource is missing or does not compile
    #[error("Template error: '{template}': {source}.")]
    TemplateError {
        template: String,
        #[source]
        source: minijinja::Error,
    },

    /// Rendering a template against the parameters failed
    #[error("Render error: template '{template}' for '{}': {source}.", subpath.display())]
    RenderError {
        template: String,
        subpath: PathBuf,
        #[source]
        source: minijinja::Error,
    },

    /// Directory creation or file write failed
    #[error("IO error: '{}': {source}.", path.display())]
    IoError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A renderer produced a subpath that is empty, absolute or leaves the root
    #[error("Invalid subpath: '{}' must be relative and stay under the root directory.", subpath.display())]
    InvalidSubpathError { subpath: PathBuf },

    /// Two members of one archetype resolve to the same destination
    #[error("Duplicate path: '{}' is produced by more than one file in the archetype.", path.display())]
    DuplicatePathError { path: PathBuf },

    #[error("Unknown archetype: '{name}'.")]
    UnknownArchetypeError { name: String },

    /// The defaults file could not be read or parsed
    #[error("Configuration error: {0}.")]
    ConfigError(String),
}

/// Convenience type alias for Results with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// Prints the error message to stderr and exits with status code 1.
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(1);
}
