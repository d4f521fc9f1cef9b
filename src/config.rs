//! Optional defaults file for the incept command line.
//! The first of `incept.json`, `incept.yml` or `incept.yaml` found in a
//! directory supplies defaults that explicit flags override.

use crate::constants::{CONFIG_FILES, DEFAULT_OUTPUT_DIR};
use crate::error::{Error, Result};
use crate::registry::ArchetypeKind;
use log::debug;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Values read from the defaults file. Every key is optional.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub archetype: Option<ArchetypeKind>,
    pub output_dir: Option<PathBuf>,
}

impl Config {
    /// Archetype to build when none is given on the command line.
    pub fn archetype_or_default(&self) -> ArchetypeKind {
        self.archetype.unwrap_or(ArchetypeKind::Standard)
    }

    /// Parent directory of the project root when none is given on the command line.
    pub fn output_dir_or_default(&self) -> PathBuf {
        self.output_dir.clone().unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR))
    }
}

/// Returns the path of the first defaults file present in `dir`, if any.
pub fn find_config<P: AsRef<Path>>(dir: P, config_files: &[&str]) -> Option<PathBuf> {
    config_files.iter().map(|file| dir.as_ref().join(file)).find(|path| path.is_file())
}

/// Parses defaults file content, trying JSON first and YAML second.
///
/// # Errors
/// * `Error::ConfigError` if the content is neither valid JSON nor valid YAML,
///   or holds unknown keys
pub fn parse_config(content: &str) -> Result<Config> {
    if content.trim().is_empty() {
        return Ok(Config::default());
    }
    match serde_json::from_str(content) {
        Ok(config) => Ok(config),
        Err(_) => serde_yaml::from_str(content)
            .map_err(|e| Error::ConfigError(format!("Invalid configuration format: {e}"))),
    }
}

/// Loads the defaults file from `dir`, or returns empty defaults if there is none.
///
/// # Errors
/// * `Error::IoError` if the file exists but cannot be read
/// * `Error::ConfigError` if it cannot be parsed
pub fn load_config<P: AsRef<Path>>(dir: P) -> Result<Config> {
    let Some(path) = find_config(&dir, &CONFIG_FILES) else {
        debug!("No configuration file found (tried: {})", CONFIG_FILES.join(", "));
        return Ok(Config::default());
    };

    debug!("Loading configuration from {}", path.display());
    let content = std::fs::read_to_string(&path)
        .map_err(|source| Error::IoError { path: path.clone(), source })?;
    match parse_config(&content) {
        Err(Error::ConfigError(msg)) => {
            Err(Error::ConfigError(format!("{}: {msg}", path.display())))
        }
        other => other,
    }
}
