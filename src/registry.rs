//! The catalog of built-in archetypes.
//!
//! Each archetype is a static list of [`TemplateFile`] records. New archetypes
//! or files are added here; nothing else needs to change.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use clap::ValueEnum;
use serde::Deserialize;

use crate::archetype::Archetype;
use crate::error::{Error, Result};
use crate::params::ArchetypeParameters;
use crate::renderer::TemplateFile;
use crate::templates::TemplateStore;

fn test_package_init(params: &ArchetypeParameters, layer: &str) -> PathBuf {
    Path::new("tests")
        .join(layer)
        .join(format!("test_{}", params.package_name()))
        .join("__init__.py")
}

const INIT_PACKAGE: TemplateFile = TemplateFile {
    id: "init_package",
    template: "__init___package.py.jinja",
    subpath: |p| Path::new(p.package_name()).join("__init__.py"),
};

const PACKAGE_MODULE: TemplateFile = TemplateFile {
    id: "package_module",
    template: "package.py.jinja",
    subpath: |p| Path::new(p.package_name()).join(format!("{}.py", p.package_name())),
};

const INIT_TESTS: TemplateFile = TemplateFile {
    id: "init_tests",
    template: "__init___tests.py.jinja",
    subpath: |_| Path::new("tests").join("__init__.py"),
};

const INIT_TESTS_UNIT: TemplateFile = TemplateFile {
    id: "init_tests_unit",
    template: "__init___tests_unit.py.jinja",
    subpath: |_| Path::new("tests").join("unit").join("__init__.py"),
};

const INIT_TESTS_UNIT_PACKAGE: TemplateFile = TemplateFile {
    id: "init_tests_unit_package",
    template: "__init___tests_unit_package.py.jinja",
    subpath: |p| test_package_init(p, "unit"),
};

const INIT_TESTS_INTEGRATION: TemplateFile = TemplateFile {
    id: "init_tests_integration",
    template: "__init___tests_integration.py.jinja",
    subpath: |_| Path::new("tests").join("integration").join("__init__.py"),
};

const INIT_TESTS_INTEGRATION_PACKAGE: TemplateFile = TemplateFile {
    id: "init_tests_integration_package",
    template: "__init___tests_integration_package.py.jinja",
    subpath: |p| test_package_init(p, "integration"),
};

const INIT_TESTS_END_TO_END: TemplateFile = TemplateFile {
    id: "init_tests_end_to_end",
    template: "__init___tests_end_to_end.py.jinja",
    subpath: |_| Path::new("tests").join("end_to_end").join("__init__.py"),
};

const INIT_TESTS_END_TO_END_PACKAGE: TemplateFile = TemplateFile {
    id: "init_tests_end_to_end_package",
    template: "__init___tests_end_to_end_package.py.jinja",
    subpath: |p| test_package_init(p, "end_to_end"),
};

const LICENSE: TemplateFile =
    TemplateFile { id: "license", template: "LICENSE.apache.jinja", subpath: |_| "LICENSE".into() };

const LOG_CFG: TemplateFile =
    TemplateFile { id: "log_cfg", template: "log.cfg.jinja", subpath: |_| "log.cfg".into() };

const MAKEFILE: TemplateFile =
    TemplateFile { id: "makefile", template: "Makefile.jinja", subpath: |_| "Makefile".into() };

const PIPFILE: TemplateFile =
    TemplateFile { id: "pipfile", template: "Pipfile.jinja", subpath: |_| "Pipfile".into() };

const README_RST: TemplateFile = TemplateFile {
    id: "readme_rst",
    template: "README.rst.jinja",
    subpath: |_| "README.rst".into(),
};

const SETUP_CFG: TemplateFile =
    TemplateFile { id: "setup_cfg", template: "setup.cfg.jinja", subpath: |_| "setup.cfg".into() };

const SETUP_PY: TemplateFile =
    TemplateFile { id: "setup_py", template: "setup.py.jinja", subpath: |_| "setup.py".into() };

const SETUP_PY_APPLICATION: TemplateFile = TemplateFile {
    id: "setup_py",
    template: "setup_application.py.jinja",
    subpath: |_| "setup.py".into(),
};

const MAIN: TemplateFile = TemplateFile {
    id: "main",
    template: "main.py.jinja",
    subpath: |p| Path::new(p.package_name()).join("main.py"),
};

const DUNDER_MAIN: TemplateFile = TemplateFile {
    id: "dunder_main",
    template: "__main__.py.jinja",
    subpath: |p| Path::new(p.package_name()).join("__main__.py"),
};

/// Files of a plain Python package project.
static STANDARD_FILES: [TemplateFile; 16] = [
    INIT_PACKAGE,
    PACKAGE_MODULE,
    INIT_TESTS,
    INIT_TESTS_UNIT,
    INIT_TESTS_UNIT_PACKAGE,
    INIT_TESTS_INTEGRATION,
    INIT_TESTS_INTEGRATION_PACKAGE,
    INIT_TESTS_END_TO_END,
    INIT_TESTS_END_TO_END_PACKAGE,
    LICENSE,
    LOG_CFG,
    MAKEFILE,
    PIPFILE,
    README_RST,
    SETUP_CFG,
    SETUP_PY,
];

/// Files of a command line application: the standard tree with a
/// console-script entry point.
static APPLICATION_FILES: [TemplateFile; 18] = [
    INIT_PACKAGE,
    PACKAGE_MODULE,
    MAIN,
    DUNDER_MAIN,
    INIT_TESTS,
    INIT_TESTS_UNIT,
    INIT_TESTS_UNIT_PACKAGE,
    INIT_TESTS_INTEGRATION,
    INIT_TESTS_INTEGRATION_PACKAGE,
    INIT_TESTS_END_TO_END,
    INIT_TESTS_END_TO_END_PACKAGE,
    LICENSE,
    LOG_CFG,
    MAKEFILE,
    PIPFILE,
    README_RST,
    SETUP_CFG,
    SETUP_PY_APPLICATION,
];

/// Names of the built-in archetypes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArchetypeKind {
    /// Python package with setup files, license and a three-layer test tree
    Standard,
    /// The standard package plus a click-based command line entry point
    Application,
}

impl ArchetypeKind {
    pub const ALL: [ArchetypeKind; 2] = [ArchetypeKind::Standard, ArchetypeKind::Application];

    pub fn name(self) -> &'static str {
        match self {
            ArchetypeKind::Standard => "standard",
            ArchetypeKind::Application => "application",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            ArchetypeKind::Standard => {
                "Python package with setup files, license and a three-layer test tree"
            }
            ArchetypeKind::Application => {
                "the standard package plus a click-based command line entry point"
            }
        }
    }

    pub fn files(self) -> &'static [TemplateFile] {
        match self {
            ArchetypeKind::Standard => &STANDARD_FILES,
            ArchetypeKind::Application => &APPLICATION_FILES,
        }
    }

    /// Instantiates the archetype over the embedded templates.
    ///
    /// # Errors
    /// * `Error::TemplateError` if a template the archetype references is
    ///   missing or malformed
    pub fn archetype(self) -> Result<Archetype> {
        Archetype::from_templates(self.name(), self.files(), TemplateStore::embedded())
    }
}

impl fmt::Display for ArchetypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ArchetypeKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        ArchetypeKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| Error::UnknownArchetypeError { name: s.to_string() })
    }
}

/// Looks up a built-in archetype by name.
pub fn archetype(name: &str) -> Result<Archetype> {
    name.parse::<ArchetypeKind>()?.archetype()
}

/// Every built-in archetype, in catalog order.
pub fn all() -> Result<Vec<Archetype>> {
    ArchetypeKind::ALL.into_iter().map(ArchetypeKind::archetype).collect()
}
