//! Template storage and rendering for archetypes.
//! Templates are embedded from `data/archetypes/python` at compile time and
//! compiled on first use by a process-wide MiniJinja environment.

use std::sync::LazyLock;

use include_dir::{include_dir, Dir};
use log::debug;
use minijinja::{AutoEscape, Environment, ErrorKind, UndefinedBehavior};

use crate::error::{Error, Result};
use crate::params::ArchetypeParameters;

static ARCHETYPE_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/data/archetypes/python");

static EMBEDDED: LazyLock<TemplateStore> = LazyLock::new(|| {
    let mut env = base_environment();
    env.set_loader(|name| match ARCHETYPE_DIR.get_file(name) {
        Some(file) => file.contents_utf8().map(|s| Some(s.to_string())).ok_or_else(|| {
            minijinja::Error::new(
                ErrorKind::InvalidOperation,
                format!("template '{name}' is not valid UTF-8"),
            )
        }),
        None => Ok(None),
    });
    TemplateStore { env }
});

fn base_environment() -> Environment<'static> {
    let mut env = Environment::new();
    env.set_keep_trailing_newline(true);
    env.set_undefined_behavior(UndefinedBehavior::Strict);
    env.set_auto_escape_callback(|_| AutoEscape::None);
    env
}

/// A named collection of compiled templates.
///
/// Compiled templates are cached by the underlying environment, so looking up
/// the same template repeatedly compiles it only once.
pub struct TemplateStore {
    env: Environment<'static>,
}

impl TemplateStore {
    /// Returns the store backed by the templates embedded in the binary.
    pub fn embedded() -> &'static TemplateStore {
        &EMBEDDED
    }

    /// Builds a store from in-memory `(name, source)` pairs.
    ///
    /// # Errors
    /// * `Error::TemplateError` if any source fails to compile
    pub fn from_sources<I, N, S>(sources: I) -> Result<Self>
    where
        I: IntoIterator<Item = (N, S)>,
        N: Into<String>,
        S: Into<String>,
    {
        let mut env = base_environment();
        for (name, source) in sources {
            let name = name.into();
            env.add_template_owned(name.clone(), source.into())
                .map_err(|source| Error::TemplateError { template: name, source })?;
        }
        Ok(Self { env })
    }

    /// Loads and compiles a template, surfacing missing or malformed resources.
    pub fn compile(&self, name: &str) -> Result<()> {
        debug!("Compiling template '{name}'");
        self.env
            .get_template(name)
            .map(|_| ())
            .map_err(|source| Error::TemplateError { template: name.to_string(), source })
    }

    /// Renders template `name` with the mapping of `params` as context.
    ///
    /// Returns the raw MiniJinja error so callers can attach the destination
    /// they were rendering for.
    pub fn render(
        &self,
        name: &str,
        params: &ArchetypeParameters,
    ) -> std::result::Result<String, minijinja::Error> {
        self.env.get_template(name)?.render(params.as_mapping())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn params() -> ArchetypeParameters {
        let date = NaiveDate::from_ymd_opt(2020, 5, 17).unwrap();
        ArchetypeParameters::on_date("pkg", "Jo", "jo@example.com", date).unwrap()
    }

    #[test]
    fn test_embedded_templates_compile() {
        let store = TemplateStore::embedded();
        for file in ARCHETYPE_DIR.files() {
            let name = file.path().to_str().unwrap();
            store.compile(name).unwrap();
        }
    }

    #[test]
    fn test_missing_embedded_template() {
        let err = TemplateStore::embedded().compile("no-such-template.jinja").unwrap_err();
        match err {
            Error::TemplateError { template, source } => {
                assert_eq!(template, "no-such-template.jinja");
                assert_eq!(source.kind(), ErrorKind::TemplateNotFound);
            }
            other => panic!("Expected TemplateError, got {other:?}"),
        }
    }

    #[test]
    fn test_trailing_newline_is_kept() {
        let store = TemplateStore::from_sources([("t", "name={{ package_name }}\n")]).unwrap();
        assert_eq!(store.render("t", &params()).unwrap(), "name=pkg\n");
    }

    #[test]
    fn test_no_auto_escaping() {
        let store =
            TemplateStore::from_sources([("index.html", "<{{ author_email }}>")]).unwrap();
        assert_eq!(store.render("index.html", &params()).unwrap(), "<jo@example.com>");
    }

    #[test]
    fn test_undefined_variable_fails() {
        let store = TemplateStore::from_sources([("t", "{{ license }}")]).unwrap();
        let err = store.render("t", &params()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UndefinedError);
    }

    #[test]
    fn test_malformed_source_fails_to_load() {
        let result = TemplateStore::from_sources([("broken", "{% if %}")]);
        assert!(matches!(result, Err(Error::TemplateError { ref template, .. }) if template == "broken"));
    }
}
