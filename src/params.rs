//! Scaffold inputs shared by every renderer of an archetype.

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime};
use indexmap::IndexMap;
use serde_json::Value;

use crate::error::{Error, Result};

/// Names under which [`ArchetypeParameters::as_mapping`] exposes its fields.
pub const MAPPING_KEYS: [&str; 6] =
    ["package_name", "author", "author_email", "date", "year", "timestamp"];

/// Immutable record of the values substituted into every template.
///
/// Construction is the only place validation happens: `package_name` and
/// `author` must be non-empty. Whether the package name is a valid module
/// identifier is left to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchetypeParameters {
    package_name: String,
    author: String,
    author_email: String,
    timestamp: NaiveDateTime,
}

impl ArchetypeParameters {
    /// Creates a validated parameter record.
    ///
    /// # Errors
    /// * `Error::ValidationError` if `package_name` or `author` is empty or
    ///   whitespace only
    pub fn new<S: Into<String>>(
        package_name: S,
        author: S,
        author_email: S,
        timestamp: NaiveDateTime,
    ) -> Result<Self> {
        let package_name = package_name.into();
        let author = author.into();
        let author_email = author_email.into();

        require_non_empty("package_name", &package_name)?;
        require_non_empty("author", &author)?;

        Ok(Self { package_name, author, author_email, timestamp })
    }

    /// Same as [`ArchetypeParameters::new`] with the timestamp set to midnight of `date`.
    pub fn on_date<S: Into<String>>(
        package_name: S,
        author: S,
        author_email: S,
        date: NaiveDate,
    ) -> Result<Self> {
        Self::new(package_name, author, author_email, date.and_time(NaiveTime::MIN))
    }

    pub fn package_name(&self) -> &str {
        &self.package_name
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn author_email(&self) -> &str {
        &self.author_email
    }

    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    /// Returns the template substitution context, keyed by [`MAPPING_KEYS`].
    pub fn as_mapping(&self) -> IndexMap<&'static str, Value> {
        let mut mapping = IndexMap::with_capacity(MAPPING_KEYS.len());
        mapping.insert("package_name", Value::from(self.package_name.as_str()));
        mapping.insert("author", Value::from(self.author.as_str()));
        mapping.insert("author_email", Value::from(self.author_email.as_str()));
        mapping.insert("date", Value::from(self.timestamp.format("%Y-%m-%d").to_string()));
        mapping.insert("year", Value::from(self.timestamp.year()));
        mapping.insert(
            "timestamp",
            Value::from(self.timestamp.format("%Y-%m-%dT%H:%M:%S").to_string()),
        );
        mapping
    }
}

fn require_non_empty(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::ValidationError(format!("'{field}' must not be empty")));
    }
    Ok(())
}
