//! The set of field names treated as PII.
//!
//! A [`SensitiveFields`] value is fixed once built. Loggers capture their own
//! copy, so mutating the list a logger was built from cannot change what that
//! logger redacts.

use std::{fmt, ops::Deref, sync::Arc};

use crate::{
    error::{Error, Result},
    row::LogRow,
};

/// Field names redacted by default.
pub const PII_FIELDS: [&str; 4] = ["name", "email", "ssn", "password"];

/// Ordered, immutable list of field names whose values must not be logged.
#[derive(Clone, PartialEq, Eq)]
pub struct SensitiveFields {
    names: Arc<[String]>,
}

impl SensitiveFields {
    /// Builds a set from the given names, preserving their order.
    ///
    /// Empty names are rejected: an empty name would match every `=` in a line.
    /// Duplicates are kept as given.
    pub fn new<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        if let Some(index) = names.iter().position(String::is_empty) {
            return Err(Error::EmptyFieldName { index });
        }
        Ok(Self {
            names: names.into(),
        })
    }

    /// Builds a set from the columns a [`LogRow`] type marks as PII.
    pub fn from_row<R: LogRow>() -> Self {
        Self {
            names: R::PII_FIELDS.iter().map(|name| (*name).to_string()).collect(),
        }
    }

    /// Returns the set with no names, which leaves every message unchanged.
    pub fn none() -> Self {
        Self {
            names: Arc::from(Vec::new()),
        }
    }

    /// Returns `true` if `name` is one of the sensitive fields.
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|candidate| candidate == name)
    }

    /// Iterates the names in configuration order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

impl Default for SensitiveFields {
    fn default() -> Self {
        Self {
            names: PII_FIELDS.iter().map(|name| (*name).to_string()).collect(),
        }
    }
}

impl Deref for SensitiveFields {
    type Target = [String];

    fn deref(&self) -> &Self::Target {
        &self.names
    }
}

impl fmt::Debug for SensitiveFields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a> IntoIterator for &'a SensitiveFields {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.names.iter()
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for SensitiveFields {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let names = Vec::<String>::deserialize(deserializer)?;
        Self::new(names).map_err(serde::de::Error::custom)
    }
}
