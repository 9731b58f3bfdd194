//! Building named, redacting loggers.
//!
//! Every logger built here is an independent `slog` root logger:
//!
//! ```text
//! Logger::root ─> IgnoreResult ─> LevelFilter(threshold) ─> RedactingDrain ─> writer
//! ```
//!
//! There is no parent to forward records to and no global registry, so each
//! record is written exactly once, by the drain of the logger it was sent to.
//! The sensitive field list is copied into the logger when it is built.

use std::{fmt, io};

use slog::{Drain, Level, LevelFilter};

use crate::{
    drain::RedactingDrain,
    error::Result,
    fields::SensitiveFields,
    format::{RecordFormat, RedactingFormatter, TAG},
    redact::{Redactor, REDACTION, SEPARATOR},
    row::LogRow,
};

/// Name of the logger returned by [`get_logger`].
pub const DEFAULT_LOGGER_NAME: &str = "user_data";

/// Everything needed to build a [`FilteredLogger`].
///
/// Missing keys fall back to the defaults when deserialized (`serde` feature).
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct LoggerConfig {
    /// Logger name written into every line.
    pub name: String,
    /// Fields whose values are masked.
    pub fields: SensitiveFields,
    /// Token written in place of masked values.
    pub redaction: String,
    /// Delimiter between `field=value` pairs.
    pub separator: char,
    /// Leading tag of every line.
    pub tag: String,
    /// Records below this severity are dropped.
    #[cfg_attr(feature = "serde", serde(deserialize_with = "deserialize_level"))]
    pub level: Level,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_LOGGER_NAME.to_string(),
            fields: SensitiveFields::default(),
            redaction: REDACTION.to_string(),
            separator: SEPARATOR,
            tag: TAG.to_string(),
            level: Level::Info,
        }
    }
}

impl LoggerConfig {
    /// Default configuration for a logger called `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Masks `fields` instead of [`PII_FIELDS`](crate::PII_FIELDS).
    #[must_use]
    pub fn with_fields(mut self, fields: SensitiveFields) -> Self {
        self.fields = fields;
        self
    }

    /// Writes `redaction` in place of masked values.
    #[must_use]
    pub fn with_redaction(mut self, redaction: impl Into<String>) -> Self {
        self.redaction = redaction.into();
        self
    }

    /// Delimits `field=value` pairs with `separator`.
    #[must_use]
    pub fn with_separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    /// Starts every line with `tag`.
    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    /// Drops records below `level`.
    #[must_use]
    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Builds a logger writing to standard output.
    pub fn build(&self) -> Result<FilteredLogger> {
        self.build_with_writer(io::stdout())
    }

    /// Builds a logger writing to `writer`.
    ///
    /// Fails only if a field pattern cannot be compiled.
    pub fn build_with_writer<W>(&self, writer: W) -> Result<FilteredLogger>
    where
        W: io::Write + Send + 'static,
    {
        let redactor = Redactor::new(self.fields.iter(), &self.redaction, self.separator)?;
        let format = RecordFormat::new(self.name.clone())
            .with_tag(self.tag.clone())
            .with_separator(self.separator);
        let drain = RedactingDrain::new(RedactingFormatter::new(format, redactor), writer);
        let drain = LevelFilter::new(drain, self.level).ignore_res();

        Ok(FilteredLogger {
            name: self.name.clone(),
            logger: slog::Logger::root(drain, slog::o!()),
        })
    }
}

#[cfg(feature = "serde")]
fn deserialize_level<'de, D>(deserializer: D) -> std::result::Result<Level, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::Deserialize;

    let name = String::deserialize(deserializer)?;
    crate::format::parse_level(&name)
        .ok_or_else(|| serde::de::Error::custom(format!("unknown log level `{name}`")))
}

/// Builds a logger called `name` that masks `fields` and writes to standard
/// output at INFO and above.
pub fn build_logger(name: &str, fields: SensitiveFields) -> Result<FilteredLogger> {
    LoggerConfig::new(name).with_fields(fields).build()
}

/// Builds the default `user_data` logger masking [`PII_FIELDS`](crate::PII_FIELDS).
pub fn get_logger() -> Result<FilteredLogger> {
    LoggerConfig::default().build()
}

/// A named logger whose output is always redacted.
///
/// Cloning is cheap and clones write through the same drain. Use
/// [`FilteredLogger::slog`] to reach the underlying `slog::Logger` for the
/// `slog` macros or child loggers; those records are filtered too.
#[derive(Clone)]
pub struct FilteredLogger {
    name: String,
    logger: slog::Logger,
}

impl FilteredLogger {
    /// The name written into every line.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The underlying `slog` logger.
    pub fn slog(&self) -> &slog::Logger {
        &self.logger
    }

    /// Logs `text` at CRITICAL.
    pub fn critical(&self, text: &str) {
        slog::crit!(self.logger, "{}", text);
    }

    /// Logs `text` at ERROR.
    pub fn error(&self, text: &str) {
        slog::error!(self.logger, "{}", text);
    }

    /// Logs `text` at WARNING.
    pub fn warn(&self, text: &str) {
        slog::warn!(self.logger, "{}", text);
    }

    /// Logs a `field=value;` line at INFO.
    pub fn info(&self, text: &str) {
        slog::info!(self.logger, "{}", text);
    }

    /// Logs `text` at DEBUG. Dropped at the default threshold.
    pub fn debug(&self, text: &str) {
        slog::debug!(self.logger, "{}", text);
    }

    /// Logs `text` at TRACE. Dropped at the default threshold.
    pub fn trace(&self, text: &str) {
        slog::trace!(self.logger, "{}", text);
    }

    /// Logs `row` at INFO in the `field=value; ` line format.
    pub fn log_row<R: LogRow>(&self, row: &R) {
        self.info(&row.to_log_line());
    }
}

impl fmt::Debug for FilteredLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilteredLogger")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}
