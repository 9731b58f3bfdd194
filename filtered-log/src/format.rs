//! Rendering slog records as text, then filtering them.
//!
//! A record is turned into one line in two explicit stages:
//!
//! 1. [`RecordFormat`] renders `"{tag} {name} {LEVEL} {timestamp}: {message}"`,
//!    appending any key-value pairs as ` key=value;`.
//! 2. [`RedactingFormatter`] runs the rendered text through a [`Redactor`].
//!
//! Redaction sees exactly the text that will be written, so sensitive values
//! passed as key-value pairs are filtered the same way as the message body.

use std::fmt;

use chrono::{DateTime, Local};
use slog::{Key, Level, OwnedKVList, Record, Serializer, KV};

use crate::redact::{Redactor, SEPARATOR};

/// Tag written at the start of every line.
pub const TAG: &str = "[HOLBERTON]";

/// `chrono` format of the line timestamp, e.g. `2024-01-31 09:15:02,417`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S,%3f";

/// Placeholder written for a structured value that failed to serialize.
const UNSERIALIZABLE: &str = "<unserializable>";

/// Upper-case name written for a severity level.
pub fn level_name(level: Level) -> &'static str {
    match level {
        Level::Critical => "CRITICAL",
        Level::Error => "ERROR",
        Level::Warning => "WARNING",
        Level::Info => "INFO",
        Level::Debug => "DEBUG",
        Level::Trace => "TRACE",
    }
}

/// Parses a level name, ignoring case. Accepts `warn` as well as `warning`.
pub fn parse_level(name: &str) -> Option<Level> {
    match name.to_ascii_lowercase().as_str() {
        "critical" => Some(Level::Critical),
        "error" => Some(Level::Error),
        "warning" | "warn" => Some(Level::Warning),
        "info" => Some(Level::Info),
        "debug" => Some(Level::Debug),
        "trace" => Some(Level::Trace),
        _ => None,
    }
}

/// The fixed line template.
#[derive(Clone, Debug)]
pub struct RecordFormat {
    tag: String,
    name: String,
    separator: char,
    clock: fn() -> DateTime<Local>,
}

impl RecordFormat {
    /// A template for the logger called `name`, using the default tag and separator.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            tag: TAG.to_string(),
            name: name.into(),
            separator: SEPARATOR,
            clock: Local::now,
        }
    }

    /// Uses a different leading tag.
    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    /// Terminates appended key-value pairs with `separator`.
    #[must_use]
    pub fn with_separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    /// Reads timestamps from `clock` instead of the local wall clock.
    #[must_use]
    pub fn with_clock(mut self, clock: fn() -> DateTime<Local>) -> Self {
        self.clock = clock;
        self
    }

    /// The logger name written into every line.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Renders `record` and the logger's `values` into one unfiltered line.
    ///
    /// A value that fails to serialize ends its key-value list: the pairs
    /// written so far are kept, ` <unserializable>;` marks the gap, and the
    /// line is still produced.
    pub fn render(&self, record: &Record<'_>, values: &OwnedKVList) -> String {
        let mut body = record.msg().to_string();
        let mut pairs = PairWriter {
            line: &mut body,
            separator: self.separator,
        };
        if record.kv().serialize(record, &mut pairs).is_err() {
            pairs.push_unserializable();
        }
        if values.serialize(record, &mut pairs).is_err() {
            pairs.push_unserializable();
        }

        format!(
            "{} {} {} {}: {}",
            self.tag,
            self.name,
            level_name(record.level()),
            (self.clock)().format(TIMESTAMP_FORMAT),
            body
        )
    }
}

/// Appends key-value pairs to a line as ` key=value<separator>`.
struct PairWriter<'a> {
    line: &'a mut String,
    separator: char,
}

impl PairWriter<'_> {
    fn push(&mut self, key: Key, value: &dyn fmt::Display) {
        let pair = format!(" {key}={value}{}", self.separator);
        self.line.push_str(&pair);
    }

    fn push_unserializable(&mut self) {
        let marker = format!(" {UNSERIALIZABLE}{}", self.separator);
        self.line.push_str(&marker);
    }
}

impl Serializer for PairWriter<'_> {
    fn emit_arguments(&mut self, key: Key, val: &fmt::Arguments<'_>) -> slog::Result {
        self.push(key, val);
        Ok(())
    }

    fn emit_serde(&mut self, key: Key, value: &dyn slog::SerdeValue) -> slog::Result {
        match serde_json::to_string(value.as_serde()) {
            Ok(json) => self.push(key, &json),
            Err(_) => self.push(key, &UNSERIALIZABLE),
        }
        Ok(())
    }
}

/// Renders a record, then redacts the rendered text.
#[derive(Clone, Debug)]
pub struct RedactingFormatter {
    format: RecordFormat,
    redactor: Redactor,
}

impl RedactingFormatter {
    /// Composes a template with a redactor.
    pub fn new(format: RecordFormat, redactor: Redactor) -> Self {
        Self { format, redactor }
    }

    /// The template used in the first stage.
    pub fn record_format(&self) -> &RecordFormat {
        &self.format
    }

    /// Produces the final, filtered line for `record`.
    pub fn format(&self, record: &Record<'_>, values: &OwnedKVList) -> String {
        let rendered = self.format.render(record, values);
        self.redactor.redact(&rendered).into_owned()
    }
}
