//! Error types for building redacting loggers.

use thiserror::Error;

/// Result type for setup operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while configuring a redactor or writing a line.
///
/// Redaction itself never fails. These variants only surface when a logger is
/// being set up, or from [`RedactingDrain`](crate::RedactingDrain) when the
/// underlying writer rejects a line.
#[derive(Error, Debug)]
pub enum Error {
    /// A sensitive field name was empty.
    #[error("sensitive field name at position {index} is empty")]
    EmptyFieldName {
        /// Position of the offending name in the configured list.
        index: usize,
    },

    /// A field pattern failed to compile.
    #[error("pattern error: {0}")]
    Pattern(#[from] regex::Error),

    /// The destination rejected a rendered line.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
