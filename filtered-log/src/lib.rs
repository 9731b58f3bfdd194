//! Filtering personally identifiable information out of log lines.
//!
//! Log lines in this crate are `field=value` pairs joined by a separator:
//! `name=Alice; email=alice@example.com; role=admin;`. The crate separates:
//! - **Redaction**: a pure transformation replacing the values of sensitive
//!   fields with a fixed token (`email=***;`). See [`redact`] and [`Redactor`].
//! - **The logging pipeline**: an `slog` logger that renders each record with a
//!   fixed template and redacts the rendered text before writing it. See
//!   [`build_logger`] and [`LoggerConfig`].
//! - **Rows**: rendering column/value pairs (or a `#[derive(LogRow)]` struct)
//!   into the line format.
//!
//! ```
//! use filtered_log::{LoggerConfig, SensitiveFields};
//!
//! let fields = SensitiveFields::new(["ssn"]).unwrap();
//! let logger = LoggerConfig::new("user_data")
//!     .with_fields(fields)
//!     .build_with_writer(std::io::sink())
//!     .unwrap();
//! logger.info("ssn=123-45-6789; note=ok;"); // written as `ssn=***; note=ok;`
//! ```
//!
//! What this crate does not do:
//! - unescape values: a value containing the separator is cut at its first
//!   separator, and only the part before it is masked
//! - store or ship logs anywhere other than the writer it is given

// <https://doc.rust-lang.org/rustc/lints/listing/allowed-by-default.html>
#![warn(
    anonymous_parameters,
    bare_trait_objects,
    elided_lifetimes_in_paths,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unsafe_code,
    unused_extern_crates,
    unused_import_braces
)]
// <https://rust-lang.github.io/rust-clippy/stable>
#![warn(
    clippy::all,
    clippy::cargo,
    clippy::dbg_macro,
    clippy::float_cmp_const,
    clippy::get_unwrap,
    clippy::mem_forget,
    clippy::nursery,
    clippy::pedantic,
    clippy::todo,
    clippy::unwrap_used,
    clippy::uninlined_format_args
)]
// Allow some clippy lints
#![allow(
    clippy::default_trait_access,
    clippy::doc_markdown,
    clippy::if_not_else,
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    clippy::must_use_candidate,
    clippy::needless_pass_by_value,
    clippy::needless_ifs,
    clippy::use_self,
    clippy::cargo_common_metadata,
    clippy::missing_errors_doc,
    clippy::enum_glob_use,
    clippy::struct_excessive_bools,
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate,
    clippy::result_large_err,
    clippy::future_not_send,
    clippy::option_if_let_else,
    clippy::from_over_into,
    clippy::manual_inspect
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::non_ascii_literal, clippy::unwrap_used))]

pub use filtered_log_derive::LogRow;

#[allow(unused_extern_crates)]
extern crate self as filtered_log;

// Module declarations
mod drain;
mod error;
mod fields;
mod format;
mod logger;
mod redact;
mod row;

// Re-exports
pub use drain::RedactingDrain;
pub use error::{Error, Result};
pub use fields::{SensitiveFields, PII_FIELDS};
pub use format::{
    level_name, parse_level, RecordFormat, RedactingFormatter, TAG, TIMESTAMP_FORMAT,
};
pub use logger::{build_logger, get_logger, FilteredLogger, LoggerConfig, DEFAULT_LOGGER_NAME};
pub use redact::{redact, Redactor, REDACTION, SEPARATOR};
pub use row::{format_row, LogRow, NULL_COLUMN};
#[doc(hidden)]
pub use row::render_optional;
