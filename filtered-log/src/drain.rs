//! The `slog` drain that writes filtered lines.
//!
//! [`RedactingDrain`] is the last stage of a logger: it formats each record
//! with a [`RedactingFormatter`] and writes the result as one line. Only text
//! that has already been redacted reaches the writer.

use std::{
    io::Write,
    sync::{Mutex, PoisonError},
};

use slog::{Drain, OwnedKVList, Record};

use crate::{error::Error, format::RedactingFormatter};

/// Formats, redacts and writes records to `W`.
///
/// Writes are serialised through a mutex, so the drain can be shared between
/// threads whenever `W` can be sent between them. Write failures are returned
/// to the caller; loggers built by this crate discard them.
pub struct RedactingDrain<W: Write> {
    formatter: RedactingFormatter,
    writer: Mutex<W>,
}

impl<W: Write> RedactingDrain<W> {
    /// Writes lines produced by `formatter` to `writer`.
    pub fn new(formatter: RedactingFormatter, writer: W) -> Self {
        Self {
            formatter,
            writer: Mutex::new(writer),
        }
    }

    /// The formatter applied to every record.
    pub fn formatter(&self) -> &RedactingFormatter {
        &self.formatter
    }

    /// Consumes the drain, returning the writer.
    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl<W: Write> Drain for RedactingDrain<W> {
    type Ok = ();
    type Err = Error;

    fn log(&self, record: &Record<'_>, values: &OwnedKVList) -> Result<Self::Ok, Self::Err> {
        let line = self.formatter.format(record, values);
        // A panic mid-write leaves at worst a partial line behind; keep logging.
        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        writeln!(writer, "{line}")?;
        writer.flush()?;
        Ok(())
    }
}
