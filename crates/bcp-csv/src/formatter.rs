use std::io::Write;

use csv::{QuoteStyle, Terminator, WriterBuilder};

use crate::error::ConvertError;
use crate::fields::split_fields;
use crate::normalize::normalize_line;

/// Writes decoded BCP records as CSV.
///
/// Each call to [`write_line`](Self::write_line) normalizes one record,
/// splits it into fields and writes exactly one CSV record:
///
/// ```text
///   "a\\nb␝c,d"  ──normalize──▶  "a\nb␝c,d"  ──split──▶  ["a\nb", "c,d"]
///                                                           │
///                                             "\"a\nb\",\"c,d\"\n"  ◀──┘
/// ```
///
/// Quoting follows the usual minimal rules: a field is quoted only when it
/// contains a comma, a double quote, CR or LF, and embedded quotes are
/// doubled. Records end with a bare `\n`. Records may differ in field count.
///
/// Output is buffered; call [`flush`](Self::flush) once all records are
/// written.
pub struct RowFormatter<W: Write> {
    writer: csv::Writer<W>,
    records: u64,
}

impl<W: Write> RowFormatter<W> {
    #[must_use]
    pub fn new(inner: W) -> Self {
        let writer = WriterBuilder::new()
            .has_headers(false)
            .flexible(true)
            .quote_style(QuoteStyle::Necessary)
            .terminator(Terminator::Any(b'\n'))
            .from_writer(inner);
        Self { writer, records: 0 }
    }

    /// Normalize, split and write one decoded record.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::Csv`] if the underlying writer fails.
    pub fn write_line(&mut self, line: &str) -> Result<(), ConvertError> {
        let normalized = normalize_line(line);
        self.writer.write_record(split_fields(&normalized))?;
        self.records += 1;
        Ok(())
    }

    /// Number of records written so far.
    #[must_use]
    pub fn records(&self) -> u64 {
        self.records
    }

    /// Flush buffered CSV output to the underlying writer.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::Io`] if the underlying writer fails.
    pub fn flush(&mut self) -> Result<(), ConvertError> {
        self.writer.flush()?;
        Ok(())
    }

    /// Flush and return the underlying writer.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::Io`] if the final flush fails.
    pub fn into_inner(self) -> Result<W, ConvertError> {
        self.writer
            .into_inner()
            .map_err(|e| ConvertError::Io(e.into_error()))
    }
}
