use std::io::{self, BufRead};
use std::iter::FusedIterator;

use bcp_wire::scan::{extend_unpadded, find_row_terminator};

use crate::error::DecodeError;

/// What to do with bytes left over after the last row terminator.
///
/// BCP exports end every record with 0x1E, so leftover bytes normally mean
/// a truncated file. The historical behaviour is to drop them silently;
/// `Flush` emits them as one last record instead.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TrailingRecord {
    /// Discard an unterminated trailing segment.
    #[default]
    Drop,
    /// Yield a non-empty unterminated trailing segment as a final record.
    Flush,
}

/// Counters accumulated while tokenizing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TokenizerStats {
    /// Records yielded so far.
    pub records: u64,
    /// Input bytes consumed from the reader, padding and terminators included.
    pub bytes_read: u64,
    /// Padding bytes (0x00) discarded.
    pub padding_discarded: u64,
    /// Length of the unterminated trailing segment that was dropped, or 0.
    pub trailing_dropped: usize,
}

/// Splits a BCP byte stream into decoded text records.
///
/// The tokenizer is a forward-only iterator over any [`BufRead`] source.
/// It scans each buffered chunk for the row terminator rather than reading
/// byte by byte, so record boundaries do not depend on how the reader
/// happens to chunk its data.
///
/// ```text
///   fill_buf() ──▶ scan for 0x1E ──▶ drop 0x00 ──▶ accumulate
///                        │
///                  terminator found
///                        ▼
///              UTF-8 decode ──▶ yield String
/// ```
///
/// The accumulator is the only state carried between records. It is
/// reused across records to avoid repeated allocations.
///
/// After the first error the iterator is exhausted.
///
/// # Example
///
/// ```
/// use bcp_decoder::LineTokenizer;
///
/// let input: &[u8] = b"a\x1db\x1e\0c\x1dd\x1e";
/// let lines: Vec<String> = LineTokenizer::new(input)
///     .collect::<Result<_, _>>()
///     .unwrap();
/// assert_eq!(lines, ["a\u{1d}b", "c\u{1d}d"]);
/// ```
pub struct LineTokenizer<R> {
    reader: R,
    trailing: TrailingRecord,
    buf: Vec<u8>,
    stats: TokenizerStats,
    done: bool,
}

impl<R: BufRead> LineTokenizer<R> {
    /// Create a tokenizer that drops an unterminated trailing segment.
    #[must_use]
    pub fn new(reader: R) -> Self {
        Self::with_trailing(reader, TrailingRecord::default())
    }

    /// Create a tokenizer with an explicit trailing-record policy.
    #[must_use]
    pub fn with_trailing(reader: R, trailing: TrailingRecord) -> Self {
        Self {
            reader,
            trailing,
            buf: Vec::with_capacity(4096),
            stats: TokenizerStats::default(),
            done: false,
        }
    }

    /// Counters for the records produced so far.
    #[must_use]
    pub fn stats(&self) -> TokenizerStats {
        self.stats
    }

    /// Consume the tokenizer and return the underlying reader.
    pub fn into_inner(self) -> R {
        self.reader
    }

    fn next_record(&mut self) -> Result<Option<String>, DecodeError> {
        loop {
            let chunk = match self.reader.fill_buf() {
                Ok(chunk) => chunk,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            };

            if chunk.is_empty() {
                return self.finish();
            }

            if let Some(pos) = find_row_terminator(chunk) {
                let skipped = extend_unpadded(&mut self.buf, &chunk[..pos]);
                self.reader.consume(pos + 1);
                self.stats.bytes_read += (pos + 1) as u64;
                self.stats.padding_discarded += skipped as u64;
                return self.take_record().map(Some);
            }

            let len = chunk.len();
            let skipped = extend_unpadded(&mut self.buf, chunk);
            self.reader.consume(len);
            self.stats.bytes_read += len as u64;
            self.stats.padding_discarded += skipped as u64;
        }
    }

    /// Decode the accumulator as one record and reset it.
    fn take_record(&mut self) -> Result<String, DecodeError> {
        let record = self.stats.records;
        let text = std::str::from_utf8(&self.buf)
            .map_err(|source| DecodeError::InvalidUtf8 {
                record,
                valid_up_to: source.valid_up_to(),
                source,
            })?
            .to_owned();

        self.buf.clear();
        self.stats.records += 1;
        tracing::trace!(record, len = text.len(), "decoded record");
        Ok(text)
    }

    /// Handle end of input according to the trailing-record policy.
    fn finish(&mut self) -> Result<Option<String>, DecodeError> {
        self.done = true;
        if self.buf.is_empty() {
            return Ok(None);
        }

        match self.trailing {
            TrailingRecord::Flush => self.take_record().map(Some),
            TrailingRecord::Drop => {
                self.stats.trailing_dropped = self.buf.len();
                tracing::warn!(
                    bytes = self.buf.len(),
                    "input ended without a row terminator; dropping trailing record"
                );
                self.buf.clear();
                Ok(None)
            }
        }
    }
}

impl<R: BufRead> Iterator for LineTokenizer<R> {
    type Item = Result<String, DecodeError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.next_record() {
            Ok(line) => line.map(Ok),
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

impl<R: BufRead> FusedIterator for LineTokenizer<R> {}
