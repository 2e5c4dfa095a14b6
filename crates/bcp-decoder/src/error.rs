/// Errors that can occur while tokenizing a BCP byte stream.
///
/// Neither variant is recoverable: once the tokenizer returns an error it
/// yields nothing further.
///
/// ```text
///   DecodeError
///   ├── InvalidUtf8   ← record bytes are not valid UTF-8
///   └── Io            ← the underlying reader failed
/// ```
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// A terminated record could not be decoded as UTF-8 text.
    ///
    /// `record` is the zero-based index of the offending record and
    /// `valid_up_to` is the byte offset, within the record after padding
    /// removal, of the first invalid sequence.
    #[error("record {record} is not valid UTF-8 (invalid byte at offset {valid_up_to})")]
    InvalidUtf8 {
        record: u64,
        valid_up_to: usize,
        #[source]
        source: std::str::Utf8Error,
    },

    /// An I/O error from the underlying reader.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
