use bcp_decoder::DecodeError;

/// Errors that abort a BCP → CSV conversion.
///
/// ```text
/// ┌────────┬──────────────────────────────────────────────────────┐
/// │ Variant│ Cause                                                │
/// ├────────┼──────────────────────────────────────────────────────┤
/// │ Decode │ Input could not be read or a record is not UTF-8     │
/// │ Csv    │ The CSV writer failed to write a record              │
/// │ Io     │ Flushing or unwrapping the output failed             │
/// └────────┴──────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error("failed to write CSV record: {0}")]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
