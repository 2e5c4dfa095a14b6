use bcp_decoder::TrailingRecord;

/// Configuration for a conversion run.
///
/// The default reproduces the historical converter exactly: an
/// unterminated segment at the end of the input is dropped.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ConvertConfig {
    /// Policy for bytes that follow the last row terminator.
    pub trailing: TrailingRecord,
}

impl ConvertConfig {
    /// Config that emits an unterminated trailing segment as a record.
    #[must_use]
    pub fn flush_trailing() -> Self {
        Self {
            trailing: TrailingRecord::Flush,
        }
    }
}
