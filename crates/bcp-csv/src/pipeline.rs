use std::io::{BufRead, Write};

use bcp_decoder::LineTokenizer;

use crate::config::ConvertConfig;
use crate::error::ConvertError;
use crate::formatter::RowFormatter;

/// Outcome of a completed conversion.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ConvertSummary {
    /// CSV records written.
    pub records: u64,
    /// Input bytes consumed.
    pub bytes_read: u64,
    /// Padding bytes discarded from the input.
    pub padding_discarded: u64,
    /// Bytes in the unterminated trailing segment that was dropped, or 0.
    pub trailing_dropped: usize,
}

/// Convert a BCP export read from `reader` into CSV written to `writer`.
///
/// Records stream through one at a time: the tokenizer yields a decoded
/// record, the formatter writes it, and nothing else is retained. The
/// output is flushed before returning.
///
/// ```text
/// BufRead ──▶ LineTokenizer ──▶ RowFormatter ──▶ Write
///                  │
///            ConvertConfig (trailing policy)
/// ```
///
/// # Errors
///
/// Any read, decode or write error aborts the run. For read and decode
/// errors, records completed before the failing one are flushed first.
///
/// # Example
///
/// ```
/// use bcp_csv::{ConvertConfig, convert};
///
/// let input: &[u8] = b"a\x1db\x1e\0c\x1dd\x1e";
/// let mut out = Vec::new();
/// let summary = convert(input, &mut out, &ConvertConfig::default()).unwrap();
/// assert_eq!(out, b"a,b\nc,d\n");
/// assert_eq!(summary.records, 2);
/// ```
pub fn convert<R, W>(
    reader: R,
    writer: W,
    config: &ConvertConfig,
) -> Result<ConvertSummary, ConvertError>
where
    R: BufRead,
    W: Write,
{
    let mut tokenizer = LineTokenizer::with_trailing(reader, config.trailing);
    let mut formatter = RowFormatter::new(writer);

    for line in tokenizer.by_ref() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                // Rows already written still reach the output.
                let _ = formatter.flush();
                return Err(e.into());
            }
        };
        formatter.write_line(&line)?;
    }
    formatter.flush()?;

    let stats = tokenizer.stats();
    let summary = ConvertSummary {
        records: formatter.records(),
        bytes_read: stats.bytes_read,
        padding_discarded: stats.padding_discarded,
        trailing_dropped: stats.trailing_dropped,
    };
    tracing::debug!(
        records = summary.records,
        bytes_read = summary.bytes_read,
        padding_discarded = summary.padding_discarded,
        trailing_dropped = summary.trailing_dropped,
        "conversion complete"
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TrailingRecord;

    fn run(input: &[u8], config: &ConvertConfig) -> (String, ConvertSummary) {
        let mut out = Vec::new();
        let summary = convert(input, &mut out, config).expect("convert should succeed");
        (String::from_utf8(out).unwrap(), summary)
    }

    #[test]
    fn two_records_with_padding() {
        let (csv, summary) = run(b"a\x1db\x1e\0c\x1dd\x1e", &ConvertConfig::default());
        assert_eq!(csv, "a,b\nc,d\n");
        assert_eq!(summary.records, 2);
        assert_eq!(summary.padding_discarded, 1);
        assert_eq!(summary.bytes_read, 9);
    }

    #[test]
    fn trailing_segment_dropped() {
        let (csv, summary) = run(b"a\x1etail", &ConvertConfig::default());
        assert_eq!(csv, "a\n");
        assert_eq!(summary.trailing_dropped, 4);
    }

    #[test]
    fn trailing_segment_flushed() {
        let config = ConvertConfig {
            trailing: TrailingRecord::Flush,
        };
        let (csv, summary) = run(b"a\x1etail\x1dx", &config);
        assert_eq!(csv, "a\ntail,x\n");
        assert_eq!(summary.records, 2);
        assert_eq!(summary.trailing_dropped, 0);
    }

    #[test]
    fn empty_input_writes_nothing() {
        let (csv, summary) = run(b"", &ConvertConfig::default());
        assert!(csv.is_empty());
        assert_eq!(summary, ConvertSummary::default());
    }

    #[test]
    fn decode_error_keeps_earlier_rows() {
        let mut out = Vec::new();
        let err = convert(&b"good\x1ebad\xff\x1enever\x1e"[..], &mut out, &ConvertConfig::default())
            .unwrap_err();
        assert!(matches!(
            err,
            ConvertError::Decode(bcp_decoder::DecodeError::InvalidUtf8 { record: 1, .. })
        ));
        assert_eq!(out, b"good\n");
    }
}
