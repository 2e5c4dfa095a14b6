//! Shared helpers for the integration tests, benchmarks and the golden
//! fixture generator.

use bcp_csv::{ConvertConfig, convert};
use bcp_wire::{FIELD_TERMINATOR, PAD_BYTE, ROW_TERMINATOR};

/// Builds BCP input bytes row by row.
///
/// ```
/// use bcp_tests::BcpBuilder;
///
/// let bytes = BcpBuilder::new().row(["a", "b"]).padding(1).build();
/// assert_eq!(bytes, b"a\x1db\x1e\0");
/// ```
#[derive(Clone, Debug, Default)]
pub struct BcpBuilder {
    bytes: Vec<u8>,
}

impl BcpBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one terminated row made of `fields`.
    #[must_use]
    pub fn row<I, F>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = F>,
        F: AsRef<[u8]>,
    {
        for (i, field) in fields.into_iter().enumerate() {
            if i > 0 {
                self.bytes.push(FIELD_TERMINATOR);
            }
            self.bytes.extend_from_slice(field.as_ref());
        }
        self.bytes.push(ROW_TERMINATOR);
        self
    }

    /// Append one terminated row in wide-character layout: every byte of
    /// the row, terminators included, is followed by a padding byte.
    #[must_use]
    pub fn wide_row<I, F>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = F>,
        F: AsRef<[u8]>,
    {
        let narrow = Self::new().row(fields).build();
        for b in narrow {
            self.bytes.push(b);
            self.bytes.push(PAD_BYTE);
        }
        self
    }

    /// Append `n` padding bytes.
    #[must_use]
    pub fn padding(mut self, n: usize) -> Self {
        self.bytes.resize(self.bytes.len() + n, PAD_BYTE);
        self
    }

    /// Append bytes verbatim, e.g. an unterminated trailing segment.
    #[must_use]
    pub fn raw(mut self, bytes: &[u8]) -> Self {
        self.bytes.extend_from_slice(bytes);
        self
    }

    #[must_use]
    pub fn build(self) -> Vec<u8> {
        self.bytes
    }
}

/// Convert `input` with `config` and return the CSV text.
///
/// # Panics
///
/// Panics if the conversion fails or the output is not UTF-8.
#[must_use]
pub fn to_csv(input: &[u8], config: &ConvertConfig) -> String {
    let mut out = Vec::new();
    convert(input, &mut out, config).unwrap_or_else(|e| panic!("convert failed: {e}"));
    String::from_utf8(out).expect("CSV output is UTF-8")
}
