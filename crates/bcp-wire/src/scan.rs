use crate::delimiter::{PAD_BYTE, ROW_TERMINATOR};

/// Find the position of the first row terminator in `chunk`.
///
/// Returns `None` when the chunk holds no terminator, meaning the record
/// continues into the next chunk of input.
#[must_use]
pub fn find_row_terminator(chunk: &[u8]) -> Option<usize> {
    chunk.iter().position(|&b| b == ROW_TERMINATOR)
}

/// Append `src` to `dst`, skipping padding bytes.
///
/// # Returns
///
/// The number of padding bytes that were discarded.
///
/// ```
/// use bcp_wire::scan::extend_unpadded;
///
/// let mut record = Vec::new();
/// let skipped = extend_unpadded(&mut record, b"a\0b\0\0");
/// assert_eq!(record, b"ab");
/// assert_eq!(skipped, 3);
/// ```
pub fn extend_unpadded(dst: &mut Vec<u8>, src: &[u8]) -> usize {
    let before = dst.len();
    dst.extend(src.iter().copied().filter(|&b| b != PAD_BYTE));
    src.len() - (dst.len() - before)
}
