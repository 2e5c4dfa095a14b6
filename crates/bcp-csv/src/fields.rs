use std::str::Split;

use bcp_wire::FIELD_TERMINATOR_CHAR;

/// Split a normalized record into its fields.
///
/// Consecutive terminators produce empty fields, and a record without any
/// terminator is a single field. The iterator always yields at least one
/// item, even for an empty record.
pub fn split_fields(line: &str) -> Split<'_, char> {
    line.split(FIELD_TERMINATOR_CHAR)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(line: &str) -> Vec<&str> {
        split_fields(line).collect()
    }

    #[test]
    fn preserves_empty_fields() {
        assert_eq!(fields("a\u{1d}\u{1d}b"), ["a", "", "b"]);
    }

    #[test]
    fn no_terminator_is_one_field() {
        assert_eq!(fields("a,b"), ["a,b"]);
    }

    #[test]
    fn empty_line_is_one_empty_field() {
        assert_eq!(fields(""), [""]);
    }

    #[test]
    fn leading_and_trailing_terminators() {
        assert_eq!(fields("\u{1d}x\u{1d}"), ["", "x", ""]);
    }
}
