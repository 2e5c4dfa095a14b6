use std::borrow::Cow;

/// Apply the text clean-up rules to one decoded record.
///
/// The rules run in a fixed order, each on the output of the previous one:
///
/// 1. remove every carriage return (U+000D);
/// 2. remove every literal `\r` (backslash followed by `r`);
/// 3. replace every literal `\n` (backslash followed by `n`) with a line feed.
///
/// Rules 2 and 3 match the two-character text produced by escaping tools,
/// not control bytes. Records containing neither a carriage return nor a
/// backslash are returned unchanged without allocating.
///
/// ```
/// use bcp_csv::normalize_line;
///
/// assert_eq!(normalize_line("x\\ry"), "xy");
/// assert_eq!(normalize_line("a\\nb"), "a\nb");
/// assert_eq!(normalize_line("a\r\nb"), "a\nb");
/// ```
#[must_use]
pub fn normalize_line(line: &str) -> Cow<'_, str> {
    if !line.contains(['\r', '\\']) {
        return Cow::Borrowed(line);
    }
    Cow::Owned(
        line.replace('\r', "")
            .replace("\\r", "")
            .replace("\\n", "\n"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_is_borrowed() {
        assert!(matches!(normalize_line("plain\u{1d}text"), Cow::Borrowed(_)));
    }

    #[test]
    fn removes_carriage_returns() {
        assert_eq!(normalize_line("a\rb\r"), "ab");
    }

    #[test]
    fn removes_escaped_cr() {
        assert_eq!(normalize_line("x\\ry"), "xy");
        assert_eq!(normalize_line("\\r\\r"), "");
    }

    #[test]
    fn expands_escaped_lf() {
        assert_eq!(normalize_line("a\\nb"), "a\nb");
    }

    #[test]
    fn escaped_crlf_becomes_lf() {
        assert_eq!(normalize_line("line1\\r\\nline2"), "line1\nline2");
    }

    #[test]
    fn cr_removal_runs_before_escape_matching() {
        // Dropping the CR joins the backslash to the following letter.
        assert_eq!(normalize_line("a\\\rrb"), "ab");
        assert_eq!(normalize_line("a\\\rnb"), "a\nb");
    }

    #[test]
    fn escaped_cr_removal_runs_before_lf_expansion() {
        // `\` `\r` `n` → `\n` once the `\r` is gone.
        assert_eq!(normalize_line("\\\\rn"), "\n");
    }

    #[test]
    fn double_backslash_is_not_special() {
        // Left-to-right, non-overlapping: the second backslash pairs with `n`.
        assert_eq!(normalize_line("\\\\n"), "\\\n");
        assert_eq!(normalize_line("C:\\temp"), "C:\\temp");
    }

    #[test]
    fn escaped_cr_removal_is_single_pass() {
        // Removing the inner `\r` exposes another one, which stays.
        assert_eq!(normalize_line("\\\\rr"), "\\r");
    }

    #[test]
    fn other_escapes_untouched() {
        assert_eq!(normalize_line("tab\\there"), "tab\\there");
    }
}
