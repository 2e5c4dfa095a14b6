#![no_main]

use arbitrary::Arbitrary;
use bcp_csv::{ConvertConfig, normalize_line};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Table {
    rows: Vec<Vec<String>>,
}

fn is_delimiter(c: char) -> bool {
    matches!(c, '\0' | '\u{1d}' | '\u{1e}')
}

// Fuzz target: rows → BCP bytes → CSV → parsed rows.
//
// Every row written must come back as exactly one CSV record whose fields
// equal the normalized input fields.
fuzz_target!(|table: Table| {
    let rows: Vec<Vec<String>> = table
        .rows
        .into_iter()
        .filter(|row| !row.is_empty())
        .map(|row| {
            row.into_iter()
                .map(|field| field.chars().filter(|&c| !is_delimiter(c)).collect())
                .collect()
        })
        .collect();

    let mut input = Vec::new();
    for row in &rows {
        input.extend_from_slice(row.join("\u{1d}").as_bytes());
        input.push(bcp_wire::ROW_TERMINATOR);
    }

    let mut out = Vec::new();
    let summary = bcp_csv::convert(&input[..], &mut out, &ConvertConfig::default())
        .expect("valid UTF-8 rows always convert");
    assert_eq!(summary.records as usize, rows.len());

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(&out[..]);
    let parsed: Vec<Vec<String>> = reader
        .records()
        .map(|r| r.expect("output is valid CSV").iter().map(str::to_owned).collect())
        .collect();

    let expected: Vec<Vec<String>> = rows
        .iter()
        .map(|row| row.iter().map(|f| normalize_line(f).into_owned()).collect())
        .collect();
    assert_eq!(parsed, expected);
});
