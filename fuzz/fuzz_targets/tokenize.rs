#![no_main]

use libfuzzer_sys::fuzz_target;

// Fuzz target: line tokenizer over arbitrary bytes.
//
// Checks that:
// - tokenizing never panics
// - no decoded record contains a padding or row-terminator byte
// - records yielded never exceed the number of row terminators
fuzz_target!(|data: &[u8]| {
    let terminators = data
        .iter()
        .filter(|&&b| b == bcp_wire::ROW_TERMINATOR)
        .count();

    let mut records = 0;
    for line in bcp_decoder::LineTokenizer::new(data) {
        let Ok(line) = line else { break };
        assert!(!line.contains('\0'));
        assert!(!line.contains('\u{1e}'));
        records += 1;
    }
    assert!(records <= terminators);
});
