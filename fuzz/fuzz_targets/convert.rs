#![no_main]

use bcp_csv::{ConvertConfig, TrailingRecord};
use libfuzzer_sys::fuzz_target;

// Fuzz target: full conversion of arbitrary bytes under both trailing
// policies. The first byte selects the policy.
//
// Checks that conversion never panics and that successful output never
// contains NUL or CR bytes.
fuzz_target!(|data: &[u8]| {
    let Some((&selector, input)) = data.split_first() else {
        return;
    };
    let config = ConvertConfig {
        trailing: if selector & 1 == 0 {
            TrailingRecord::Drop
        } else {
            TrailingRecord::Flush
        },
    };

    let mut out = Vec::new();
    if bcp_csv::convert(input, &mut out, &config).is_ok() {
        assert!(!out.contains(&0));
        assert!(!out.contains(&b'\r'));
    }
});
