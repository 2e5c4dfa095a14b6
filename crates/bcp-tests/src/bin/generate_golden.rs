//! Golden fixture generator for the conformance test suite.
//!
//! Writes `tests/golden/<fixture>/input.bcp` for every fixture. The matching
//! `expected.csv` files are reviewed by hand and committed; this binary never
//! overwrites them.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin generate_golden -p bcp-tests
//! ```
//!
//! # Generated fixtures
//!
//! | Directory        | Contents                                          |
//! |------------------|---------------------------------------------------|
//! | simple           | Two rows separated by a padding byte              |
//! | escapes          | Literal `\r`/`\n` escapes and real CRs            |
//! | quoting          | Fields needing quotes: commas, embedded quotes    |
//! | empty_fields     | Empty fields and a row with one empty field       |
//! | wide_padding     | Every byte followed by 0x00 (wide export layout)  |
//! | trailing_segment | A final segment with no row terminator            |
//! | unicode          | Multi-byte UTF-8 fields                           |

#![allow(clippy::pedantic)]

use std::path::Path;

use bcp_tests::BcpBuilder;

fn main() {
    let manifest_dir = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let golden_dir = manifest_dir.join("tests/golden");

    let fixtures: [(&str, Vec<u8>); 7] = [
        (
            "simple",
            BcpBuilder::new()
                .row(["a", "b"])
                .padding(1)
                .row(["c", "d"])
                .build(),
        ),
        (
            "escapes",
            BcpBuilder::new()
                .row(["x\\ry"])
                .row(["a\\nb", "line1\\r\\nline2"])
                .row(["win\r", "dos\r"])
                .build(),
        ),
        (
            "quoting",
            BcpBuilder::new()
                .row(["id", "name", "note"])
                .row(["1", "Ada, Countess", "said \"hi\""])
                .row(["2", "plain", ""])
                .build(),
        ),
        (
            "empty_fields",
            BcpBuilder::new()
                .row(["a", "", "b"])
                .row(["", ""])
                .row([""])
                .build(),
        ),
        (
            "wide_padding",
            BcpBuilder::new()
                .wide_row(["id", "name"])
                .wide_row(["7", "Grace"])
                .build(),
        ),
        (
            "trailing_segment",
            BcpBuilder::new()
                .row(["kept", "1"])
                .raw(b"lost\x1d2")
                .build(),
        ),
        (
            "unicode",
            BcpBuilder::new()
                .row(["Zoë", "東京"])
                .row(["naïve, café"])
                .build(),
        ),
    ];

    for (name, bytes) in &fixtures {
        write_fixture(&golden_dir, name, bytes);
    }

    println!("All golden fixtures written to {}", golden_dir.display());
}

fn write_fixture(golden_dir: &Path, name: &str, bytes: &[u8]) {
    let dir = golden_dir.join(name);
    std::fs::create_dir_all(&dir).expect("failed to create fixture directory");
    let path = dir.join("input.bcp");
    std::fs::write(&path, bytes).expect("failed to write fixture");
    println!("  wrote {} ({} bytes)", path.display(), bytes.len());
}
