/// Implementation of the `bcp2csv` conversion.
///
/// Opens the input (stdin or a file) and the output (stdout or a file),
/// maps the flags onto a [`ConvertConfig`] and streams the conversion.
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

use anyhow::{Context, Result};
use bcp_csv::{ConvertConfig, TrailingRecord, convert};

use crate::Cli;

/// Run the conversion described by `cli`.
///
/// # Errors
///
/// Returns an error if the input or output cannot be opened, or if the
/// conversion fails part-way. Rows completed before a failure have
/// already been written.
pub fn run(cli: &Cli) -> Result<()> {
    let config = ConvertConfig {
        trailing: if cli.flush_trailing {
            TrailingRecord::Flush
        } else {
            TrailingRecord::Drop
        },
    };

    let (reader, source) = open_input(cli.input.as_deref())?;
    let writer = open_output(cli.output.as_deref())?;

    let summary = convert(reader, writer, &config)
        .with_context(|| format!("failed to convert {source}"))?;

    tracing::info!(
        source = %source,
        records = summary.records,
        bytes_read = summary.bytes_read,
        padding_discarded = summary.padding_discarded,
        trailing_dropped = summary.trailing_dropped,
        "done"
    );
    Ok(())
}

/// Open the input, returning the reader and a name for diagnostics.
fn open_input(path: Option<&Path>) -> Result<(Box<dyn BufRead>, String)> {
    match path {
        Some(path) if path != Path::new("-") => {
            let file =
                File::open(path).with_context(|| format!("cannot read {}", path.display()))?;
            Ok((Box::new(BufReader::new(file)), path.display().to_string()))
        }
        _ => Ok((Box::new(io::stdin().lock()), "<stdin>".to_owned())),
    }
}

fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>> {
    match path {
        Some(path) => {
            let file =
                File::create(path).with_context(|| format!("cannot write {}", path.display()))?;
            Ok(Box::new(file))
        }
        None => Ok(Box::new(io::stdout().lock())),
    }
}
