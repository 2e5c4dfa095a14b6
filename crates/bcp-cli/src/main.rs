/// `bcp2csv`: convert a SQL Server BCP export into CSV.
///
/// # Usage
///
/// ```text
/// bcp2csv [OPTIONS] [INPUT]
///
/// Arguments:
///   [INPUT]    BCP file to read; stdin when absent or `-`
///
/// Options:
///   -o, --output <PATH>   Write CSV to PATH instead of stdout
///       --flush-trailing  Emit an unterminated final record instead of dropping it
///   -v, --verbose         Log progress and a run summary to stderr
///   -h, --help            Print help
///   -V, --version         Print version
/// ```
///
/// With no arguments the tool is a plain filter:
///
/// ```text
/// bcp2csv < table.bcp > table.csv
/// ```
///
/// # Exit codes
///
/// | Code | Meaning                                      |
/// |------|----------------------------------------------|
/// | 0    | Success                                      |
/// | 1    | Error (I/O failure, invalid UTF-8 record)    |
///
/// Diagnostics and logs go to stderr so stdout carries only CSV.
use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cmd_convert;

/// Convert SQL Server BCP exports (0x1E rows, 0x1D fields) to CSV.
#[derive(Parser)]
#[command(name = "bcp2csv", version, about = "Convert BCP exports to CSV")]
pub struct Cli {
    /// BCP file to read. Reads stdin when absent or `-`.
    pub input: Option<PathBuf>,

    /// Write CSV to this file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Emit bytes after the last row terminator as a final record.
    ///
    /// By default an unterminated trailing segment is dropped.
    #[arg(long)]
    pub flush_trailing: bool,

    /// Log at debug level to stderr and report a run summary.
    #[arg(short, long)]
    pub verbose: bool,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = cmd_convert::run(&cli) {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}
