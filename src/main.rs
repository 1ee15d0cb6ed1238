//! ATM Ledger CLI
//!
//! Command-line interface for the in-memory account ledger.
//!
//! # Usage
//!
//! ```bash
//! cargo run
//! cargo run -- session.txt
//! cargo run -- --mode full-only
//! cargo run -- --mode partial session.txt
//! ```
//!
//! Without a script argument the program prints a welcome banner and reads
//! commands interactively from stdin. With a script argument it executes the
//! commands in the file and exits. All state is in memory and discarded on
//! exit.
//!
//! # Transfer Modes
//!
//! - **partial**: transfers move what the balance covers and record the rest as debt (default)
//! - **full-only**: transfers are rejected unless the balance covers them entirely
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (file not found, broken output stream, etc.)

use atm_ledger::cli;
use atm_ledger::repl::{display, Repl};
use std::fs::File;
use std::io::{self, BufReader, Write};
use std::process;

fn main() {
    // Parse command-line arguments using clap
    let args = cli::parse_args();

    // Output goes to stdout for both script and interactive runs
    let mut output = io::stdout();
    if let Err(e) = run(&args, &mut output) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Run the ledger against a script file or interactively on stdin
fn run(args: &cli::CliArgs, output: &mut impl Write) -> Result<(), String> {
    let mut repl = Repl::new(args.mode);

    let result = match &args.script {
        Some(path) => {
            let file = File::open(path)
                .map_err(|e| format!("Failed to open file '{}': {}", path.display(), e))?;
            repl.run(BufReader::new(file), output)
        }
        None => run_interactive(&mut repl, output),
    };
    result.map_err(|e| format!("Failed to write output: {}", e))
}

/// Print the banner, then feed stdin to the command loop
fn run_interactive(repl: &mut Repl, output: &mut impl Write) -> io::Result<()> {
    writeln!(output, "{}", display::welcome_banner())?;
    writeln!(output)?;
    repl.run(io::stdin().lock(), output)
}
