//! Streaming command reader with iterator interface
//!
//! Provides a streaming iterator over commands from any buffered input,
//! which in practice is either stdin or an opened script file. Delegates
//! the text format concerns to the line_format module.
//!
//! # Iterator Interface
//!
//! CommandReader implements the Iterator trait, yielding
//! `Result<Command, String>` for each non-blank input line:
//!
//! ```no_run
//! use atm_ledger::io::line_reader::CommandReader;
//!
//! let stdin = std::io::stdin();
//! for result in CommandReader::new(stdin.lock()) {
//!     match result {
//!         Ok(command) => println!("Executing: {:?}", command),
//!         Err(e) => eprintln!("Error: {}", e),
//!     }
//! }
//! ```
//!
//! # Error Handling
//!
//! - Parse errors are yielded as Err variants and iteration continues
//! - A hard read error is yielded once, then the iterator stops
//! - Blank lines are skipped, so pasted transcripts with block-separating
//!   blank lines replay cleanly
//!
//! Lines are processed one at a time; memory usage does not grow with the
//! size of the input.

use crate::io::line_format::parse_line;
use crate::types::Command;
use std::io::BufRead;

/// Streaming command reader over buffered input
///
/// Reads one line per iteration step and parses it into a [`Command`].
/// The reader never interprets commands; deciding what `exit` means is
/// left to the command loop.
#[derive(Debug)]
pub struct CommandReader<R> {
    input: R,
    done: bool,
}

impl<R: BufRead> CommandReader<R> {
    /// Create a new CommandReader over any buffered input
    pub fn new(input: R) -> Self {
        CommandReader { input, done: false }
    }
}

impl<R: BufRead> Iterator for CommandReader<R> {
    type Item = Result<Command, String>;

    /// Get the next command from the input
    ///
    /// # Returns
    ///
    /// * `Some(Ok(Command))` - Successfully parsed command
    /// * `Some(Err(String))` - Parse or read error
    /// * `None` - End of input reached
    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        loop {
            let mut line = String::new();
            match self.input.read_line(&mut line) {
                Ok(0) => return None,
                Ok(_) => {
                    if line.trim().is_empty() {
                        continue;
                    }
                    return Some(parse_line(&line));
                }
                Err(e) => {
                    // A failed read is unlikely to recover; report once and stop
                    self.done = true;
                    return Some(Err(format!("Failed to read input: {e}")));
                }
            }
        }
    }
}
