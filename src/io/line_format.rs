//! Line command parsing
//!
//! This module centralizes the text format of the command language,
//! providing conversion from a raw input line to a [`Command`]. All
//! functions are pure (no I/O) for easy testing.
//!
//! # Grammar
//!
//! ```text
//! login <name>
//! deposit <amount>
//! withdraw <amount>
//! transfer <target> <amount>
//! logout
//! exit
//! ```
//!
//! Command words are case-insensitive and tokens beyond those a command
//! needs are ignored. Amounts must parse as decimals here; their sign is
//! checked at execution time, where the error can name the offending value.

use crate::types::Command;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Parse one input line into a Command
///
/// # Arguments
///
/// * `line` - The raw line, including any surrounding whitespace
///
/// # Returns
///
/// Result containing either:
/// - Ok(Command) - Successfully parsed command
/// - Err(String) - Error message describing what is wrong with the line
pub fn parse_line(line: &str) -> Result<Command, String> {
    let mut tokens = line.split_whitespace();
    let keyword = tokens.next().ok_or_else(|| "Empty command".to_string())?;

    match keyword.to_lowercase().as_str() {
        "login" => {
            let name = tokens
                .next()
                .ok_or_else(|| "login requires a name (usage: login <name>)".to_string())?;
            Ok(Command::Login {
                name: name.to_string(),
            })
        }
        "deposit" => {
            let amount = parse_amount(tokens.next(), "deposit", "deposit <amount>")?;
            Ok(Command::Deposit { amount })
        }
        "withdraw" => {
            let amount = parse_amount(tokens.next(), "withdraw", "withdraw <amount>")?;
            Ok(Command::Withdraw { amount })
        }
        "transfer" => {
            let target = tokens.next().ok_or_else(|| {
                "transfer requires a target and an amount (usage: transfer <target> <amount>)"
                    .to_string()
            })?;
            let amount = parse_amount(tokens.next(), "transfer", "transfer <target> <amount>")?;
            Ok(Command::Transfer {
                target: target.to_string(),
                amount,
            })
        }
        "logout" => Ok(Command::Logout),
        "exit" => Ok(Command::Exit),
        other => Err(format!("Invalid command '{other}'")),
    }
}

/// Parse an amount token into a Decimal
///
/// A missing token and an unparsable token produce different messages, so
/// the user learns whether the amount was forgotten or mistyped.
fn parse_amount(token: Option<&str>, command: &str, usage: &str) -> Result<Decimal, String> {
    let raw = token.ok_or_else(|| format!("{command} requires an amount (usage: {usage})"))?;
    Decimal::from_str(raw).map_err(|_| format!("Invalid amount '{raw}'"))
}
