//! Command types for the ATM ledger
//!
//! This module defines the parsed form of the line commands accepted on
//! stdin or from a script file. Parsing lives in [`crate::io::line_format`];
//! execution lives in [`crate::repl`].

use rust_decimal::Decimal;

/// A parsed line command
///
/// Account names are carried as raw strings here: canonicalization and the
/// account-creation name rule are applied at execution time, where the
/// distinction between creating an account (login) and merely referencing
/// one (transfer target) is known.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Start a session for the named account, creating it if needed
    Login {
        /// Raw account name as typed
        name: String,
    },

    /// Add funds to the logged-in account, then settle its debts
    Deposit {
        /// Amount to deposit
        amount: Decimal,
    },

    /// Remove funds from the logged-in account
    Withdraw {
        /// Amount to withdraw
        amount: Decimal,
    },

    /// Move funds from the logged-in account to another account
    Transfer {
        /// Raw target account name as typed
        target: String,
        /// Amount requested
        amount: Decimal,
    },

    /// End the current session
    Logout,

    /// Stop reading commands and terminate
    Exit,
}
