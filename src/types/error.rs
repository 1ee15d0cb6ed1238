//! Error types for the ATM ledger
//!
//! This module defines all error types that can occur while executing
//! commands against the ledger. Errors are designed to be descriptive and
//! user-friendly for CLI output.
//!
//! # Error Categories
//!
//! - **Input Errors**: Non-positive amounts, malformed account names
//! - **Precondition Errors**: Self-transfer, missing or conflicting session
//! - **Funds Errors**: Insufficient balance for a withdrawal
//! - **Invariant Errors**: Internal state violations (these indicate a bug)
//!
//! Business outcomes that are not failures, such as a full-mode transfer
//! rejected for lack of funds, are reported through
//! [`crate::types::TransferOutcome`] instead of this enum.

use crate::types::AccountName;
use rust_decimal::Decimal;
use thiserror::Error;

/// Main error type for the ledger
///
/// This enum represents all possible errors that can occur while executing
/// a command. Each variant includes relevant context to help diagnose and
/// resolve the issue.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LedgerError {
    /// Amount is zero or negative where a positive amount is required
    ///
    /// This is a recoverable error - the command is rejected and the
    /// ledger state remains unchanged.
    #[error("Amount must be positive, got {amount}")]
    InvalidAmount {
        /// The offending amount
        amount: Decimal,
    },

    /// Account name does not satisfy the creation rule
    ///
    /// Names used to create an account must be 2 to 20 ASCII letters.
    /// This is a recoverable error.
    #[error("Account name must be 2-20 letters, got '{name}'")]
    InvalidAccountName {
        /// The rejected raw name
        name: String,
    },

    /// Transfer where source and target resolve to the same account
    ///
    /// Detected after canonicalization, so differently-cased spellings of
    /// the same name are also rejected. This is a recoverable error.
    #[error("Cannot transfer money to yourself")]
    SelfTransfer,

    /// Insufficient funds for a withdrawal
    ///
    /// This is a recoverable error - the withdrawal is rejected and the
    /// account state remains unchanged.
    #[error("Insufficient funds for {name}: available {available}, requested {requested}")]
    InsufficientFunds {
        /// Account that lacks funds
        name: AccountName,
        /// Available balance
        available: Decimal,
        /// Requested amount
        requested: Decimal,
    },

    /// A command that needs a session was issued with nobody logged in
    ///
    /// This is a recoverable error.
    #[error("No user logged in")]
    NoSession,

    /// Login attempted while another session is active
    ///
    /// This is a recoverable error - the active session is untouched.
    #[error("{current} needs to log out first")]
    AlreadyLoggedIn {
        /// The user currently logged in
        current: AccountName,
    },

    /// An internal invariant was violated
    ///
    /// This indicates a bug in the caller or in the ledger itself, such as
    /// a balance overflow or a debt reduction below zero. The operation is
    /// rejected to keep the stored state consistent.
    #[error("Ledger invariant violated: {detail}")]
    InvariantViolation {
        /// Description of the violated invariant
        detail: String,
    },
}

// Helper functions for creating common errors

impl LedgerError {
    /// Create an InvalidAmount error
    pub fn invalid_amount(amount: Decimal) -> Self {
        LedgerError::InvalidAmount { amount }
    }

    /// Create an InvalidAccountName error
    pub fn invalid_account_name(name: &str) -> Self {
        LedgerError::InvalidAccountName {
            name: name.to_string(),
        }
    }

    /// Create an InsufficientFunds error
    pub fn insufficient_funds(name: &AccountName, available: Decimal, requested: Decimal) -> Self {
        LedgerError::InsufficientFunds {
            name: name.clone(),
            available,
            requested,
        }
    }

    /// Create an AlreadyLoggedIn error
    pub fn already_logged_in(current: &AccountName) -> Self {
        LedgerError::AlreadyLoggedIn {
            current: current.clone(),
        }
    }

    /// Create an InvariantViolation error
    pub fn invariant(detail: impl Into<String>) -> Self {
        LedgerError::InvariantViolation {
            detail: detail.into(),
        }
    }
}
