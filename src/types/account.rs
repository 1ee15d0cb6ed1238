//! Account-related types for the ATM ledger
//!
//! This module defines the canonical account identifier and the Account
//! value type holding a balance.

use crate::types::LedgerError;
use rust_decimal::Decimal;
use std::fmt;

/// Canonical account identifier
///
/// Account names are case-insensitive: every name entering the system is
/// canonicalized to lowercase on construction, so two spellings of the same
/// name always resolve to the same account and the same debt entries.
///
/// Construction never fails; the stricter 2-20 ASCII letter rule applies
/// only where the system creates accounts deliberately (login), via
/// [`AccountName::validated`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AccountName(String);

impl AccountName {
    /// Canonicalize a raw name to its lowercase form
    ///
    /// Used for every name reference that does not create an account by
    /// itself, such as transfer targets.
    pub fn new(raw: &str) -> Self {
        AccountName(raw.trim().to_lowercase())
    }

    /// Validate and canonicalize a name used to create an account
    ///
    /// The rule matches account creation at login: 2 to 20 ASCII letters,
    /// nothing else.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::InvalidAccountName`] if the raw name is too
    /// short, too long, or contains anything but ASCII letters.
    pub fn validated(raw: &str) -> Result<Self, LedgerError> {
        let trimmed = raw.trim();
        let ok = (2..=20).contains(&trimmed.len())
            && trimmed.chars().all(|c| c.is_ascii_alphabetic());
        if ok {
            Ok(Self::new(trimmed))
        } else {
            Err(LedgerError::invalid_account_name(raw))
        }
    }

    /// The canonical (lowercase) form of the name
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Account state
///
/// A single account kind exists: a named balance. The balance is an exact
/// decimal and never negative; every mutation goes through
/// [`crate::core::AccountStore`], which validates before it writes.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    /// Canonical account name
    pub name: AccountName,

    /// Current balance
    ///
    /// Invariant: `balance >= 0` at all times. Operations that would break
    /// this fail before any mutation takes place.
    pub balance: Decimal,
}

impl Account {
    /// Create a new account with a zero balance
    pub fn new(name: AccountName) -> Self {
        Account {
            name,
            balance: Decimal::ZERO,
        }
    }
}
