//! Transfer-related types for the ATM ledger
//!
//! This module defines the transfer policy modes and the tagged outcome
//! returned by the transfer engine. Outcomes describe business results;
//! only precondition violations surface as [`crate::types::LedgerError`].

use clap::ValueEnum;
use rust_decimal::Decimal;

/// Transfer policy
///
/// Selects what happens when the source balance cannot cover the full
/// requested amount. The engine carries a default mode chosen at startup;
/// individual calls may override it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TransferMode {
    /// Move the full requested amount or nothing at all
    #[value(name = "full-only")]
    FullOnly,

    /// Move what is available and record any shortfall as a debt
    #[value(name = "partial")]
    PartialAllowed,
}

impl Default for TransferMode {
    fn default() -> Self {
        TransferMode::PartialAllowed
    }
}

/// Outcome of a transfer request
///
/// Every variant is a legitimate business result, including the full-mode
/// rejection: callers inspect the tag instead of catching errors. Amounts
/// are exact decimals and always positive within their variant.
#[derive(Debug, Clone, PartialEq)]
pub enum TransferOutcome {
    /// The full requested amount moved from source to target
    Full {
        /// Amount moved
        moved: Decimal,
    },

    /// Part of the requested amount moved; the shortfall became debt
    Partial {
        /// Amount moved
        moved: Decimal,
        /// Shortfall recorded as debt toward the target
        owed: Decimal,
    },

    /// Nothing moved; the full requested amount became debt
    DebtOnly {
        /// Amount recorded as debt toward the target
        owed: Decimal,
    },

    /// Full-only mode rejected the transfer; no state changed
    InsufficientForFull {
        /// The full amount that was requested
        required: Decimal,
        /// Balance available on the source account
        available: Decimal,
    },
}

impl TransferOutcome {
    /// Amount actually moved between balances
    pub fn amount_moved(&self) -> Decimal {
        match self {
            TransferOutcome::Full { moved } | TransferOutcome::Partial { moved, .. } => *moved,
            TransferOutcome::DebtOnly { .. } | TransferOutcome::InsufficientForFull { .. } => {
                Decimal::ZERO
            }
        }
    }

    /// Amount newly recorded as debt
    pub fn amount_owed(&self) -> Decimal {
        match self {
            TransferOutcome::Partial { owed, .. } | TransferOutcome::DebtOnly { owed } => *owed,
            TransferOutcome::Full { .. } | TransferOutcome::InsufficientForFull { .. } => {
                Decimal::ZERO
            }
        }
    }
}
