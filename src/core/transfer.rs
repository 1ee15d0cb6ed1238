//! Transfer engine
//!
//! This module provides the TransferEngine that executes transfer requests
//! against the account store and debt book. The engine enforces transfer
//! preconditions and applies the configured transfer policy:
//!
//! - `FullOnly`: the full requested amount moves, or nothing happens
//! - `PartialAllowed`: whatever is available moves, and the shortfall is
//!   recorded in the debt book
//!
//! Business results, including the full-mode rejection, come back as
//! [`TransferOutcome`] values. Errors are reserved for precondition
//! violations and internal inconsistencies.

use crate::core::account_store::AccountStore;
use crate::core::debt_book::DebtBook;
use crate::types::{AccountName, LedgerError, TransferMode, TransferOutcome};
use rust_decimal::Decimal;

/// Executes transfers between accounts
///
/// Holds the default transfer mode chosen at startup; individual calls may
/// override it. The account store and debt book are passed explicitly per
/// call, so the engine itself carries no account state.
#[derive(Debug, Clone, Copy)]
pub struct TransferEngine {
    /// Mode applied when no per-call override is given
    mode: TransferMode,
}

impl TransferEngine {
    /// Create a new TransferEngine with the given default mode
    pub fn new(mode: TransferMode) -> Self {
        TransferEngine { mode }
    }

    /// The engine's default transfer mode
    pub fn mode(&self) -> TransferMode {
        self.mode
    }

    /// Execute a transfer under the engine's default mode
    ///
    /// See [`TransferEngine::transfer_with_mode`] for the full semantics.
    pub fn transfer(
        &self,
        accounts: &mut AccountStore,
        debts: &mut DebtBook,
        source: &AccountName,
        target: &AccountName,
        requested: Decimal,
    ) -> Result<TransferOutcome, LedgerError> {
        self.transfer_with_mode(accounts, debts, source, target, requested, self.mode)
    }

    /// Execute a transfer under an explicit mode
    ///
    /// In `PartialAllowed` mode the target account is created up front and
    /// the transfer always produces an outcome: a full move, a partial move
    /// plus debt, or pure debt when the source has nothing. In `FullOnly`
    /// mode an insufficient balance rejects the request before the target is
    /// resolved, so no account springs into existence for a rejected
    /// transfer.
    ///
    /// # Arguments
    ///
    /// * `accounts` - Account store to debit and credit
    /// * `debts` - Debt book receiving any shortfall
    /// * `source` - The account sending funds
    /// * `target` - The account receiving funds
    /// * `requested` - The full amount requested (must be positive)
    /// * `mode` - Transfer policy for this call
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::InvalidAmount`] if the requested amount is not
    /// positive, or [`LedgerError::SelfTransfer`] if source and target are
    /// the same account. Running out of funds in `FullOnly` mode is not an
    /// error; it is the [`TransferOutcome::InsufficientForFull`] outcome.
    pub fn transfer_with_mode(
        &self,
        accounts: &mut AccountStore,
        debts: &mut DebtBook,
        source: &AccountName,
        target: &AccountName,
        requested: Decimal,
        mode: TransferMode,
    ) -> Result<TransferOutcome, LedgerError> {
        if requested <= Decimal::ZERO {
            return Err(LedgerError::invalid_amount(requested));
        }
        if source == target {
            return Err(LedgerError::SelfTransfer);
        }

        match mode {
            TransferMode::FullOnly => Self::transfer_full_only(accounts, source, target, requested),
            TransferMode::PartialAllowed => {
                Self::transfer_partial(accounts, debts, source, target, requested)
            }
        }
    }

    /// All-or-nothing transfer
    fn transfer_full_only(
        accounts: &mut AccountStore,
        source: &AccountName,
        target: &AccountName,
        requested: Decimal,
    ) -> Result<TransferOutcome, LedgerError> {
        let available = accounts.balance_of(source);
        if available < requested {
            // Rejected before the target is resolved; no account is created
            return Ok(TransferOutcome::InsufficientForFull {
                required: requested,
                available,
            });
        }

        accounts.transfer_between(source, target, requested)?;
        Ok(TransferOutcome::Full { moved: requested })
    }

    /// Best-effort transfer, recording any shortfall as debt
    fn transfer_partial(
        accounts: &mut AccountStore,
        debts: &mut DebtBook,
        source: &AccountName,
        target: &AccountName,
        requested: Decimal,
    ) -> Result<TransferOutcome, LedgerError> {
        // The target takes part in the transfer even if no funds reach it
        accounts.get_or_create(target);

        let available = accounts.balance_of(source);
        if available.is_zero() {
            debts.add_owed(source, target, requested)?;
            return Ok(TransferOutcome::DebtOnly { owed: requested });
        }

        let moved = requested.min(available);
        accounts.transfer_between(source, target, moved)?;

        if moved < requested {
            let owed = requested - moved;
            debts.add_owed(source, target, owed)?;
            Ok(TransferOutcome::Partial { moved, owed })
        } else {
            Ok(TransferOutcome::Full { moved })
        }
    }
}

impl Default for TransferEngine {
    fn default() -> Self {
        Self::new(TransferMode::default())
    }
}
