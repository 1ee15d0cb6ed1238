//! Debt book for deferred transfer amounts
//!
//! This module provides the DebtBook component that records what each
//! debtor owes to each creditor. Debts are created when a partial transfer
//! cannot move the full requested amount, and paid down when the debtor
//! deposits funds.
//!
//! # Ordering
//!
//! Each debtor's entries are kept in the order the debts were first
//! created, and settlement walks them in that order. Paying a debt down to
//! zero removes the entry without disturbing the order of the rest; adding
//! to an existing debt merges into the existing entry in place.
//!
//! # Invariants
//!
//! - Every stored entry has a positive amount
//! - At most one entry exists per (debtor, creditor) pair
//! - A debtor with no entries has no key in the book at all

use crate::types::{AccountName, DebtEntry, LedgerError};
use rust_decimal::Decimal;
use std::collections::HashMap;

/// Records outstanding debts between accounts
///
/// Maintains a map of debtor name to an ordered list of debt entries.
/// Supports adding to a debt, reducing it, and querying what a debtor owes.
pub struct DebtBook {
    /// Map of debtor name to entries in creation order
    debts: HashMap<AccountName, Vec<DebtEntry>>,
}

impl DebtBook {
    /// Create a new empty debt book
    pub fn new() -> Self {
        DebtBook {
            debts: HashMap::new(),
        }
    }

    /// Record that a debtor owes a creditor an additional amount
    ///
    /// If a debt between the pair already exists, the amount merges into the
    /// existing entry, keeping its place in the order. Otherwise a new entry
    /// is appended after all existing entries for the debtor.
    ///
    /// # Arguments
    ///
    /// * `debtor` - The account that owes
    /// * `creditor` - The account that is owed
    /// * `amount` - The amount to add (must be positive)
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::InvariantViolation`] if the amount is not
    /// positive or merging would overflow.
    pub fn add_owed(
        &mut self,
        debtor: &AccountName,
        creditor: &AccountName,
        amount: Decimal,
    ) -> Result<(), LedgerError> {
        if amount <= Decimal::ZERO {
            return Err(LedgerError::invariant(format!(
                "non-positive debt of {amount} from {debtor} to {creditor}"
            )));
        }

        let entries = self.debts.entry(debtor.clone()).or_default();
        match entries.iter_mut().find(|entry| entry.creditor == *creditor) {
            Some(entry) => {
                entry.amount = entry.amount.checked_add(amount).ok_or_else(|| {
                    LedgerError::invariant(format!(
                        "debt overflow from {debtor} to {creditor}"
                    ))
                })?;
            }
            None => entries.push(DebtEntry::new(creditor.clone(), amount)),
        }
        Ok(())
    }

    /// Reduce an existing debt by a payment amount
    ///
    /// Reducing a debt exactly to zero removes the entry; reducing the last
    /// entry removes the debtor from the book entirely.
    ///
    /// # Arguments
    ///
    /// * `debtor` - The account that owes
    /// * `creditor` - The account that is owed
    /// * `amount` - The amount to subtract (must be positive and at most
    ///   the outstanding amount)
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::InvariantViolation`] if no debt exists between
    /// the pair, the amount is not positive, or it exceeds the outstanding
    /// amount. Debts never go negative.
    pub fn reduce_owed(
        &mut self,
        debtor: &AccountName,
        creditor: &AccountName,
        amount: Decimal,
    ) -> Result<(), LedgerError> {
        if amount <= Decimal::ZERO {
            return Err(LedgerError::invariant(format!(
                "non-positive debt reduction of {amount} from {debtor} to {creditor}"
            )));
        }

        let entries = self.debts.get_mut(debtor).ok_or_else(|| {
            LedgerError::invariant(format!("no debts recorded for {debtor}"))
        })?;
        let position = entries
            .iter()
            .position(|entry| entry.creditor == *creditor)
            .ok_or_else(|| {
                LedgerError::invariant(format!("no debt from {debtor} to {creditor}"))
            })?;

        let outstanding = entries[position].amount;
        if amount > outstanding {
            return Err(LedgerError::invariant(format!(
                "reduction of {amount} exceeds debt of {outstanding} from {debtor} to {creditor}"
            )));
        }

        if amount == outstanding {
            // Paid in full: drop the entry, and the debtor if nothing remains
            entries.remove(position);
            if entries.is_empty() {
                self.debts.remove(debtor);
            }
        } else {
            entries[position].amount = outstanding - amount;
        }
        Ok(())
    }

    /// All debts of a debtor, in creation order
    ///
    /// Returns an empty slice for a debtor with no recorded debts.
    pub fn debts_of(&self, debtor: &AccountName) -> &[DebtEntry] {
        self.debts
            .get(debtor)
            .map(|entries| entries.as_slice())
            .unwrap_or(&[])
    }

    /// Amount a debtor owes one specific creditor
    ///
    /// Returns zero when no debt exists between the pair.
    pub fn owed(&self, debtor: &AccountName, creditor: &AccountName) -> Decimal {
        self.debts_of(debtor)
            .iter()
            .find(|entry| entry.creditor == *creditor)
            .map(|entry| entry.amount)
            .unwrap_or(Decimal::ZERO)
    }

    /// Whether a debtor has any outstanding debt
    pub fn has_debts(&self, debtor: &AccountName) -> bool {
        self.debts.contains_key(debtor)
    }

    /// Whether the book holds no debts at all
    pub fn is_empty(&self) -> bool {
        self.debts.is_empty()
    }
}

impl Default for DebtBook {
    fn default() -> Self {
        Self::new()
    }
}
