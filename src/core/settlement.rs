//! Settlement engine
//!
//! This module provides the SettlementEngine that pays a depositor's
//! outstanding debts out of freshly deposited funds. Settlement runs
//! automatically after every deposit and is the only way debts get paid.
//!
//! Debts are visited strictly in creation order. Each debt receives the
//! smaller of its outstanding amount and the funds still remaining from the
//! deposit; settlement stops as soon as the deposit is exhausted, leaving
//! later debts untouched.

use crate::core::account_store::AccountStore;
use crate::core::debt_book::DebtBook;
use crate::types::{AccountName, DebtPayment, LedgerError, SettlementReport};
use rust_decimal::Decimal;

/// Pays outstanding debts from deposited funds
///
/// Stateless; the account store and debt book are passed explicitly per
/// call. Each payment moves funds from the depositor to the creditor and
/// reduces the matching debt in the same step.
#[derive(Debug, Clone, Copy, Default)]
pub struct SettlementEngine;

impl SettlementEngine {
    /// Create a new SettlementEngine
    pub fn new() -> Self {
        SettlementEngine
    }

    /// Settle a depositor's debts using the funds just deposited
    ///
    /// Only the deposited amount is spent on debts. Any balance the
    /// depositor held before the deposit stays untouched, so a depositor
    /// who owed money keeps whatever the deposit does not cover.
    ///
    /// # Arguments
    ///
    /// * `accounts` - Account store to move payments through
    /// * `debts` - Debt book holding the depositor's debts
    /// * `depositor` - The account that just deposited
    /// * `deposited` - The amount that was deposited (must be positive)
    ///
    /// # Returns
    ///
    /// A [`SettlementReport`] listing every payment made, in order. The
    /// report is empty when the depositor has no debts.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::InvalidAmount`] if the deposited amount is
    /// not positive, or [`LedgerError::InvariantViolation`] if the stored
    /// state is inconsistent with the debts being paid.
    pub fn settle_on_deposit(
        &self,
        accounts: &mut AccountStore,
        debts: &mut DebtBook,
        depositor: &AccountName,
        deposited: Decimal,
    ) -> Result<SettlementReport, LedgerError> {
        if deposited <= Decimal::ZERO {
            return Err(LedgerError::invalid_amount(deposited));
        }

        // Snapshot the entries so payments can mutate the book as we go
        let entries = debts.debts_of(depositor).to_vec();
        if entries.is_empty() {
            return Ok(SettlementReport::empty());
        }

        let mut remaining = deposited;
        let mut payments = Vec::new();

        for entry in entries {
            if remaining.is_zero() {
                break;
            }

            let payment = entry.amount.min(remaining);
            accounts.transfer_between(depositor, &entry.creditor, payment)?;
            debts.reduce_owed(depositor, &entry.creditor, payment)?;
            remaining -= payment;

            payments.push(DebtPayment {
                creditor: entry.creditor,
                amount: payment,
            });
        }

        Ok(SettlementReport { payments })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn name(raw: &str) -> AccountName {
        AccountName::new(raw)
    }

    /// Deposit for `depositor` and settle, returning the report
    fn deposit_and_settle(
        accounts: &mut AccountStore,
        debts: &mut DebtBook,
        depositor: &AccountName,
        amount: Decimal,
    ) -> SettlementReport {
        accounts.deposit(depositor, amount).unwrap();
        SettlementEngine::new()
            .settle_on_deposit(accounts, debts, depositor, amount)
            .unwrap()
    }

    #[test]
    fn test_no_debts_returns_empty_report() {
        let mut accounts = AccountStore::new();
        let mut debts = DebtBook::new();

        let report = deposit_and_settle(
            &mut accounts,
            &mut debts,
            &name("alice"),
            Decimal::new(50, 0),
        );

        assert!(report.is_empty());
        assert_eq!(accounts.balance_of(&name("alice")), Decimal::new(50, 0));
    }

    #[test]
    fn test_deposit_smaller_than_debt_pays_partially() {
        let mut accounts = AccountStore::new();
        let mut debts = DebtBook::new();
        debts
            .add_owed(&name("alice"), &name("bob"), Decimal::new(40, 0))
            .unwrap();

        let report = deposit_and_settle(
            &mut accounts,
            &mut debts,
            &name("alice"),
            Decimal::new(25, 0),
        );

        assert_eq!(
            report.payments,
            vec![DebtPayment {
                creditor: name("bob"),
                amount: Decimal::new(25, 0),
            }]
        );
        assert_eq!(accounts.balance_of(&name("alice")), Decimal::ZERO);
        assert_eq!(accounts.balance_of(&name("bob")), Decimal::new(25, 0));
        assert_eq!(
            debts.owed(&name("alice"), &name("bob")),
            Decimal::new(15, 0)
        );
    }

    #[test]
    fn test_deposit_larger_than_debt_clears_entry_and_keeps_change() {
        let mut accounts = AccountStore::new();
        let mut debts = DebtBook::new();
        debts
            .add_owed(&name("alice"), &name("bob"), Decimal::new(15, 0))
            .unwrap();

        let report = deposit_and_settle(
            &mut accounts,
            &mut debts,
            &name("alice"),
            Decimal::new(30, 0),
        );

        assert_eq!(report.total_paid(), Decimal::new(15, 0));
        assert_eq!(accounts.balance_of(&name("alice")), Decimal::new(15, 0));
        assert_eq!(accounts.balance_of(&name("bob")), Decimal::new(15, 0));
        assert!(!debts.has_debts(&name("alice")));
    }

    #[test]
    fn test_debts_are_paid_in_creation_order() {
        let mut accounts = AccountStore::new();
        let mut debts = DebtBook::new();
        debts
            .add_owed(&name("alice"), &name("bob"), Decimal::new(20, 0))
            .unwrap();
        debts
            .add_owed(&name("alice"), &name("carol"), Decimal::new(20, 0))
            .unwrap();
        debts
            .add_owed(&name("alice"), &name("dave"), Decimal::new(20, 0))
            .unwrap();

        // 50 covers bob and carol in full, dave only partially
        let report = deposit_and_settle(
            &mut accounts,
            &mut debts,
            &name("alice"),
            Decimal::new(50, 0),
        );

        let paid: Vec<(&str, Decimal)> = report
            .payments
            .iter()
            .map(|payment| (payment.creditor.as_str(), payment.amount))
            .collect();
        assert_eq!(
            paid,
            vec![
                ("bob", Decimal::new(20, 0)),
                ("carol", Decimal::new(20, 0)),
                ("dave", Decimal::new(10, 0)),
            ]
        );
        assert_eq!(
            debts.owed(&name("alice"), &name("dave")),
            Decimal::new(10, 0)
        );
        assert_eq!(accounts.balance_of(&name("alice")), Decimal::ZERO);
    }

    #[test]
    fn test_settlement_stops_when_deposit_is_exhausted() {
        let mut accounts = AccountStore::new();
        let mut debts = DebtBook::new();
        debts
            .add_owed(&name("alice"), &name("bob"), Decimal::new(30, 0))
            .unwrap();
        debts
            .add_owed(&name("alice"), &name("carol"), Decimal::new(30, 0))
            .unwrap();

        let report = deposit_and_settle(
            &mut accounts,
            &mut debts,
            &name("alice"),
            Decimal::new(30, 0),
        );

        // Exactly one payment: carol's debt is untouched
        assert_eq!(report.payments.len(), 1);
        assert_eq!(report.payments[0].creditor, name("bob"));
        assert_eq!(
            debts.owed(&name("alice"), &name("carol")),
            Decimal::new(30, 0)
        );
    }

    #[test]
    fn test_prior_balance_is_not_spent_on_debts() {
        let mut accounts = AccountStore::new();
        let mut debts = DebtBook::new();
        accounts
            .deposit(&name("alice"), Decimal::new(100, 0))
            .unwrap();
        debts
            .add_owed(&name("alice"), &name("bob"), Decimal::new(50, 0))
            .unwrap();

        // Only the fresh 10 goes to bob; the earlier 100 stays put
        let report = deposit_and_settle(
            &mut accounts,
            &mut debts,
            &name("alice"),
            Decimal::new(10, 0),
        );

        assert_eq!(report.total_paid(), Decimal::new(10, 0));
        assert_eq!(accounts.balance_of(&name("alice")), Decimal::new(100, 0));
        assert_eq!(
            debts.owed(&name("alice"), &name("bob")),
            Decimal::new(40, 0)
        );
    }

    #[test]
    fn test_settlement_conserves_total_funds() {
        let mut accounts = AccountStore::new();
        let mut debts = DebtBook::new();
        accounts.deposit(&name("bob"), Decimal::new(5, 0)).unwrap();
        debts
            .add_owed(&name("alice"), &name("bob"), Decimal::new(40, 0))
            .unwrap();
        debts
            .add_owed(&name("alice"), &name("carol"), Decimal::new(10, 0))
            .unwrap();

        deposit_and_settle(
            &mut accounts,
            &mut debts,
            &name("alice"),
            Decimal::new(45, 0),
        );

        let total = accounts.balance_of(&name("alice"))
            + accounts.balance_of(&name("bob"))
            + accounts.balance_of(&name("carol"));
        assert_eq!(total, Decimal::new(50, 0)); // 5 already present + 45 deposited
    }

    #[test]
    fn test_non_positive_deposit_is_rejected() {
        let mut accounts = AccountStore::new();
        let mut debts = DebtBook::new();

        let result = SettlementEngine::new().settle_on_deposit(
            &mut accounts,
            &mut debts,
            &name("alice"),
            Decimal::ZERO,
        );

        assert!(matches!(result, Err(LedgerError::InvalidAmount { .. })));
    }
}
