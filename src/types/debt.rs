//! Debt-related types for the ATM ledger
//!
//! This module defines the debt record kept by the debt book and the
//! settlement report produced when a deposit pays debts down.

use crate::types::AccountName;
use rust_decimal::Decimal;

/// A single outstanding debt from one debtor toward one creditor
///
/// Entries live in [`crate::core::DebtBook`], ordered by creation. An entry
/// only exists while its amount is positive; paying a debt down to zero
/// removes it entirely.
#[derive(Debug, Clone, PartialEq)]
pub struct DebtEntry {
    /// The account the debt is owed to
    pub creditor: AccountName,

    /// Outstanding amount
    ///
    /// Invariant: `amount > 0` for every stored entry.
    pub amount: Decimal,
}

impl DebtEntry {
    /// Create a new debt entry
    pub fn new(creditor: AccountName, amount: Decimal) -> Self {
        DebtEntry { creditor, amount }
    }
}

/// A single debt payment made during settlement
#[derive(Debug, Clone, PartialEq)]
pub struct DebtPayment {
    /// The creditor that was paid
    pub creditor: AccountName,

    /// Amount paid toward the debt
    pub amount: Decimal,
}

/// Report of all debt payments triggered by one deposit
///
/// Payments appear in the order they were made, which is the order the
/// underlying debts were created. An empty report means the depositor had
/// no outstanding debts or no funds reached them.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SettlementReport {
    /// Payments in the order they were made
    pub payments: Vec<DebtPayment>,
}

impl SettlementReport {
    /// Report with no payments
    pub fn empty() -> Self {
        SettlementReport {
            payments: Vec::new(),
        }
    }

    /// Whether any payment was made
    pub fn is_empty(&self) -> bool {
        self.payments.is_empty()
    }

    /// Sum of all payments in the report
    pub fn total_paid(&self) -> Decimal {
        self.payments
            .iter()
            .fold(Decimal::ZERO, |sum, payment| sum + payment.amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_report_has_zero_total() {
        let report = SettlementReport::empty();
        assert!(report.is_empty());
        assert_eq!(report.total_paid(), Decimal::ZERO);
    }

    #[test]
    fn test_total_paid_sums_payments() {
        let report = SettlementReport {
            payments: vec![
                DebtPayment {
                    creditor: AccountName::new("bob"),
                    amount: Decimal::new(25, 0),
                },
                DebtPayment {
                    creditor: AccountName::new("carol"),
                    amount: Decimal::new(1050, 2), // 10.50
                },
            ],
        };
        assert!(!report.is_empty());
        assert_eq!(report.total_paid(), Decimal::new(3550, 2)); // 35.50
    }
}
