//! Presentation strings for the command loop
//!
//! The exact wording printed after each command lives here, so the loop
//! code reads as control flow and the user-facing strings stay in one
//! place. All functions are pure; writing happens in the loop.
//!
//! Amounts print with a `$` prefix and whatever scale the decimal carries,
//! so `deposit 25.50` echoes back as `$25.50` while `deposit 25` stays
//! `$25`.

use crate::types::{AccountName, DebtEntry, DebtPayment};
use rust_decimal::Decimal;

/// Greeting printed on login
pub fn greeting_line(name: &AccountName) -> String {
    format!("Hello, {name}!")
}

/// Farewell printed on logout
pub fn goodbye_line(name: &AccountName) -> String {
    format!("Goodbye, {name}!")
}

/// Balance line printed after most commands
pub fn balance_line(balance: Decimal) -> String {
    format!("Your balance is ${balance}")
}

/// One line per outstanding debt of the current user
pub fn owed_lines(debts: &[DebtEntry]) -> Vec<String> {
    debts
        .iter()
        .map(|entry| format!("Owed ${} to {}", entry.amount, entry.creditor))
        .collect()
}

/// Line printed when funds actually move to another account
pub fn transferred_line(amount: Decimal, target: &AccountName) -> String {
    format!("Transferred ${amount} to {target}")
}

/// Line printed for each debt payment made during settlement
pub fn payment_line(payment: &DebtPayment) -> String {
    transferred_line(payment.amount, &payment.creditor)
}

/// Line printed when a full-only transfer is rejected
pub fn insufficient_for_full_line(required: Decimal, available: Decimal) -> String {
    format!("Insufficient funds for full transfer. Required: ${required}, Available: ${available}")
}

/// Banner printed when reading commands interactively
///
/// Script runs skip the banner so their output is exactly the command
/// responses.
pub fn welcome_banner() -> String {
    [
        "Welcome to ATM Ledger",
        "* `login [name]` - Logs in as this customer and creates the customer if not exist",
        "* `deposit [amount]` - Deposits this amount to the logged in customer",
        "* `withdraw [amount]` - Withdraws this amount from the logged in customer",
        "* `transfer [target] [amount]` - Transfers this amount from the logged in customer to the target customer",
        "* `logout` - Logs out of the current customer",
        "* `exit` - Quits the program",
        "Please type command!",
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_balance_line_keeps_decimal_scale() {
        assert_eq!(balance_line(Decimal::new(100, 0)), "Your balance is $100");
        assert_eq!(
            balance_line(Decimal::new(2550, 2)),
            "Your balance is $25.50"
        );
        assert_eq!(balance_line(Decimal::ZERO), "Your balance is $0");
    }

    #[test]
    fn test_owed_lines_render_in_given_order() {
        let debts = vec![
            DebtEntry::new(AccountName::new("bob"), Decimal::new(40, 0)),
            DebtEntry::new(AccountName::new("carol"), Decimal::new(105, 1)), // 10.5
        ];

        assert_eq!(
            owed_lines(&debts),
            vec!["Owed $40 to bob", "Owed $10.5 to carol"]
        );
    }

    #[test]
    fn test_transfer_and_rejection_lines() {
        assert_eq!(
            transferred_line(Decimal::new(60, 0), &AccountName::new("bob")),
            "Transferred $60 to bob"
        );
        assert_eq!(
            insufficient_for_full_line(Decimal::new(100, 0), Decimal::new(50, 0)),
            "Insufficient funds for full transfer. Required: $100, Available: $50"
        );
    }

    #[test]
    fn test_banner_lists_every_command() {
        let banner = welcome_banner();
        for keyword in ["login", "deposit", "withdraw", "transfer", "logout", "exit"] {
            assert!(banner.contains(keyword), "banner missing {keyword}");
        }
    }
}
