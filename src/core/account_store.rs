//! Account store module
//!
//! This module provides the `AccountStore` struct which maintains the state
//! of all accounts and provides operations for mutating balances.
//!
//! The AccountStore is responsible for:
//! - Creating accounts on first use
//! - Tracking balances as exact decimals
//! - Validating every mutation before any state changes
//! - Moving funds between two accounts as one atomic step

use crate::types::{Account, AccountName, LedgerError};
use rust_decimal::Decimal;
use std::collections::HashMap;

/// Manages all accounts and their balances
///
/// The AccountStore maintains an in-memory map of canonical account names to
/// account states. Amounts entering the store are expected to be positive;
/// a non-positive amount here means a caller skipped validation and is
/// reported as an invariant violation rather than a user error.
pub struct AccountStore {
    /// Map of canonical names to account states
    accounts: HashMap<AccountName, Account>,
}

impl AccountStore {
    /// Create a new AccountStore with no accounts
    pub fn new() -> Self {
        AccountStore {
            accounts: HashMap::new(),
        }
    }

    /// Get or create an account for the specified name
    ///
    /// If an account already exists for the name, returns a mutable reference
    /// to it. If no account exists, creates a new account with a zero balance.
    ///
    /// # Arguments
    ///
    /// * `name` - The canonical account name to get or create an account for
    ///
    /// # Returns
    ///
    /// A mutable reference to the account for the specified name
    pub fn get_or_create(&mut self, name: &AccountName) -> &mut Account {
        self.accounts
            .entry(name.clone())
            .or_insert_with(|| Account::new(name.clone()))
    }

    /// Get an account by name, if it exists
    pub fn get(&self, name: &AccountName) -> Option<&Account> {
        self.accounts.get(name)
    }

    /// Check whether an account exists
    pub fn exists(&self, name: &AccountName) -> bool {
        self.accounts.contains_key(name)
    }

    /// Current balance of an account
    ///
    /// Accounts that do not exist yet report a zero balance; querying does
    /// not create them.
    pub fn balance_of(&self, name: &AccountName) -> Decimal {
        self.accounts
            .get(name)
            .map(|account| account.balance)
            .unwrap_or(Decimal::ZERO)
    }

    /// Number of accounts in the store
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    /// Whether the store holds no accounts
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// Deposit funds into an account
    ///
    /// Increases the balance by the specified amount, creating the account
    /// if needed. Uses checked arithmetic to prevent overflow.
    ///
    /// # Arguments
    ///
    /// * `name` - The account to deposit funds into
    /// * `amount` - The amount to deposit (must be positive)
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::InvariantViolation`] if the amount is not
    /// positive or the balance would overflow.
    pub fn deposit(&mut self, name: &AccountName, amount: Decimal) -> Result<(), LedgerError> {
        if amount <= Decimal::ZERO {
            return Err(LedgerError::invariant(format!(
                "non-positive deposit of {amount} for {name}"
            )));
        }

        let account = self.get_or_create(name);
        let new_balance = account.balance.checked_add(amount).ok_or_else(|| {
            LedgerError::invariant(format!("balance overflow depositing to {name}"))
        })?;

        account.balance = new_balance;
        Ok(())
    }

    /// Withdraw funds from an account
    ///
    /// Decreases the balance by the specified amount. Validates that
    /// sufficient funds exist before any mutation, so a rejected withdrawal
    /// leaves the account exactly as it was.
    ///
    /// # Arguments
    ///
    /// * `name` - The account to withdraw funds from
    /// * `amount` - The amount to withdraw (must be positive)
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::InsufficientFunds`] if the balance does not
    /// cover the amount, or [`LedgerError::InvariantViolation`] if the
    /// amount is not positive.
    pub fn withdraw(&mut self, name: &AccountName, amount: Decimal) -> Result<(), LedgerError> {
        if amount <= Decimal::ZERO {
            return Err(LedgerError::invariant(format!(
                "non-positive withdrawal of {amount} for {name}"
            )));
        }

        let account = self.get_or_create(name);
        if account.balance < amount {
            return Err(LedgerError::insufficient_funds(
                name,
                account.balance,
                amount,
            ));
        }

        let new_balance = account.balance.checked_sub(amount).ok_or_else(|| {
            LedgerError::invariant(format!("balance underflow withdrawing from {name}"))
        })?;

        account.balance = new_balance;
        Ok(())
    }

    /// Move funds from one account to another as a single step
    ///
    /// Debits the source and credits the target, creating the target if
    /// needed. Both sides are validated before either balance changes, so
    /// the pair either applies completely or not at all.
    ///
    /// # Arguments
    ///
    /// * `source` - The account to debit
    /// * `target` - The account to credit
    /// * `amount` - The amount to move (must be positive)
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::InsufficientFunds`] if the source balance does
    /// not cover the amount, or [`LedgerError::InvariantViolation`] if the
    /// amount is not positive, source and target are the same account, or
    /// the arithmetic would overflow.
    pub fn transfer_between(
        &mut self,
        source: &AccountName,
        target: &AccountName,
        amount: Decimal,
    ) -> Result<(), LedgerError> {
        if amount <= Decimal::ZERO {
            return Err(LedgerError::invariant(format!(
                "non-positive transfer of {amount} from {source} to {target}"
            )));
        }
        if source == target {
            return Err(LedgerError::invariant(format!(
                "transfer from {source} to itself"
            )));
        }

        // Make sure both accounts exist before any balance moves
        self.get_or_create(source);
        self.get_or_create(target);

        let source_balance = self.balance_of(source);
        if source_balance < amount {
            return Err(LedgerError::insufficient_funds(
                source,
                source_balance,
                amount,
            ));
        }

        let new_source = source_balance.checked_sub(amount).ok_or_else(|| {
            LedgerError::invariant(format!("balance underflow debiting {source}"))
        })?;
        let new_target = self.balance_of(target).checked_add(amount).ok_or_else(|| {
            LedgerError::invariant(format!("balance overflow crediting {target}"))
        })?;

        // Both sides validated; apply the debit and credit together
        self.get_or_create(source).balance = new_source;
        self.get_or_create(target).balance = new_target;

        Ok(())
    }
}

impl Default for AccountStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn name(raw: &str) -> AccountName {
        AccountName::new(raw)
    }

    #[test]
    fn test_new_creates_empty_store() {
        let store = AccountStore::new();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn test_get_or_create_creates_account_with_zero_balance() {
        let mut store = AccountStore::new();

        let account = store.get_or_create(&name("alice"));

        assert_eq!(account.name, name("alice"));
        assert_eq!(account.balance, Decimal::ZERO);
    }

    #[test]
    fn test_get_or_create_returns_existing_account() {
        let mut store = AccountStore::new();

        store.get_or_create(&name("alice")).balance = Decimal::new(100, 0);

        let account = store.get_or_create(&name("alice"));
        assert_eq!(account.balance, Decimal::new(100, 0));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_balance_of_missing_account_is_zero_without_creating_it() {
        let store = AccountStore::new();

        assert_eq!(store.balance_of(&name("ghost")), Decimal::ZERO);
        assert!(!store.exists(&name("ghost")));
    }

    #[test]
    fn test_case_insensitive_names_share_one_account() {
        let mut store = AccountStore::new();

        store.deposit(&name("Alice"), Decimal::new(50, 0)).unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(store.balance_of(&name("ALICE")), Decimal::new(50, 0));
    }

    #[test]
    fn test_deposit_increases_balance() {
        let mut store = AccountStore::new();

        let result = store.deposit(&name("alice"), Decimal::new(1050, 2)); // 10.50
        assert!(result.is_ok());

        assert_eq!(store.balance_of(&name("alice")), Decimal::new(1050, 2));
    }

    #[test]
    fn test_deposit_multiple_times_accumulates() {
        let mut store = AccountStore::new();

        store.deposit(&name("alice"), Decimal::new(100, 0)).unwrap();
        store.deposit(&name("alice"), Decimal::new(250, 0)).unwrap();
        store.deposit(&name("alice"), Decimal::new(50, 0)).unwrap();

        assert_eq!(store.balance_of(&name("alice")), Decimal::new(400, 0));
    }

    #[test]
    fn test_deposit_rejects_non_positive_amount() {
        let mut store = AccountStore::new();

        for amount in [Decimal::ZERO, Decimal::new(-5, 0)] {
            let result = store.deposit(&name("alice"), amount);
            assert!(matches!(
                result,
                Err(LedgerError::InvariantViolation { .. })
            ));
        }
    }

    #[test]
    fn test_withdraw_decreases_balance() {
        let mut store = AccountStore::new();
        store.deposit(&name("alice"), Decimal::new(100, 0)).unwrap();

        store.withdraw(&name("alice"), Decimal::new(40, 0)).unwrap();

        assert_eq!(store.balance_of(&name("alice")), Decimal::new(60, 0));
    }

    #[test]
    fn test_withdraw_with_insufficient_funds_leaves_balance_unchanged() {
        let mut store = AccountStore::new();
        store.deposit(&name("alice"), Decimal::new(50, 0)).unwrap();

        let result = store.withdraw(&name("alice"), Decimal::new(100, 0));

        assert_eq!(
            result,
            Err(LedgerError::InsufficientFunds {
                name: name("alice"),
                available: Decimal::new(50, 0),
                requested: Decimal::new(100, 0),
            })
        );
        assert_eq!(store.balance_of(&name("alice")), Decimal::new(50, 0));
    }

    #[test]
    fn test_withdraw_from_missing_account_creates_it_then_fails() {
        let mut store = AccountStore::new();

        let result = store.withdraw(&name("alice"), Decimal::new(10, 0));

        assert!(matches!(
            result,
            Err(LedgerError::InsufficientFunds { .. })
        ));
        assert!(store.exists(&name("alice")));
        assert_eq!(store.balance_of(&name("alice")), Decimal::ZERO);
    }

    #[test]
    fn test_transfer_between_moves_funds() {
        let mut store = AccountStore::new();
        store.deposit(&name("alice"), Decimal::new(100, 0)).unwrap();

        store
            .transfer_between(&name("alice"), &name("bob"), Decimal::new(60, 0))
            .unwrap();

        assert_eq!(store.balance_of(&name("alice")), Decimal::new(40, 0));
        assert_eq!(store.balance_of(&name("bob")), Decimal::new(60, 0));
    }

    #[test]
    fn test_transfer_between_creates_target_account() {
        let mut store = AccountStore::new();
        store.deposit(&name("alice"), Decimal::new(100, 0)).unwrap();

        store
            .transfer_between(&name("alice"), &name("bob"), Decimal::new(100, 0))
            .unwrap();

        assert!(store.exists(&name("bob")));
    }

    #[test]
    fn test_transfer_between_with_insufficient_funds_changes_nothing() {
        let mut store = AccountStore::new();
        store.deposit(&name("alice"), Decimal::new(30, 0)).unwrap();

        let result = store.transfer_between(&name("alice"), &name("bob"), Decimal::new(50, 0));

        assert!(matches!(
            result,
            Err(LedgerError::InsufficientFunds { .. })
        ));
        assert_eq!(store.balance_of(&name("alice")), Decimal::new(30, 0));
        assert_eq!(store.balance_of(&name("bob")), Decimal::ZERO);
    }

    #[test]
    fn test_transfer_between_rejects_same_account() {
        let mut store = AccountStore::new();
        store.deposit(&name("alice"), Decimal::new(30, 0)).unwrap();

        let result = store.transfer_between(&name("alice"), &name("ALICE"), Decimal::new(10, 0));

        assert!(matches!(
            result,
            Err(LedgerError::InvariantViolation { .. })
        ));
        assert_eq!(store.balance_of(&name("alice")), Decimal::new(30, 0));
    }

    #[test]
    fn test_transfer_between_conserves_total_funds() {
        let mut store = AccountStore::new();
        store.deposit(&name("alice"), Decimal::new(70, 0)).unwrap();
        store.deposit(&name("bob"), Decimal::new(30, 0)).unwrap();

        store
            .transfer_between(&name("alice"), &name("bob"), Decimal::new(25, 0))
            .unwrap();
        store
            .transfer_between(&name("bob"), &name("carol"), Decimal::new(55, 0))
            .unwrap();

        let total = store.balance_of(&name("alice"))
            + store.balance_of(&name("bob"))
            + store.balance_of(&name("carol"));
        assert_eq!(total, Decimal::new(100, 0));
    }
}
