//! Core business logic module
//!
//! This module contains the core ledger components:
//! - `account_store` - Account state management and balance operations
//! - `debt_book` - Outstanding debts between accounts, in creation order
//! - `transfer` - Transfer execution under the configured policy
//! - `settlement` - Automatic debt payment on deposit
//! - `session` - Tracking of the logged-in account

pub mod account_store;
pub mod debt_book;
pub mod session;
pub mod settlement;
pub mod transfer;

pub use account_store::AccountStore;
pub use debt_book::DebtBook;
pub use session::SessionContext;
pub use settlement::SettlementEngine;
pub use transfer::TransferEngine;
