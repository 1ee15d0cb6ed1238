//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `account`: Account identifier and account state
//! - `command`: Parsed line commands
//! - `debt`: Debt entries and settlement reports
//! - `error`: Error types for the ledger
//! - `transfer`: Transfer modes and outcomes

pub mod account;
pub mod command;
pub mod debt;
pub mod error;
pub mod transfer;

pub use account::{Account, AccountName};
pub use command::Command;
pub use debt::{DebtEntry, DebtPayment, SettlementReport};
pub use error::LedgerError;
pub use transfer::{TransferMode, TransferOutcome};
