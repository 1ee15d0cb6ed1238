//! ATM Ledger Library
//! # Overview
//!
//! This library provides an in-memory account ledger driven by line commands,
//! with session-scoped operations and automatic debt settlement on deposit.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Account, Command, DebtEntry, etc.)
//! - [`cli`] - CLI arguments parsing
//! - [`core`] - Business logic components:
//!   - [`core::account_store`] - Account state and balance operations
//!   - [`core::transfer`] - Transfer policy, full-only or partial with debt
//!   - [`core::settlement`] - Automatic debt payment when funds arrive
//!   - [`core::debt_book`] - Directed debts between accounts
//!   - [`core::session`] - Single-user login session
//! - [`io`] - Line command parsing and streaming input
//! - [`repl`] - Command loop tying the pieces together
//!
//! # Commands
//!
//! The ledger supports six commands:
//!
//! - **login**: Start a session, creating the account on first login
//! - **deposit**: Credit funds, then pay outstanding debts oldest first
//! - **withdraw**: Debit funds (requires sufficient balance)
//! - **transfer**: Move funds to another account under the active transfer mode
//! - **logout**: End the session
//! - **exit**: Stop reading commands
//!
//! # Transfer Modes
//!
//! - `partial`: moves whatever the balance covers and records the shortfall as debt
//! - `full-only`: rejects any transfer the balance does not cover entirely

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod repl;
pub mod types;

pub use crate::core::{AccountStore, DebtBook, SessionContext, SettlementEngine, TransferEngine};
pub use crate::repl::Repl;
pub use crate::types::{
    Account, AccountName, Command, DebtEntry, DebtPayment, LedgerError, SettlementReport,
    TransferMode, TransferOutcome,
};
