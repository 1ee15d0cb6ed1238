//! Interactive command loop
//!
//! This module provides the Repl that owns the whole ledger state and
//! drives it from a stream of commands. It orchestrates the flow between
//! command reading, the core engines, and output, delegating:
//! - Command parsing to `CommandReader` (iterator interface)
//! - Balance mutations to `AccountStore`
//! - Transfer policy to `TransferEngine`
//! - Debt payment to `SettlementEngine`
//! - User-facing wording to the `display` module
//!
//! # Output Contract
//!
//! Every command produces one output block terminated by a blank line.
//! Business failures print as `Error: <message>` blocks; processing then
//! continues with the next command. Only I/O failures on the output stream
//! abort the loop.
//!
//! # Command Reference
//!
//! - `login <name>` - start a session, creating the account if needed
//! - `deposit <amount>` - add funds, then pay outstanding debts
//! - `withdraw <amount>` - remove funds
//! - `transfer <target> <amount>` - move funds under the transfer policy
//! - `logout` - end the session
//! - `exit` - stop reading commands

pub mod display;

use crate::core::{AccountStore, DebtBook, SessionContext, SettlementEngine, TransferEngine};
use crate::io::line_reader::CommandReader;
use crate::types::{AccountName, Command, LedgerError, TransferMode, TransferOutcome};
use rust_decimal::Decimal;
use std::io::{self, BufRead, Write};

/// Command loop over the in-memory ledger
///
/// Owns every piece of state the ledger has: accounts, debts, the session,
/// and the engines. State lives exactly as long as the Repl value; nothing
/// is persisted.
pub struct Repl {
    accounts: AccountStore,
    debts: DebtBook,
    session: SessionContext,
    transfers: TransferEngine,
    settlement: SettlementEngine,
}

impl Repl {
    /// Create a new Repl with empty state and the given transfer mode
    pub fn new(mode: TransferMode) -> Self {
        Repl {
            accounts: AccountStore::new(),
            debts: DebtBook::new(),
            session: SessionContext::new(),
            transfers: TransferEngine::new(mode),
            settlement: SettlementEngine::new(),
        }
    }

    /// Read and execute commands until `exit` or end of input
    ///
    /// Parse errors and business errors are printed as error blocks and the
    /// loop continues; they never abort a run.
    ///
    /// # Arguments
    ///
    /// * `input` - Buffered command source (stdin or a script file)
    /// * `output` - Writer receiving every output block
    ///
    /// # Errors
    ///
    /// Returns an error only when writing to `output` fails.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, output: &mut W) -> io::Result<()> {
        for result in CommandReader::new(input) {
            match result {
                Ok(Command::Exit) => break,
                Ok(command) => self.execute(command, output)?,
                Err(message) => {
                    writeln!(output, "Error: {message}")?;
                    writeln!(output)?;
                }
            }
        }
        Ok(())
    }

    /// Execute one command and write its output block
    fn execute<W: Write>(&mut self, command: Command, output: &mut W) -> io::Result<()> {
        match self.dispatch(command) {
            Ok(lines) => {
                for line in lines {
                    writeln!(output, "{line}")?;
                }
            }
            Err(error) => writeln!(output, "Error: {error}")?,
        }
        // Every block ends with a blank line
        writeln!(output)
    }

    /// Route a command to its handler, collecting the lines to print
    fn dispatch(&mut self, command: Command) -> Result<Vec<String>, LedgerError> {
        match command {
            Command::Login { name } => self.login(&name),
            Command::Deposit { amount } => self.deposit(amount),
            Command::Withdraw { amount } => self.withdraw(amount),
            Command::Transfer { target, amount } => self.transfer(&target, amount),
            Command::Logout => self.logout(),
            // run() stops before dispatching exit; nothing to print
            Command::Exit => Ok(Vec::new()),
        }
    }

    fn login(&mut self, raw_name: &str) -> Result<Vec<String>, LedgerError> {
        // An active session blocks login before the name is even validated
        if let Some(current) = self.session.current_user() {
            return Err(LedgerError::already_logged_in(current));
        }

        let name = AccountName::validated(raw_name)?;
        self.session.login(name.clone())?;
        self.accounts.get_or_create(&name);

        let mut lines = vec![display::greeting_line(&name)];
        lines.extend(self.status_lines(&name));
        Ok(lines)
    }

    fn deposit(&mut self, amount: Decimal) -> Result<Vec<String>, LedgerError> {
        let user = self.session.require_user()?.clone();
        validate_amount(amount)?;

        self.accounts.deposit(&user, amount)?;
        let report =
            self.settlement
                .settle_on_deposit(&mut self.accounts, &mut self.debts, &user, amount)?;

        let mut lines: Vec<String> = report.payments.iter().map(display::payment_line).collect();
        lines.extend(self.status_lines(&user));
        Ok(lines)
    }

    fn withdraw(&mut self, amount: Decimal) -> Result<Vec<String>, LedgerError> {
        let user = self.session.require_user()?.clone();
        validate_amount(amount)?;

        self.accounts.withdraw(&user, amount)?;
        Ok(self.status_lines(&user))
    }

    fn transfer(&mut self, raw_target: &str, amount: Decimal) -> Result<Vec<String>, LedgerError> {
        let source = self.session.require_user()?.clone();
        validate_amount(amount)?;
        let target = AccountName::new(raw_target);

        let outcome =
            self.transfers
                .transfer(&mut self.accounts, &mut self.debts, &source, &target, amount)?;

        let mut lines = Vec::new();
        match outcome {
            TransferOutcome::Full { moved } | TransferOutcome::Partial { moved, .. } => {
                lines.push(display::transferred_line(moved, &target));
            }
            // Nothing moved; the status lines carry the news
            TransferOutcome::DebtOnly { .. } => {}
            TransferOutcome::InsufficientForFull {
                required,
                available,
            } => {
                return Ok(vec![display::insufficient_for_full_line(
                    required, available,
                )]);
            }
        }
        lines.extend(self.status_lines(&source));
        Ok(lines)
    }

    fn logout(&mut self) -> Result<Vec<String>, LedgerError> {
        let name = self.session.logout()?;
        Ok(vec![display::goodbye_line(&name)])
    }

    /// Balance line plus one owed line per outstanding debt
    fn status_lines(&self, user: &AccountName) -> Vec<String> {
        let mut lines = vec![display::balance_line(self.accounts.balance_of(user))];
        lines.extend(display::owed_lines(self.debts.debts_of(user)));
        lines
    }

    /// Read access to the account store, mainly for inspection in tests
    pub fn accounts(&self) -> &AccountStore {
        &self.accounts
    }

    /// Read access to the debt book, mainly for inspection in tests
    pub fn debts(&self) -> &DebtBook {
        &self.debts
    }

    /// Read access to the session state
    pub fn session(&self) -> &SessionContext {
        &self.session
    }
}

impl Default for Repl {
    fn default() -> Self {
        Self::new(TransferMode::default())
    }
}

/// Amount sign check shared by deposit, withdraw, and transfer
fn validate_amount(amount: Decimal) -> Result<(), LedgerError> {
    if amount <= Decimal::ZERO {
        Err(LedgerError::invalid_amount(amount))
    } else {
        Ok(())
    }
}
