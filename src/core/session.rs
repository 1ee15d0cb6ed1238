//! Session tracking
//!
//! This module provides the SessionContext that tracks which account, if
//! any, is currently logged in. At most one session exists at a time; a
//! second login is rejected until the current user logs out.
//!
//! The context is a plain value owned by the command loop. Nothing here is
//! global, so two loops in the same process would each carry their own
//! session.

use crate::types::{AccountName, LedgerError};

/// Tracks the currently logged-in account
#[derive(Debug, Clone, Default)]
pub struct SessionContext {
    /// The logged-in account, if any
    current: Option<AccountName>,
}

impl SessionContext {
    /// Create a new SessionContext with nobody logged in
    pub fn new() -> Self {
        SessionContext { current: None }
    }

    /// Start a session for the given account
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::AlreadyLoggedIn`] if a session is active; the
    /// existing session is left untouched.
    pub fn login(&mut self, name: AccountName) -> Result<(), LedgerError> {
        match &self.current {
            Some(current) => Err(LedgerError::already_logged_in(current)),
            None => {
                self.current = Some(name);
                Ok(())
            }
        }
    }

    /// End the current session
    ///
    /// # Returns
    ///
    /// The name of the account that was logged in.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::NoSession`] if nobody is logged in.
    pub fn logout(&mut self) -> Result<AccountName, LedgerError> {
        self.current.take().ok_or(LedgerError::NoSession)
    }

    /// The currently logged-in account, if any
    pub fn current_user(&self) -> Option<&AccountName> {
        self.current.as_ref()
    }

    /// The currently logged-in account, or an error if there is none
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::NoSession`] if nobody is logged in.
    pub fn require_user(&self) -> Result<&AccountName, LedgerError> {
        self.current.as_ref().ok_or(LedgerError::NoSession)
    }

    /// Whether a session is active
    pub fn is_logged_in(&self) -> bool {
        self.current.is_some()
    }
}
