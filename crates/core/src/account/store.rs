//! The in-memory account store.
//!
//! An ordered collection of accounts holding all mutable financial state
//! for the session. There is no persistence: accounts are constructed once
//! at startup and live for the lifetime of the process. The store is owned
//! by whoever drives the demo and passed by reference into the action
//! layer; there are no process-wide globals and no locking, so all access
//! must stay on one logical thread.

use minibank_shared::types::AccountId;

use super::types::Account;
use super::username::derive_usernames;

/// Ordered, in-memory collection of accounts.
#[derive(Debug, Clone, Default)]
pub struct AccountStore {
    accounts: Vec<Account>,
}

impl AccountStore {
    /// Builds a store and runs the username derivation pass.
    ///
    /// Usernames are (re)computed here so every account is ready for login
    /// lookups regardless of how the records were constructed.
    #[must_use]
    pub fn new(mut accounts: Vec<Account>) -> Self {
        derive_usernames(&mut accounts);
        Self { accounts }
    }

    /// Number of accounts currently in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    /// Returns true if the store holds no accounts.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// Iterates accounts in store order.
    pub fn iter(&self) -> impl Iterator<Item = &Account> {
        self.accounts.iter()
    }

    /// Finds an account by username. First match wins on collisions.
    #[must_use]
    pub fn find_by_username(&self, username: &str) -> Option<&Account> {
        self.accounts.iter().find(|a| a.username == username)
    }

    /// Looks up an account by ID.
    #[must_use]
    pub fn get(&self, id: AccountId) -> Option<&Account> {
        self.accounts.iter().find(|a| a.id == id)
    }

    /// Looks up an account by ID for mutation.
    pub fn get_mut(&mut self, id: AccountId) -> Option<&mut Account> {
        self.accounts.iter_mut().find(|a| a.id == id)
    }

    /// Removes an account permanently. Returns the removed record.
    pub fn remove(&mut self, id: AccountId) -> Option<Account> {
        let index = self.accounts.iter().position(|a| a.id == id)?;
        Some(self.accounts.remove(index))
    }
}
