//! The action service: login, transfer, request-loan, close-account.
//!
//! Owns the account store and the session controller, and is the only
//! place that mutates either. Every method validates first and mutates
//! only on success; a [`Rejection`] means nothing changed. The clock is
//! injected as a `now` argument so the service stays pure and testable.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::account::{Account, AccountStore};
use crate::ledger::summary;
use crate::session::{SessionController, Tick};

use super::error::Rejection;

/// A loan qualifies when some movement covers this share of the amount.
const LOAN_BACKING_RATIO: Decimal = Decimal::from_parts(1, 0, 0, false, 1); // 0.1

/// Drives the four user actions against the store and session.
#[derive(Debug)]
pub struct BankService {
    store: AccountStore,
    session: SessionController,
}

impl BankService {
    /// Creates a service around an owned store and session controller.
    #[must_use]
    pub fn new(store: AccountStore, session: SessionController) -> Self {
        Self { store, session }
    }

    /// Read access to the store.
    #[must_use]
    pub fn store(&self) -> &AccountStore {
        &self.store
    }

    /// Read access to the session controller.
    #[must_use]
    pub fn session(&self) -> &SessionController {
        &self.session
    }

    /// The currently authenticated account, if any.
    #[must_use]
    pub fn current_account(&self) -> Option<&Account> {
        self.store.get(self.session.current_account()?)
    }

    /// Authenticates an account by username and PIN.
    ///
    /// Succeeds only when the username lookup succeeds and the supplied
    /// PIN matches exactly. Logging in while already logged in is the
    /// credential re-check self-transition: it switches the session to the
    /// matched account and resets the countdown.
    pub fn login(&mut self, username: &str, pin: u32) -> Result<&Account, Rejection> {
        let account = self
            .store
            .find_by_username(username)
            .ok_or(Rejection::UnknownUsername)?;
        if account.pin != pin {
            return Err(Rejection::WrongPin);
        }

        let id = account.id;
        self.session.begin(id);
        self.store.get(id).ok_or(Rejection::UnknownUsername)
    }

    /// Transfers `amount` from the logged-in account to `to`.
    ///
    /// Requires an existing destination different from the sender, a
    /// strictly positive amount, and enough balance to cover it. On
    /// success the sender gets `-amount` appended and the receiver
    /// `+amount` (with `now` timestamps where dates are tracked), and the
    /// countdown resets.
    pub fn transfer(
        &mut self,
        to: &str,
        amount: Decimal,
        now: DateTime<Utc>,
    ) -> Result<(), Rejection> {
        let sender_id = self.session.current_account().ok_or(Rejection::NotLoggedIn)?;
        let receiver_id = self
            .store
            .find_by_username(to)
            .map(|a| a.id)
            .ok_or(Rejection::UnknownRecipient)?;

        if receiver_id == sender_id {
            return Err(Rejection::SelfTransfer);
        }
        if amount <= Decimal::ZERO {
            return Err(Rejection::NonPositiveAmount);
        }

        let sender = self.store.get(sender_id).ok_or(Rejection::NotLoggedIn)?;
        if amount > summary::balance(&sender.movements) {
            return Err(Rejection::InsufficientFunds);
        }

        if let Some(sender) = self.store.get_mut(sender_id) {
            sender.record_movement(-amount, now);
        }
        if let Some(receiver) = self.store.get_mut(receiver_id) {
            receiver.record_movement(amount, now);
        }
        self.session.extend();
        Ok(())
    }

    /// Requests a loan for the logged-in account.
    ///
    /// The requested amount is floored to a whole unit first. The bank
    /// grants it when the floored amount is positive and at least one
    /// existing movement covers 10% of it: any single large-enough
    /// historical deposit unlocks a loan of that size, however large. On
    /// success the floored amount is appended as a deposit and the
    /// countdown resets; the granted amount is returned.
    pub fn request_loan(
        &mut self,
        amount: Decimal,
        now: DateTime<Utc>,
    ) -> Result<Decimal, Rejection> {
        let account_id = self.session.current_account().ok_or(Rejection::NotLoggedIn)?;
        let granted = amount.floor();
        if granted <= Decimal::ZERO {
            return Err(Rejection::NonPositiveAmount);
        }

        let account = self.store.get(account_id).ok_or(Rejection::NotLoggedIn)?;
        let backing = granted * LOAN_BACKING_RATIO;
        if !account.movements.iter().any(|m| *m >= backing) {
            return Err(Rejection::NoQualifyingDeposit);
        }

        if let Some(account) = self.store.get_mut(account_id) {
            account.record_movement(granted, now);
        }
        self.session.extend();
        Ok(granted)
    }

    /// Closes the logged-in account.
    ///
    /// The entered username and PIN must match the currently authenticated
    /// account exactly; matching some other account in the store is not
    /// enough. On success the account is removed permanently and the
    /// session ends. The removed record is returned.
    pub fn close_account(&mut self, username: &str, pin: u32) -> Result<Account, Rejection> {
        let current_id = self.session.current_account().ok_or(Rejection::NotLoggedIn)?;
        let current = self.store.get(current_id).ok_or(Rejection::NotLoggedIn)?;

        if current.username != username || current.pin != pin {
            return Err(Rejection::CloseCredentialsMismatch);
        }

        let removed = self
            .store
            .remove(current_id)
            .ok_or(Rejection::CloseCredentialsMismatch)?;
        self.session.end();
        Ok(removed)
    }

    /// Forwards one countdown tick to the session controller.
    pub fn tick(&mut self) -> Tick {
        self.session.tick()
    }

    /// Logs out without closing the account.
    pub fn logout(&mut self) {
        self.session.end();
    }
}
