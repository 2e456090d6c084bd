//! Account domain types.

use chrono::{DateTime, Utc};
use minibank_shared::types::{AccountId, Currency, Locale};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A bank account held in the in-memory store.
///
/// Movements are signed amounts: positive is a deposit, negative a
/// withdrawal. When `movement_dates` is present it is a parallel list with
/// one timestamp per movement; some accounts never tracked dates, and the
/// presentation layer must tolerate that by skipping the date cell.
///
/// The balance is always derived from `movements` and is never stored on
/// the record, so it cannot drift from the movement list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    /// Unique identifier.
    pub id: AccountId,
    /// Full owner name, e.g. "Jonas Schmedtmann".
    pub owner: String,
    /// Login handle derived from the owner's initials.
    ///
    /// Empty until the store has run the derivation pass.
    pub username: String,
    /// Numeric login secret. Plain equality check only; there is
    /// deliberately no real security model here.
    pub pin: u32,
    /// Signed movement amounts, oldest first, append-only.
    pub movements: Vec<Decimal>,
    /// Timestamps parallel to `movements`, when the account tracks them.
    pub movement_dates: Option<Vec<DateTime<Utc>>>,
    /// Yearly interest rate in percent.
    pub interest_rate: Decimal,
    /// Currency all movements are denominated in.
    pub currency: Currency,
    /// Locale used to render amounts and dates for this owner.
    pub locale: Locale,
}

impl Account {
    /// Creates an account with a fresh ID and an empty username.
    ///
    /// The username is filled in by the store's derivation pass before any
    /// login lookup happens.
    #[must_use]
    pub fn new(
        owner: impl Into<String>,
        pin: u32,
        movements: Vec<Decimal>,
        movement_dates: Option<Vec<DateTime<Utc>>>,
        interest_rate: Decimal,
        currency: Currency,
        locale: Locale,
    ) -> Self {
        Self {
            id: AccountId::new(),
            owner: owner.into(),
            username: String::new(),
            pin,
            movements,
            movement_dates,
            interest_rate,
            currency,
            locale,
        }
    }

    /// Returns true if this account keeps a timestamp per movement.
    #[must_use]
    pub fn tracks_dates(&self) -> bool {
        self.movement_dates.is_some()
    }

    /// Appends a movement, and its timestamp when dates are tracked.
    ///
    /// Keeps the parallel-list invariant: both lists grow together or the
    /// date list stays absent.
    pub fn record_movement(&mut self, amount: Decimal, at: DateTime<Utc>) {
        self.movements.push(amount);
        if let Some(dates) = &mut self.movement_dates {
            dates.push(at);
        }
        debug_assert!(
            self.movement_dates
                .as_ref()
                .is_none_or(|d| d.len() == self.movements.len())
        );
    }

    /// The owner's first name, for the welcome banner.
    #[must_use]
    pub fn first_name(&self) -> &str {
        self.owner.split_whitespace().next().unwrap_or(&self.owner)
    }
}
