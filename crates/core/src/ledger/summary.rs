//! Pure aggregation over an account's movement list.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::account::Account;

/// Sum of all movements to date.
///
/// The balance is a recomputed projection of the movement list, never an
/// independently settable figure.
#[must_use]
pub fn balance(movements: &[Decimal]) -> Decimal {
    movements.iter().copied().sum()
}

/// Sum of all deposits (movements > 0).
#[must_use]
pub fn income(movements: &[Decimal]) -> Decimal {
    movements.iter().copied().filter(|m| m.is_sign_positive() && !m.is_zero()).sum()
}

/// Magnitude of all withdrawals (movements < 0), reported as a positive
/// number for display.
#[must_use]
pub fn expense(movements: &[Decimal]) -> Decimal {
    let out: Decimal = movements.iter().copied().filter(|m| m.is_sign_negative()).sum();
    out.abs()
}

/// Qualifying interest across all deposits.
///
/// Each deposit earns `deposit * rate / 100`; only per-deposit amounts of
/// at least 1 count toward the total. Deposits below the threshold
/// contribute nothing at all, which is an explicit business rule of the
/// bank, not a rounding artifact. No intermediate rounding is applied.
#[must_use]
pub fn interest(movements: &[Decimal], rate_percent: Decimal) -> Decimal {
    movements
        .iter()
        .copied()
        .filter(|m| m.is_sign_positive() && !m.is_zero())
        .map(|deposit| deposit * rate_percent / Decimal::ONE_HUNDRED)
        .filter(|earned| *earned >= Decimal::ONE)
        .sum()
}

/// The four derived figures shown for a logged-in account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountSummary {
    /// Sum of all movements.
    pub balance: Decimal,
    /// Sum of deposits.
    pub income: Decimal,
    /// Magnitude of withdrawals.
    pub expense: Decimal,
    /// Qualifying interest earned on deposits.
    pub interest: Decimal,
}

impl AccountSummary {
    /// Recomputes every figure from the account's movement list.
    #[must_use]
    pub fn of(account: &Account) -> Self {
        Self {
            balance: balance(&account.movements),
            income: income(&account.movements),
            expense: expense(&account.movements),
            interest: interest(&account.movements, account.interest_rate),
        }
    }
}
