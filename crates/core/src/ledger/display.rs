//! Display ordering for movement lists.
//!
//! Produces the row sequence the presentation layer renders. Rendering
//! always walks the produced sequence in reverse, so natural order shows
//! the most recent movement first and ascending order shows the largest
//! amount first. Sorting operates on a copy; the stored movement list is
//! never touched.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::account::Account;

/// Ordering mode for the rendered movement list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DisplayOrder {
    /// Insertion order, newest last.
    #[default]
    Natural,
    /// Stable sort by amount, ascending; ties keep insertion order.
    AscendingByAmount,
}

impl DisplayOrder {
    /// The other mode; used by the sort toggle.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Natural => Self::AscendingByAmount,
            Self::AscendingByAmount => Self::Natural,
        }
    }
}

/// One renderable movement row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovementRow {
    /// 1-based position in the produced sequence.
    pub index: usize,
    /// Signed movement amount.
    pub amount: Decimal,
    /// Timestamp of the movement, when the account tracks dates.
    pub date: Option<DateTime<Utc>>,
}

impl MovementRow {
    /// Returns true if this row is a deposit.
    #[must_use]
    pub fn is_deposit(&self) -> bool {
        self.amount.is_sign_positive() && !self.amount.is_zero()
    }
}

/// Builds the row sequence for an account in the requested order.
///
/// Each amount stays paired with its own timestamp through the sort, and
/// accounts without a date list simply get `None` date cells.
#[must_use]
pub fn rows(account: &Account, order: DisplayOrder) -> Vec<MovementRow> {
    let mut rows: Vec<MovementRow> = account
        .movements
        .iter()
        .enumerate()
        .map(|(i, &amount)| MovementRow {
            index: i + 1,
            amount,
            date: account.movement_dates.as_ref().and_then(|d| d.get(i).copied()),
        })
        .collect();

    if order == DisplayOrder::AscendingByAmount {
        rows.sort_by(|a, b| a.amount.cmp(&b.amount));
        for (i, row) in rows.iter_mut().enumerate() {
            row.index = i + 1;
        }
    }

    rows
}
