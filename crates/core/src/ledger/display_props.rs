//! Property tests for display ordering.

use chrono::{TimeZone, Utc};
use minibank_shared::types::{Currency, Locale};
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::display::{DisplayOrder, rows};
use crate::account::Account;

fn movement_strategy() -> impl Strategy<Value = Decimal> {
    (-1_000_000i64..1_000_000i64).prop_map(|n| Decimal::new(n, 2))
}

fn movements_strategy() -> impl Strategy<Value = Vec<Decimal>> {
    prop::collection::vec(movement_strategy(), 0..=30)
}

/// Account whose movement dates are the minute offsets of each movement,
/// so a row's date uniquely identifies its original position.
fn account_with(movements: Vec<Decimal>, with_dates: bool) -> Account {
    let dates = with_dates.then(|| {
        (0..movements.len())
            .map(|i| {
                Utc.with_ymd_and_hms(2020, 7, 1, 0, 0, 0).unwrap()
                    + chrono::Duration::minutes(i64::try_from(i).unwrap_or(0))
            })
            .collect()
    });
    Account::new(
        "Prop Owner",
        1111,
        movements,
        dates,
        Decimal::ONE,
        Currency::Eur,
        Locale::EnUs,
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Sorted rows are non-decreasing by amount.
    #[test]
    fn prop_sorted_rows_ascend(movements in movements_strategy()) {
        let account = account_with(movements, false);
        let sorted = rows(&account, DisplayOrder::AscendingByAmount);
        prop_assert!(sorted.windows(2).all(|w| w[0].amount <= w[1].amount));
    }

    /// Sorting is a permutation: the same amounts appear in both modes.
    #[test]
    fn prop_sorted_rows_are_a_permutation(movements in movements_strategy()) {
        let account = account_with(movements, false);
        let mut natural: Vec<_> = rows(&account, DisplayOrder::Natural)
            .iter()
            .map(|r| r.amount)
            .collect();
        let sorted: Vec<_> = rows(&account, DisplayOrder::AscendingByAmount)
            .iter()
            .map(|r| r.amount)
            .collect();
        natural.sort();
        prop_assert_eq!(natural, sorted);
    }

    /// The sort is stable: equal amounts keep their original relative
    /// order, observed through their unique timestamps.
    #[test]
    fn prop_sort_is_stable(movements in movements_strategy()) {
        let account = account_with(movements, true);
        let sorted = rows(&account, DisplayOrder::AscendingByAmount);
        prop_assert!(
            sorted
                .windows(2)
                .all(|w| w[0].amount < w[1].amount || w[0].date < w[1].date)
        );
    }

    /// Any number of renders in either mode leaves storage order intact.
    #[test]
    fn prop_rendering_never_mutates_storage(movements in movements_strategy()) {
        let account = account_with(movements, true);
        let before = account.movements.clone();

        let _ = rows(&account, DisplayOrder::AscendingByAmount);
        let _ = rows(&account, DisplayOrder::Natural);
        let _ = rows(&account, DisplayOrder::AscendingByAmount);

        prop_assert_eq!(account.movements, before);
    }

    /// Row indices are always the contiguous sequence 1..=n.
    #[test]
    fn prop_indices_are_contiguous(movements in movements_strategy()) {
        let account = account_with(movements, false);
        for order in [DisplayOrder::Natural, DisplayOrder::AscendingByAmount] {
            let produced = rows(&account, order);
            let indices: Vec<_> = produced.iter().map(|r| r.index).collect();
            let expected: Vec<_> = (1..=produced.len()).collect();
            prop_assert_eq!(indices, expected);
        }
    }
}
