//! Property tests for the ledger aggregation functions.

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::summary::{balance, expense, income, interest};

/// Strategy for a signed movement amount with cent precision.
fn movement_strategy() -> impl Strategy<Value = Decimal> {
    (-10_000_000i64..10_000_000i64).prop_map(|n| Decimal::new(n, 2))
}

/// Strategy for a movement list of session-plausible length.
fn movements_strategy() -> impl Strategy<Value = Vec<Decimal>> {
    prop::collection::vec(movement_strategy(), 0..=50)
}

/// Strategy for an interest rate between 0% and 10%.
fn rate_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..=1000i64).prop_map(|n| Decimal::new(n, 2))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Balance always decomposes into income minus expense magnitude.
    #[test]
    fn prop_balance_is_income_minus_expense(movements in movements_strategy()) {
        prop_assert_eq!(
            balance(&movements),
            income(&movements) - expense(&movements)
        );
    }

    /// Income and expense magnitude are never negative.
    #[test]
    fn prop_income_and_expense_are_non_negative(movements in movements_strategy()) {
        prop_assert!(income(&movements) >= Decimal::ZERO);
        prop_assert!(expense(&movements) >= Decimal::ZERO);
    }

    /// Filtering sub-unit interest can only lower the total: the interest
    /// figure never exceeds income * rate / 100.
    #[test]
    fn prop_interest_bounded_by_unfiltered_interest(
        movements in movements_strategy(),
        rate in rate_strategy(),
    ) {
        let total = interest(&movements, rate);
        prop_assert!(total >= Decimal::ZERO);
        prop_assert!(total <= income(&movements) * rate / Decimal::ONE_HUNDRED);
    }

    /// Appending a movement shifts the balance by exactly that amount.
    #[test]
    fn prop_append_shifts_balance(
        movements in movements_strategy(),
        appended in movement_strategy(),
    ) {
        let before = balance(&movements);
        let mut extended = movements;
        extended.push(appended);
        prop_assert_eq!(balance(&extended), before + appended);
    }

    /// Aggregation is a pure recomputation: calling twice agrees.
    #[test]
    fn prop_aggregation_is_deterministic(
        movements in movements_strategy(),
        rate in rate_strategy(),
    ) {
        prop_assert_eq!(balance(&movements), balance(&movements));
        prop_assert_eq!(interest(&movements, rate), interest(&movements, rate));
    }
}
