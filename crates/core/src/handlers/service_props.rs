//! Property tests for the action service.

use chrono::Utc;
use minibank_shared::types::{Currency, Locale};
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::service::BankService;
use crate::account::{Account, AccountStore};
use crate::ledger::summary;
use crate::session::SessionController;

fn amount_strategy() -> impl Strategy<Value = Decimal> {
    (-10_000_00i64..10_000_00i64).prop_map(|n| Decimal::new(n, 2))
}

fn service() -> BankService {
    let store = AccountStore::new(vec![
        Account::new(
            "Alice Archer",
            1111,
            vec![dec!(1000), dec!(-250), dec!(430)],
            Some(vec![Utc::now(), Utc::now(), Utc::now()]),
            dec!(1.2),
            Currency::Eur,
            Locale::PtPt,
        ),
        Account::new(
            "Bob Builder",
            2222,
            vec![dec!(500)],
            None,
            dec!(1.5),
            Currency::Eur,
            Locale::PtPt,
        ),
    ]);
    BankService::new(store, SessionController::new(300))
}

fn total_balance(service: &BankService) -> Decimal {
    service
        .store()
        .iter()
        .map(|a| summary::balance(&a.movements))
        .sum()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Transfers move money around but never create or destroy it,
    /// whether they succeed or get rejected.
    #[test]
    fn prop_transfer_conserves_total_balance(amounts in prop::collection::vec(amount_strategy(), 1..20)) {
        let mut service = service();
        service.login("aa", 1111).unwrap();
        let total_before = total_balance(&service);

        for amount in amounts {
            let _ = service.transfer("bb", amount, Utc::now());
        }

        prop_assert_eq!(total_balance(&service), total_before);
    }

    /// A rejected transfer leaves every movement list untouched.
    #[test]
    fn prop_rejected_transfer_mutates_nothing(amount in amount_strategy()) {
        let mut service = service();
        service.login("bb", 2222).unwrap();
        let before: Vec<Vec<Decimal>> =
            service.store().iter().map(|a| a.movements.clone()).collect();

        // Balance is 500: anything non-positive or above 500 is rejected.
        prop_assume!(amount <= Decimal::ZERO || amount > dec!(500));
        prop_assert!(service.transfer("aa", amount, Utc::now()).is_err());

        let after: Vec<Vec<Decimal>> =
            service.store().iter().map(|a| a.movements.clone()).collect();
        prop_assert_eq!(after, before);
    }

    /// A granted loan raises the total balance by exactly the floored
    /// amount; a rejected one raises it by nothing.
    #[test]
    fn prop_loan_adds_exactly_the_granted_amount(amount in amount_strategy()) {
        let mut service = service();
        service.login("aa", 1111).unwrap();
        let total_before = total_balance(&service);

        match service.request_loan(amount, Utc::now()) {
            Ok(granted) => {
                prop_assert_eq!(granted, amount.floor());
                prop_assert_eq!(total_balance(&service), total_before + granted);
            }
            Err(_) => prop_assert_eq!(total_balance(&service), total_before),
        }
    }

    /// Date-tracking accounts keep their parallel lists equal length
    /// through any mix of transfers and loans.
    #[test]
    fn prop_parallel_lists_stay_parallel(
        amounts in prop::collection::vec(amount_strategy(), 1..20),
    ) {
        let mut service = service();
        service.login("aa", 1111).unwrap();

        for (i, amount) in amounts.into_iter().enumerate() {
            if i % 2 == 0 {
                let _ = service.transfer("bb", amount, Utc::now());
            } else {
                let _ = service.request_loan(amount, Utc::now());
            }
        }

        for account in service.store().iter() {
            if let Some(dates) = &account.movement_dates {
                prop_assert_eq!(dates.len(), account.movements.len());
            }
        }
    }
}
