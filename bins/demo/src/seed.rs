//! Demo account seed data.
//!
//! The four classroom accounts, constructed once at startup. Two track
//! movement dates and two never did; the renderer has to cope with both
//! shapes.

use chrono::{DateTime, Utc};
use minibank_core::account::Account;
use minibank_shared::types::{Currency, Locale};
use rust_decimal::Decimal;

/// Builds the four demo accounts.
pub fn demo_accounts() -> Vec<Account> {
    vec![
        Account::new(
            "Jonas Schmedtmann",
            1111,
            decimals(&["200", "455.23", "-306.5", "25000", "-642.21", "-133.9", "79.97", "1300"]),
            Some(dates(&[
                "2019-11-18T21:31:17.178Z",
                "2019-12-23T07:42:02.383Z",
                "2020-01-28T09:15:04.904Z",
                "2020-04-01T10:17:24.185Z",
                "2020-05-08T14:11:59.604Z",
                "2020-05-27T17:01:17.194Z",
                "2020-07-11T23:36:17.929Z",
                "2020-07-12T10:51:36.790Z",
            ])),
            decimal("1.2"),
            Currency::Eur,
            Locale::PtPt,
        ),
        Account::new(
            "Jessica Davis",
            2222,
            decimals(&["5000", "3400", "-150", "-790", "-3210", "-1000", "8500", "-30"]),
            Some(dates(&[
                "2019-11-01T13:15:33.035Z",
                "2019-11-30T09:48:16.867Z",
                "2019-12-25T06:04:23.907Z",
                "2020-01-25T14:18:46.235Z",
                "2020-02-05T16:33:06.386Z",
                "2020-04-10T14:43:26.374Z",
                "2020-06-25T18:49:59.371Z",
                "2020-07-26T12:01:20.894Z",
            ])),
            decimal("1.5"),
            Currency::Usd,
            Locale::EnUs,
        ),
        Account::new(
            "Steven Thomas Williams",
            3333,
            decimals(&["200", "-200", "340", "-300", "-20", "50", "400", "-460"]),
            None,
            decimal("0.7"),
            Currency::Eur,
            Locale::PtPt,
        ),
        Account::new(
            "Sarah Smith",
            4444,
            decimals(&["430", "1000", "700", "50", "90"]),
            None,
            decimal("1"),
            Currency::Eur,
            Locale::PtPt,
        ),
    ]
}

fn decimal(s: &str) -> Decimal {
    s.parse().expect("static seed amount is valid")
}

fn decimals(values: &[&str]) -> Vec<Decimal> {
    values.iter().map(|s| decimal(s)).collect()
}

fn dates(values: &[&str]) -> Vec<DateTime<Utc>> {
    values
        .iter()
        .map(|s| {
            DateTime::parse_from_rfc3339(s)
                .expect("static seed date is valid RFC 3339")
                .with_timezone(&Utc)
        })
        .collect()
}
