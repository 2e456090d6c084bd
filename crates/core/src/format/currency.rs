//! Locale-aware currency formatting.

use minibank_shared::types::{Currency, Locale};
use rust_decimal::prelude::*;

/// Digit grouping and symbol placement rules for one locale.
struct NumberFormat {
    group_sep: &'static str,
    decimal_sep: &'static str,
    symbol_first: bool,
}

impl NumberFormat {
    const fn of(locale: Locale) -> Self {
        match locale {
            Locale::EnUs => Self {
                group_sep: ",",
                decimal_sep: ".",
                symbol_first: true,
            },
            Locale::PtPt => Self {
                group_sep: " ",
                decimal_sep: ",",
                symbol_first: false,
            },
            Locale::DeDe => Self {
                group_sep: ".",
                decimal_sep: ",",
                symbol_first: false,
            },
        }
    }
}

const fn symbol(currency: Currency) -> &'static str {
    match currency {
        Currency::Eur => "\u{20ac}",
        Currency::Usd => "$",
        Currency::Gbp => "\u{a3}",
    }
}

/// Formats an amount for display in the owner's locale.
///
/// Rounds to two decimal places with Banker's Rounding
/// (`MidpointNearestEven`), groups the integer digits, and places the
/// currency symbol where the locale expects it:
/// `$1,234.56` / `1 234,56 €` / `1.234,56 €`.
#[must_use]
pub fn format_amount(amount: Decimal, currency: Currency, locale: Locale) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let digits = format!("{:.2}", rounded.abs());
    let (int_part, frac_part) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

    let format = NumberFormat::of(locale);
    let grouped = group_digits(int_part, format.group_sep);
    let sign = if negative { "-" } else { "" };
    let number = format!("{grouped}{}{frac_part}", format.decimal_sep);

    if format.symbol_first {
        format!("{sign}{}{number}", symbol(currency))
    } else {
        format!("{sign}{number} {}", symbol(currency))
    }
}

/// Inserts a group separator every three digits, right to left.
fn group_digits(digits: &str, separator: &str) -> String {
    let chars: Vec<char> = digits.chars().collect();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i) % 3 == 0 {
            out.push_str(separator);
        }
        out.push(*c);
    }
    out
}
