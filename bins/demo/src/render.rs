//! Text dashboard rendering.
//!
//! Consumes the core crate's aggregation and formatting output and prints
//! the same surface the original demo showed: a movements table, the
//! balance with the current date, the in/out/interest summary, and the
//! logout countdown.

use chrono::{DateTime, Utc};
use minibank_core::account::Account;
use minibank_core::format::{
    format_amount, format_countdown, format_current_date, format_movement_date,
};
use minibank_core::ledger::display::{self, DisplayOrder};
use minibank_core::ledger::summary::AccountSummary;

/// Prints the welcome banner for a fresh login.
pub fn welcome(account: &Account) {
    println!("Welcome back, {}!", account.first_name());
}

/// Prints the logged-out state.
pub fn logged_out() {
    println!("Log in to get started.");
}

/// Prints the full dashboard for the logged-in account.
pub fn dashboard(account: &Account, order: DisplayOrder, remaining_secs: u32, now: DateTime<Utc>) {
    let summary = AccountSummary::of(account);
    let rows = display::rows(account, order);

    println!();
    println!(
        "Current balance    {}",
        format_amount(summary.balance, account.currency, account.locale)
    );
    println!("As of {}", format_current_date(now, account.locale));
    println!();

    // Most recent (or largest, when sorted) movement first.
    for row in rows.iter().rev() {
        let kind = if row.is_deposit() { "deposit" } else { "withdrawal" };
        let date = row
            .date
            .map(|d| format_movement_date(d, now, account.locale))
            .unwrap_or_default();
        println!(
            "{:>3} {kind:<10} {date:<12} {:>16}",
            row.index,
            format_amount(row.amount, account.currency, account.locale)
        );
    }

    println!();
    println!(
        "In: {}   Out: {}   Interest: {}",
        format_amount(summary.income, account.currency, account.locale),
        format_amount(summary.expense, account.currency, account.locale),
        format_amount(summary.interest, account.currency, account.locale),
    );
    println!("Logout in {}", format_countdown(remaining_secs));
}

/// Prints the command reference.
pub fn help() {
    println!("Commands:");
    println!("  login <username> <pin>      authenticate");
    println!("  transfer <username> <amt>   send money to another account");
    println!("  loan <amount>               request a loan");
    println!("  close <username> <pin>      close the logged-in account");
    println!("  sort                        toggle sorted display");
    println!("  logout                      end the session");
    println!("  help                        show this message");
    println!("  quit                        exit the demo");
}
