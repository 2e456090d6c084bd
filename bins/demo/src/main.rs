//! Minibank terminal demo.
//!
//! Single-threaded, event-driven front end for the core crate: one
//! `tokio::select!` loop multiplexes stdin commands and the one-second
//! countdown tick, so every mutation happens synchronously inside a
//! command handler and the tick never overlaps with one. Mutating actions
//! cancel-and-reschedule the tick alongside the session countdown reset.

mod command;
mod render;
mod seed;

use std::time::Duration;

use anyhow::Context;
use chrono::Utc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::time::Interval;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use command::{Command, ParseError};
use minibank_core::account::AccountStore;
use minibank_core::handlers::BankService;
use minibank_core::ledger::display::DisplayOrder;
use minibank_core::session::{SessionController, Tick};
use minibank_shared::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "minibank=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::load().context("failed to load configuration")?;

    let store = AccountStore::new(seed::demo_accounts());
    info!(accounts = store.len(), "seeded demo accounts");

    let mut bank = BankService::new(store, SessionController::new(config.session.timeout_secs));
    let mut order = DisplayOrder::Natural;

    render::logged_out();
    render::help();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut ticker = tokio::time::interval(Duration::from_millis(config.session.tick_interval_ms));
    ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                match Command::parse(&line) {
                    Ok(Command::Quit) => break,
                    Ok(command) => handle(&mut bank, &mut order, &mut ticker, command),
                    Err(ParseError::Empty) => {}
                    Err(error) => {
                        // Invalid input is a silent no-op: nothing changes
                        // and nothing is surfaced beyond a debug log.
                        debug!(?error, "ignoring input line");
                    }
                }
            }
            _ = ticker.tick() => {
                match bank.tick() {
                    Tick::Expired => {
                        println!();
                        render::logged_out();
                    }
                    Tick::Running(remaining) if remaining <= 10 => {
                        println!("Logging out in {remaining}s...");
                    }
                    Tick::Running(_) | Tick::Idle => {}
                }
            }
        }
    }

    Ok(())
}

/// Dispatches one parsed command against the bank.
///
/// Rejections follow the demo's uniform policy: the action is dropped,
/// nothing mutates, and the only trace is a debug log.
fn handle(bank: &mut BankService, order: &mut DisplayOrder, ticker: &mut Interval, command: Command) {
    let now = Utc::now();
    match command {
        Command::Login { username, pin } => match bank.login(&username, pin) {
            Ok(account) => {
                render::welcome(account);
                ticker.reset();
                redraw(bank, *order);
            }
            Err(rejection) => debug!(%rejection, "login ignored"),
        },
        Command::Transfer { to, amount } => match bank.transfer(&to, amount, now) {
            Ok(()) => {
                ticker.reset();
                redraw(bank, *order);
            }
            Err(rejection) => debug!(%rejection, "transfer ignored"),
        },
        Command::Loan { amount } => match bank.request_loan(amount, now) {
            Ok(granted) => {
                info!(%granted, "loan approved");
                ticker.reset();
                redraw(bank, *order);
            }
            Err(rejection) => debug!(%rejection, "loan ignored"),
        },
        Command::Close { username, pin } => match bank.close_account(&username, pin) {
            Ok(removed) => {
                info!(owner = %removed.owner, "account closed");
                render::logged_out();
            }
            Err(rejection) => debug!(%rejection, "close ignored"),
        },
        Command::Sort => {
            *order = order.toggled();
            redraw(bank, *order);
        }
        Command::Logout => {
            bank.logout();
            render::logged_out();
        }
        Command::Help => render::help(),
        // Quit is handled by the event loop before dispatch.
        Command::Quit => {}
    }
}

/// Re-renders the dashboard when a session is active.
fn redraw(bank: &BankService, order: DisplayOrder) {
    if let (Some(account), Some(remaining)) =
        (bank.current_account(), bank.session().remaining_secs())
    {
        render::dashboard(account, order, remaining, Utc::now());
    }
}
