//! Core business logic for Minibank.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! All domain types, validation rules, and calculations live here.
//!
//! # Modules
//!
//! - `account` - Account records, the in-memory store, and username derivation
//! - `ledger` - Balance/summary aggregation and display ordering
//! - `session` - Login lifecycle and countdown state machine
//! - `handlers` - The four user actions and their validation rules
//! - `format` - Locale-aware currency, date, and timer formatting

pub mod account;
pub mod format;
pub mod handlers;
pub mod ledger;
pub mod session;
