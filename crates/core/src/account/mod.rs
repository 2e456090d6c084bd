//! Account records and the in-memory account store.
//!
//! This module implements the account side of the demo:
//! - Account records (owner, PIN, movements, optional movement dates)
//! - The ordered in-memory store holding all mutable financial state
//! - Deterministic username derivation from owner names

pub mod store;
pub mod types;
pub mod username;

pub use store::AccountStore;
pub use types::Account;
pub use username::derive_username;
