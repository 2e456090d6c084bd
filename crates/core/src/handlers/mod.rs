//! The four user actions and their validation rules.
//!
//! Every action either succeeds and mutates the store, or is rejected with
//! a typed reason and mutates nothing. Rejections are internal only: the
//! presentation layer clears its inputs and moves on without surfacing an
//! error, which is the demo's uniform policy for invalid input.

pub mod error;
pub mod service;

#[cfg(test)]
mod service_props;

pub use error::Rejection;
pub use service::BankService;
