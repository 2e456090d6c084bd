//! Ledger aggregation and display ordering.
//!
//! This module implements the derived side of the demo:
//! - Pure balance/income/expense/interest aggregation over movement lists
//! - Row production for rendering, in natural or sorted order
//!
//! Nothing here mutates an account; every figure is recomputed from
//! scratch on each call, which is fine at session-sized list lengths.

pub mod display;
pub mod summary;

#[cfg(test)]
mod display_props;
#[cfg(test)]
mod summary_props;

pub use display::{DisplayOrder, MovementRow};
pub use summary::AccountSummary;
