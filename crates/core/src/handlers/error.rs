//! Rejection reasons for the action handlers.
//!
//! The demo has no fault class at all: there is no I/O in core and nothing
//! that can fail independently of user input. The only errors are
//! validation failures, and all of them are handled identically by the
//! caller (inputs reset, no state change, nothing shown to the user).

use thiserror::Error;

/// Why an action was abandoned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Rejection {
    /// No account matches the supplied username.
    #[error("no account matches that username")]
    UnknownUsername,

    /// The supplied PIN does not match the account's PIN.
    #[error("incorrect PIN")]
    WrongPin,

    /// The action requires an active session.
    #[error("no active session")]
    NotLoggedIn,

    /// The transfer destination does not exist.
    #[error("recipient account not found")]
    UnknownRecipient,

    /// The transfer destination is the sending account.
    #[error("cannot transfer to the sending account")]
    SelfTransfer,

    /// The amount must be strictly positive.
    #[error("amount must be positive")]
    NonPositiveAmount,

    /// The amount exceeds the sender's current balance.
    #[error("amount exceeds the available balance")]
    InsufficientFunds,

    /// No single movement is large enough to back the requested loan.
    #[error("no movement large enough to back this loan")]
    NoQualifyingDeposit,

    /// Close-account credentials do not match the logged-in account.
    #[error("credentials do not match the active session")]
    CloseCredentialsMismatch,
}
