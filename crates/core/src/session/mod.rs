//! Login lifecycle and countdown state machine.

pub mod controller;

pub use controller::{DEFAULT_TIMEOUT_SECS, SessionController, SessionState, Tick};
