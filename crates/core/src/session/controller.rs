//! The session controller.
//!
//! Tracks the currently authenticated account and a countdown in whole
//! seconds. The controller itself is synchronous and pure: the event loop
//! owns the actual one-per-second tick and calls [`SessionController::tick`]
//! each time it fires. Any mutating action resets the countdown to the full
//! duration (the event loop also reschedules its tick, so reset and
//! rescheduling stay in lockstep).

use minibank_shared::types::AccountId;
use serde::{Deserialize, Serialize};

/// Countdown duration used when no configuration overrides it.
pub const DEFAULT_TIMEOUT_SECS: u32 = 300;

/// The two session states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    /// No authenticated account.
    LoggedOut,
    /// An account is authenticated and the countdown is running.
    LoggedIn {
        /// The authenticated account.
        account_id: AccountId,
        /// Seconds left before forced logout.
        remaining_secs: u32,
    },
}

/// Result of one countdown tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// No session is active; the tick was a no-op.
    Idle,
    /// The session is still alive with this many seconds left.
    Running(u32),
    /// The countdown reached zero and the session was ended.
    Expired,
}

/// Owns the logged-in lifecycle.
#[derive(Debug, Clone)]
pub struct SessionController {
    state: SessionState,
    timeout_secs: u32,
}

impl SessionController {
    /// Creates a logged-out controller with the given countdown duration.
    #[must_use]
    pub fn new(timeout_secs: u32) -> Self {
        Self {
            state: SessionState::LoggedOut,
            timeout_secs,
        }
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// The authenticated account, if any.
    #[must_use]
    pub fn current_account(&self) -> Option<AccountId> {
        match self.state {
            SessionState::LoggedIn { account_id, .. } => Some(account_id),
            SessionState::LoggedOut => None,
        }
    }

    /// Returns true while an account is authenticated.
    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.current_account().is_some()
    }

    /// Seconds left before forced logout, if a session is active.
    #[must_use]
    pub fn remaining_secs(&self) -> Option<u32> {
        match self.state {
            SessionState::LoggedIn { remaining_secs, .. } => Some(remaining_secs),
            SessionState::LoggedOut => None,
        }
    }

    /// Starts a session for an account with a full countdown.
    ///
    /// Also covers the credential re-check self-transition: logging in
    /// while already logged in switches to the (possibly same) account and
    /// resets the countdown.
    pub fn begin(&mut self, account_id: AccountId) {
        self.state = SessionState::LoggedIn {
            account_id,
            remaining_secs: self.timeout_secs,
        };
    }

    /// Resets the countdown to the full duration after a mutating action.
    ///
    /// No-op while logged out.
    pub fn extend(&mut self) {
        if let SessionState::LoggedIn { account_id, .. } = self.state {
            self.state = SessionState::LoggedIn {
                account_id,
                remaining_secs: self.timeout_secs,
            };
        }
    }

    /// Ends the session and clears the current account.
    pub fn end(&mut self) {
        self.state = SessionState::LoggedOut;
    }

    /// Advances the countdown by one second.
    ///
    /// Reaching zero forcibly ends the session and reports [`Tick::Expired`].
    pub fn tick(&mut self) -> Tick {
        match &mut self.state {
            SessionState::LoggedOut => Tick::Idle,
            SessionState::LoggedIn { remaining_secs, .. } => {
                *remaining_secs = remaining_secs.saturating_sub(1);
                let left = *remaining_secs;
                if left == 0 {
                    self.state = SessionState::LoggedOut;
                    Tick::Expired
                } else {
                    Tick::Running(left)
                }
            }
        }
    }
}

impl Default for SessionController {
    fn default() -> Self {
        Self::new(DEFAULT_TIMEOUT_SECS)
    }
}
