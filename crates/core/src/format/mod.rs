//! Locale-aware formatting for the presentation layer.
//!
//! Pure string builders: given an amount/timestamp plus the owner's
//! currency and locale, produce the text the renderer prints. Only the
//! three locales used by the demo accounts are supported.

pub mod currency;
pub mod date;
pub mod timer;

pub use currency::format_amount;
pub use date::{format_current_date, format_movement_date};
pub use timer::format_countdown;
