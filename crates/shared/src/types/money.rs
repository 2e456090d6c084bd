//! Currency codes for account denominations.
//!
//! Amounts themselves are `rust_decimal::Decimal` everywhere; never use
//! floating-point for money calculations.

use serde::{Deserialize, Serialize};

/// ISO 4217 currency codes supported by the system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// Euro
    Eur,
    /// US Dollar
    Usd,
    /// Pound sterling
    Gbp,
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Eur => write!(f, "EUR"),
            Self::Usd => write!(f, "USD"),
            Self::Gbp => write!(f, "GBP"),
        }
    }
}

impl std::str::FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "EUR" => Ok(Self::Eur),
            "USD" => Ok(Self::Usd),
            "GBP" => Ok(Self::Gbp),
            _ => Err(format!("Unknown currency: {s}")),
        }
    }
}
