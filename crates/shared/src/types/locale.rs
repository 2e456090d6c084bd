//! Locale identifiers for display formatting.
//!
//! Each demo account carries the locale its owner expects amounts and
//! dates to be rendered in. Only the locales used by the seed data are
//! supported.

use serde::{Deserialize, Serialize};

/// BCP 47 locale tags supported by the formatting layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Locale {
    /// English (United States): `$1,234.56`, `MM/DD/YYYY`.
    #[serde(rename = "en-US")]
    EnUs,
    /// Portuguese (Portugal): `1 234,56 €`, `DD/MM/YYYY`.
    #[serde(rename = "pt-PT")]
    PtPt,
    /// German (Germany): `1.234,56 €`, `DD.MM.YYYY`.
    #[serde(rename = "de-DE")]
    DeDe,
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EnUs => write!(f, "en-US"),
            Self::PtPt => write!(f, "pt-PT"),
            Self::DeDe => write!(f, "de-DE"),
        }
    }
}

impl std::str::FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en-US" => Ok(Self::EnUs),
            "pt-PT" => Ok(Self::PtPt),
            "de-DE" => Ok(Self::DeDe),
            _ => Err(format!("Unknown locale: {s}")),
        }
    }
}
