//! Income category model
//!
//! An income entry is classified as either cash in hand or a direct
//! deposit. Categories are persisted as one-letter codes to match the
//! record store schema.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification of an income entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Cash in hand
    #[serde(rename = "c")]
    Cash,
    /// Direct deposit
    #[serde(rename = "d")]
    Deposit,
}

impl Category {
    /// The one-letter code used in the record store (`c` or `d`)
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Cash => "c",
            Self::Deposit => "d",
        }
    }

    /// Human-readable label for display
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Cash => "Cash",
            Self::Deposit => "Deposit",
        }
    }

    /// Look up a category from its stored code
    ///
    /// Stored codes are exact: `c` or `d`, lowercase. Anything else is
    /// outside the schema and returns `None`.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "c" => Some(Self::Cash),
            "d" => Some(Self::Deposit),
            _ => None,
        }
    }

    /// Parse an interactive selector input (`c`/`d`, case-insensitive)
    pub fn parse_selector(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "c" => Some(Self::Cash),
            "d" => Some(Self::Deposit),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
