//! The five levels of the MedDRA hierarchy.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A level of the MedDRA hierarchy, from the most specific (LLT) to the
/// broadest (SOC).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum TermLevel {
    /// Lowest Level Term
    Llt,
    /// Preferred Term
    Pt,
    /// High Level Term
    Hlt,
    /// High Level Group Term
    Hlgt,
    /// System Organ Class
    Soc,
}

impl TermLevel {
    /// All levels in result order.
    pub const ALL: [TermLevel; 5] = [
        TermLevel::Llt,
        TermLevel::Pt,
        TermLevel::Hlt,
        TermLevel::Hlgt,
        TermLevel::Soc,
    ];

    /// The upper-case abbreviation used in the MedDRA distribution.
    pub fn abbreviation(self) -> &'static str {
        match self {
            TermLevel::Llt => "LLT",
            TermLevel::Pt => "PT",
            TermLevel::Hlt => "HLT",
            TermLevel::Hlgt => "HLGT",
            TermLevel::Soc => "SOC",
        }
    }

    /// Whether terms at this level live in the hierarchy table (`mdhier.asc`)
    /// rather than the low-level term table.
    pub fn is_hierarchy_level(self) -> bool {
        !matches!(self, TermLevel::Llt)
    }
}

impl fmt::Display for TermLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbreviation())
    }
}

/// Returned when a level name is not one of `SOC`, `HLGT`, `HLT`, `PT` or `LLT`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid term level '{0}': expected one of SOC, HLGT, HLT, PT, LLT")]
pub struct InvalidLevel(pub String);

impl FromStr for TermLevel {
    type Err = InvalidLevel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "LLT" => Ok(TermLevel::Llt),
            "PT" => Ok(TermLevel::Pt),
            "HLT" => Ok(TermLevel::Hlt),
            "HLGT" => Ok(TermLevel::Hlgt),
            "SOC" => Ok(TermLevel::Soc),
            _ => Err(InvalidLevel(s.to_string())),
        }
    }
}
