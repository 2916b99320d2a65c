//! Rows of the two MedDRA source tables.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::level::TermLevel;

/// One row of the hierarchy table (`mdhier.asc`).
///
/// A PT appears once per SOC it is linked to; exactly one of those rows carries
/// `primary_soc_flag`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HierarchyRecord {
    /// Preferred Term code.
    pub pt_code: i64,
    /// High Level Term code.
    pub hlt_code: i64,
    /// High Level Group Term code.
    pub hlgt_code: i64,
    /// System Organ Class code.
    pub soc_code: i64,
    /// Preferred Term name.
    pub pt_name: String,
    /// High Level Term name.
    pub hlt_name: String,
    /// High Level Group Term name.
    pub hlgt_name: String,
    /// System Organ Class name.
    pub soc_name: String,
    /// Short SOC abbreviation, e.g. `Blood`.
    pub soc_abbrev: String,
    /// Column 9 of the distribution, unused by MedDRA and kept verbatim.
    pub null_field: String,
    /// The PT's primary SOC code; empty in some releases.
    pub pt_soc_code: Option<i64>,
    /// Set when column 11 is exactly `Y`.
    pub primary_soc_flag: bool,
}

impl HierarchyRecord {
    /// The code of this row at `level`, or `None` for [`TermLevel::Llt`].
    pub fn code(&self, level: TermLevel) -> Option<i64> {
        match level {
            TermLevel::Pt => Some(self.pt_code),
            TermLevel::Hlt => Some(self.hlt_code),
            TermLevel::Hlgt => Some(self.hlgt_code),
            TermLevel::Soc => Some(self.soc_code),
            TermLevel::Llt => None,
        }
    }

    /// The display name of this row at `level`, or `None` for [`TermLevel::Llt`].
    pub fn name(&self, level: TermLevel) -> Option<&str> {
        match level {
            TermLevel::Pt => Some(&self.pt_name),
            TermLevel::Hlt => Some(&self.hlt_name),
            TermLevel::Hlgt => Some(&self.hlgt_name),
            TermLevel::Soc => Some(&self.soc_name),
            TermLevel::Llt => None,
        }
    }
}

/// One row of the low-level term table (`llt.asc`).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LowLevelTermRecord {
    /// Lowest Level Term code.
    pub llt_code: i64,
    /// Term name with surrounding quotes removed.
    pub llt_name: String,
    /// Code of the Preferred Term this LLT belongs to.
    pub pt_code: i64,
    /// Non-current terms are retired and never returned by lookups.
    pub is_current: bool,
}
