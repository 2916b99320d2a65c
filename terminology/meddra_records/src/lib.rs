//! Record and result types for the MedDRA terminology hierarchy.
//!
//! This crate defines the rows read from the MedDRA ASCII distribution
//! (`mdhier.asc` and `llt.asc`), the five hierarchy levels, and the result
//! shape returned by hierarchy queries.

#![warn(missing_docs)]

pub mod level;
pub mod record;
pub mod result;

pub use level::{InvalidLevel, TermLevel};
pub use record::{HierarchyRecord, LowLevelTermRecord};
pub use result::{HierarchyNode, HierarchyResult};

/// A result type for JSON conversion helpers.
#[cfg(feature = "serde")]
pub type Result<T> = std::result::Result<T, serde_json::Error>;

/// Serializes a record or result to a pretty-printed JSON string.
///
/// # Example
///
/// ```
/// use meddra_records::{to_json, HierarchyNode};
///
/// let node = HierarchyNode::new("Anaemia folate deficiency", 10001, true, 1);
/// let json = to_json(&node).unwrap();
/// assert!(json.contains(r#""code": "10001""#));
/// assert!(json.contains(r#""isPrimaryPath": true"#));
/// assert!(json.contains(r#""pathId": 1"#));
/// ```
#[cfg(feature = "serde")]
pub fn to_json<T: serde::Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value)
}

/// Deserializes a record or result from a JSON string.
#[cfg(feature = "serde")]
pub fn from_json<T: for<'de> serde::Deserialize<'de>>(json: &str) -> Result<T> {
    serde_json::from_str(json)
}
