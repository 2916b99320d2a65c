//! In-memory index over the MedDRA hierarchy and low-level term tables.
//!
//! The index is built once from loaded records and never mutated afterwards,
//! so a built [`HierarchyIndex`] can be shared freely between readers.

pub mod fold;
pub mod index;

pub use fold::fold_case;
pub use index::{HierarchyIndex, IndexStats};
