//! Queries over a MedDRA [`HierarchyIndex`](meddra_index::HierarchyIndex).
//!
//! Two operations are provided:
//!
//! - [`QueryEngine::get_hierarchy_by_term`] resolves every path through the
//!   hierarchy that a named term belongs to;
//! - [`QueryEngine::search_term`] lists the terms at one level whose name
//!   starts with a prefix.
//!
//! Both take the level as text (`"SOC"`, `"HLGT"`, `"HLT"`, `"PT"` or
//! `"LLT"`, any case) and fail with [`QueryError::InvalidArgument`] for
//! anything else. A term that matches nothing yields an empty
//! [`HierarchyResult`](meddra_records::HierarchyResult), never an error.

pub mod engine;
pub mod error;

pub use engine::QueryEngine;
pub use error::QueryError;
