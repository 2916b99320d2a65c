//! Query result types.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::level::TermLevel;

/// A single term inside a [`HierarchyResult`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct HierarchyNode {
    /// Display name of the term.
    pub name: String,
    /// MedDRA code, rendered in decimal.
    pub code: String,
    /// Whether the node was reached through the primary SOC path of its PT.
    /// Always `false` for LLT nodes.
    pub is_primary_path: bool,
    /// Groups nodes that were reached from the same hierarchy row.
    pub path_id: u32,
}

impl HierarchyNode {
    /// Create a node from a numeric MedDRA code.
    pub fn new(name: impl Into<String>, code: i64, is_primary_path: bool, path_id: u32) -> Self {
        Self {
            name: name.into(),
            code: code.to_string(),
            is_primary_path,
            path_id,
        }
    }
}

/// Nodes grouped by hierarchy level.
///
/// Within each level nodes are unique by code and kept in first-seen order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct HierarchyResult {
    /// Lowest Level Terms.
    pub llt_values: Vec<HierarchyNode>,
    /// Preferred Terms.
    pub pt_values: Vec<HierarchyNode>,
    /// High Level Terms.
    pub hlt_values: Vec<HierarchyNode>,
    /// High Level Group Terms.
    pub hlgt_values: Vec<HierarchyNode>,
    /// System Organ Classes.
    pub soc_values: Vec<HierarchyNode>,
}

impl HierarchyResult {
    /// An empty result.
    pub fn new() -> Self {
        Self::default()
    }

    /// The nodes collected at `level`.
    pub fn values(&self, level: TermLevel) -> &[HierarchyNode] {
        match level {
            TermLevel::Llt => &self.llt_values,
            TermLevel::Pt => &self.pt_values,
            TermLevel::Hlt => &self.hlt_values,
            TermLevel::Hlgt => &self.hlgt_values,
            TermLevel::Soc => &self.soc_values,
        }
    }

    fn values_mut(&mut self, level: TermLevel) -> &mut Vec<HierarchyNode> {
        match level {
            TermLevel::Llt => &mut self.llt_values,
            TermLevel::Pt => &mut self.pt_values,
            TermLevel::Hlt => &mut self.hlt_values,
            TermLevel::Hlgt => &mut self.hlgt_values,
            TermLevel::Soc => &mut self.soc_values,
        }
    }

    /// Append `node` at `level` unless a node with the same code is already
    /// there. Returns `true` if the node was added.
    pub fn push_unique(&mut self, level: TermLevel, node: HierarchyNode) -> bool {
        let values = self.values_mut(level);
        if values.iter().any(|n| n.code == node.code) {
            return false;
        }
        values.push(node);
        true
    }

    /// Append `node` at `level` without looking for an existing node with the
    /// same code. Use [`Self::push_unique`] when duplicates are possible.
    pub fn push(&mut self, level: TermLevel, node: HierarchyNode) {
        self.values_mut(level).push(node);
    }

    /// Whether `level` already holds a node with `code`.
    pub fn contains_code(&self, level: TermLevel, code: i64) -> bool {
        let code = code.to_string();
        self.values(level).iter().any(|n| n.code == code)
    }

    /// Total number of nodes across all levels.
    pub fn len(&self) -> usize {
        TermLevel::ALL.iter().map(|l| self.values(*l).len()).sum()
    }

    /// `true` when no level holds any node.
    pub fn is_empty(&self) -> bool {
        TermLevel::ALL.iter().all(|l| self.values(*l).is_empty())
    }

    /// The nodes tagged with `path_id`, in LLT to SOC order.
    ///
    /// Because nodes are deduplicated by code, a path only contains the levels
    /// at which its row contributed a node that was not already present.
    pub fn path(&self, path_id: u32) -> Vec<(TermLevel, &HierarchyNode)> {
        TermLevel::ALL
            .iter()
            .flat_map(|level| {
                self.values(*level)
                    .iter()
                    .filter(move |n| n.path_id == path_id)
                    .map(move |n| (*level, n))
            })
            .collect()
    }
}
