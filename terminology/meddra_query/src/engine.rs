use std::collections::HashSet;

use log::debug;
use meddra_index::HierarchyIndex;
use meddra_records::{HierarchyNode, HierarchyRecord, HierarchyResult, LowLevelTermRecord, TermLevel};

use crate::error::QueryError;

/// Hierarchy levels stored in each hierarchy row, in the order nodes are
/// appended for a row.
const ROW_LEVELS: [TermLevel; 4] = [TermLevel::Soc, TermLevel::Hlgt, TermLevel::Hlt, TermLevel::Pt];

/// Answers hierarchy and prefix queries against a borrowed index.
#[derive(Debug, Clone, Copy)]
pub struct QueryEngine<'a> {
    index: &'a HierarchyIndex,
}

impl<'a> QueryEngine<'a> {
    pub fn new(index: &'a HierarchyIndex) -> Self {
        QueryEngine { index }
    }

    /// Resolve the full hierarchy of the term named `term_name` at level
    /// `term_type`.
    ///
    /// Every hierarchy row the term belongs to gets its own path id, starting
    /// at 1. Nodes are unique by code within each level, the first row to
    /// reach a code wins.
    ///
    /// # Examples
    ///
    /// ```
    /// use meddra_index::HierarchyIndex;
    /// use meddra_query::QueryEngine;
    /// use meddra_records::HierarchyRecord;
    ///
    /// let index = HierarchyIndex::build(
    ///     vec![HierarchyRecord {
    ///         pt_code: 10001,
    ///         soc_code: 20001,
    ///         pt_name: "Anaemia folate deficiency".into(),
    ///         soc_name: "Blood disorders".into(),
    ///         primary_soc_flag: true,
    ///         ..Default::default()
    ///     }],
    ///     Vec::new(),
    /// );
    /// let engine = QueryEngine::new(&index);
    /// let result = engine
    ///     .get_hierarchy_by_term("anaemia folate deficiency", "PT")
    ///     .unwrap();
    /// assert_eq!(result.pt_values[0].code, "10001");
    /// assert_eq!(result.soc_values[0].code, "20001");
    /// assert_eq!(result.soc_values[0].path_id, 1);
    /// ```
    pub fn get_hierarchy_by_term(
        &self,
        term_name: &str,
        term_type: &str,
    ) -> Result<HierarchyResult, QueryError> {
        let level: TermLevel = term_type.parse()?;
        Ok(self.hierarchy(term_name, level))
    }

    /// [`Self::get_hierarchy_by_term`] with an already parsed level.
    pub fn hierarchy(&self, term_name: &str, level: TermLevel) -> HierarchyResult {
        let result = match level {
            TermLevel::Llt => self.hierarchy_for_llt(term_name),
            _ => self.hierarchy_for_rows(term_name, level),
        };
        debug!(
            "hierarchy for {level} '{term_name}': {} nodes",
            result.len()
        );
        result
    }

    /// List the terms at level `term_level` whose name starts with
    /// `search_prefix`, ignoring case.
    ///
    /// A blank prefix returns an empty result without looking at the level.
    pub fn search_term(
        &self,
        search_prefix: &str,
        term_level: &str,
    ) -> Result<HierarchyResult, QueryError> {
        if search_prefix.trim().is_empty() {
            return Ok(HierarchyResult::new());
        }
        let level: TermLevel = term_level.parse()?;
        Ok(self.search(search_prefix, level))
    }

    /// [`Self::search_term`] with an already parsed level.
    pub fn search(&self, search_prefix: &str, level: TermLevel) -> HierarchyResult {
        let mut result = HierarchyResult::new();
        if search_prefix.trim().is_empty() {
            return result;
        }

        // The index already returns one entry per code.
        match level {
            TermLevel::Llt => {
                let matches = self.index.search_llt_prefix(search_prefix);
                for (path_id, llt) in (1u32..).zip(matches) {
                    result.push(TermLevel::Llt, llt_node(llt, path_id));
                }
            }
            _ => {
                let matches = self.index.search_prefix(level, search_prefix);
                for (path_id, record) in (1u32..).zip(matches) {
                    if let Some(node) = row_node(record, level, path_id) {
                        result.push(level, node);
                    }
                }
            }
        }

        debug!(
            "search {level} '{search_prefix}': {} matches",
            result.values(level).len()
        );
        result
    }

    fn hierarchy_for_llt(&self, term_name: &str) -> HierarchyResult {
        let mut nodes = Collector::default();
        let Some(llt) = self.index.find_current_llt(term_name) else {
            return nodes.finish();
        };

        let rows = self.index.records_for_pt(llt.pt_code);
        for (path_id, record) in (1u32..).zip(rows) {
            nodes.add_llt(llt, path_id);
            for level in [TermLevel::Pt, TermLevel::Hlt, TermLevel::Hlgt, TermLevel::Soc] {
                nodes.add_row(record, level, path_id);
            }
        }
        nodes.finish()
    }

    fn hierarchy_for_rows(&self, term_name: &str, level: TermLevel) -> HierarchyResult {
        let mut nodes = Collector::default();
        let rows = self.index.find_by_name(level, term_name);

        for (path_id, record) in (1u32..).zip(rows) {
            for row_level in ROW_LEVELS {
                nodes.add_row(record, row_level, path_id);
            }
            // LLTs hang off the PT and share the PT row's path id.
            if level == TermLevel::Pt {
                for llt in self.index.current_llts_for_pt(record.pt_code) {
                    nodes.add_llt(llt, path_id);
                }
            }
        }
        nodes.finish()
    }
}

/// Accumulates a result, keeping the first node seen for each code at each
/// level.
#[derive(Default)]
struct Collector {
    result: HierarchyResult,
    seen: HashSet<(TermLevel, i64)>,
}

impl Collector {
    fn add_row(&mut self, record: &HierarchyRecord, level: TermLevel, path_id: u32) {
        let Some(code) = record.code(level) else {
            return;
        };
        if self.seen.insert((level, code)) {
            if let Some(node) = row_node(record, level, path_id) {
                self.result.push(level, node);
            }
        }
    }

    fn add_llt(&mut self, llt: &LowLevelTermRecord, path_id: u32) {
        if self.seen.insert((TermLevel::Llt, llt.llt_code)) {
            self.result.push(TermLevel::Llt, llt_node(llt, path_id));
        }
    }

    fn finish(self) -> HierarchyResult {
        self.result
    }
}

fn row_node(record: &HierarchyRecord, level: TermLevel, path_id: u32) -> Option<HierarchyNode> {
    let code = record.code(level)?;
    let name = record.name(level)?;
    Some(HierarchyNode::new(
        name,
        code,
        record.primary_soc_flag,
        path_id,
    ))
}

fn llt_node(llt: &LowLevelTermRecord, path_id: u32) -> HierarchyNode {
    HierarchyNode::new(llt.llt_name.as_str(), llt.llt_code, false, path_id)
}
