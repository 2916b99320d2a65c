use std::collections::{HashMap, HashSet};

use log::debug;
use meddra_records::{HierarchyRecord, LowLevelTermRecord, TermLevel};

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::fold::fold_case;

/// Lookups for one hierarchy-table level (SOC, HLGT, HLT or PT).
#[derive(Debug, Clone, Default)]
struct LevelIndex {
    /// Folded name -> record positions, in source order.
    by_name: HashMap<String, Vec<usize>>,
    /// Folded name of every record at this level, aligned with the record
    /// list. Prefix searches scan this.
    folded: Vec<String>,
}

/// Summary counts of a loaded snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct IndexStats {
    pub hierarchy_records: usize,
    pub low_level_terms: usize,
    pub current_low_level_terms: usize,
    pub distinct_pts: usize,
    pub distinct_socs: usize,
}

/// Read-only index over both MedDRA tables.
///
/// Every lookup that returns several records keeps source order, which
/// drives path numbering and first-wins deduplication in queries.
#[derive(Debug, Clone, Default)]
pub struct HierarchyIndex {
    records: Vec<HierarchyRecord>,
    llts: Vec<LowLevelTermRecord>,
    levels: HashMap<TermLevel, LevelIndex>,
    records_by_pt: HashMap<i64, Vec<usize>>,
    /// Positions of current LLTs only, in source order.
    current_llts: Vec<usize>,
    /// Folded name -> first current LLT with that name.
    current_llt_by_name: HashMap<String, usize>,
    /// PT code -> current LLT positions.
    current_llts_by_pt: HashMap<i64, Vec<usize>>,
    /// Folded names aligned with `llts`.
    folded_llt_names: Vec<String>,
}

impl HierarchyIndex {
    /// Build the index from loaded tables. The tables are owned by the index
    /// from here on.
    pub fn build(records: Vec<HierarchyRecord>, llts: Vec<LowLevelTermRecord>) -> Self {
        let mut levels: HashMap<TermLevel, LevelIndex> = HashMap::new();
        let mut records_by_pt: HashMap<i64, Vec<usize>> = HashMap::new();

        for (pos, record) in records.iter().enumerate() {
            for level in TermLevel::ALL {
                let Some(name) = record.name(level) else {
                    continue;
                };
                let folded = fold_case(name);
                let entry = levels.entry(level).or_default();
                entry.by_name.entry(folded.clone()).or_default().push(pos);
                entry.folded.push(folded);
            }
            records_by_pt.entry(record.pt_code).or_default().push(pos);
        }

        let mut current_llts = Vec::new();
        let mut current_llt_by_name = HashMap::new();
        let mut current_llts_by_pt: HashMap<i64, Vec<usize>> = HashMap::new();
        let mut folded_llt_names = Vec::with_capacity(llts.len());

        for (pos, llt) in llts.iter().enumerate() {
            let folded = fold_case(&llt.llt_name);
            if llt.is_current {
                current_llts.push(pos);
                current_llt_by_name.entry(folded.clone()).or_insert(pos);
                current_llts_by_pt.entry(llt.pt_code).or_default().push(pos);
            }
            folded_llt_names.push(folded);
        }

        debug!(
            "built hierarchy index: {} hierarchy rows, {} low-level terms ({} current)",
            records.len(),
            llts.len(),
            current_llts.len()
        );

        Self {
            records,
            llts,
            levels,
            records_by_pt,
            current_llts,
            current_llt_by_name,
            current_llts_by_pt,
            folded_llt_names,
        }
    }

    /// All hierarchy rows in source order.
    pub fn records(&self) -> &[HierarchyRecord] {
        &self.records
    }

    /// All low-level terms in source order, including non-current ones.
    pub fn low_level_terms(&self) -> &[LowLevelTermRecord] {
        &self.llts
    }

    /// Hierarchy rows whose name at `level` equals `name`, ignoring case.
    ///
    /// Always empty for [`TermLevel::Llt`]; use [`Self::find_current_llt`].
    pub fn find_by_name(&self, level: TermLevel, name: &str) -> Vec<&HierarchyRecord> {
        self.levels
            .get(&level)
            .and_then(|idx| idx.by_name.get(&fold_case(name)))
            .map(|positions| positions.iter().map(|&p| &self.records[p]).collect())
            .unwrap_or_default()
    }

    /// The first current low-level term named `name`, ignoring case.
    pub fn find_current_llt(&self, name: &str) -> Option<&LowLevelTermRecord> {
        self.current_llt_by_name
            .get(&fold_case(name))
            .map(|&p| &self.llts[p])
    }

    /// Hierarchy rows whose name at `level` starts with `prefix`, ignoring
    /// case, keeping only the first row for each code at that level.
    pub fn search_prefix(&self, level: TermLevel, prefix: &str) -> Vec<&HierarchyRecord> {
        let Some(idx) = self.levels.get(&level) else {
            return Vec::new();
        };
        let prefix = fold_case(prefix);
        let mut seen = HashSet::new();
        idx.folded
            .iter()
            .enumerate()
            .filter(|(_, name)| name.starts_with(&prefix))
            .map(|(pos, _)| &self.records[pos])
            .filter(|record| record.code(level).is_some_and(|code| seen.insert(code)))
            .collect()
    }

    /// Current low-level terms whose name starts with `prefix`, ignoring
    /// case, unique by LLT code.
    pub fn search_llt_prefix(&self, prefix: &str) -> Vec<&LowLevelTermRecord> {
        let prefix = fold_case(prefix);
        let mut seen = HashSet::new();
        self.current_llts
            .iter()
            .filter(|&&pos| self.folded_llt_names[pos].starts_with(&prefix))
            .map(|&pos| &self.llts[pos])
            .filter(|llt| seen.insert(llt.llt_code))
            .collect()
    }

    /// Every hierarchy row for `pt_code`, one per linked SOC.
    pub fn records_for_pt(&self, pt_code: i64) -> Vec<&HierarchyRecord> {
        self.records_by_pt
            .get(&pt_code)
            .map(|positions| positions.iter().map(|&p| &self.records[p]).collect())
            .unwrap_or_default()
    }

    /// Current low-level terms under `pt_code`, unique by LLT code.
    pub fn current_llts_for_pt(&self, pt_code: i64) -> Vec<&LowLevelTermRecord> {
        let mut seen = HashSet::new();
        self.current_llts_by_pt
            .get(&pt_code)
            .map(|positions| {
                positions
                    .iter()
                    .map(|&p| &self.llts[p])
                    .filter(|llt| seen.insert(llt.llt_code))
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn stats(&self) -> IndexStats {
        let distinct = |f: fn(&HierarchyRecord) -> i64| {
            self.records.iter().map(f).collect::<HashSet<_>>().len()
        };
        IndexStats {
            hierarchy_records: self.records.len(),
            low_level_terms: self.llts.len(),
            current_low_level_terms: self.current_llts.len(),
            distinct_pts: distinct(|r| r.pt_code),
            distinct_socs: distinct(|r| r.soc_code),
        }
    }
}
