//! Shared fixtures for the end-to-end tests.
//!
//! [`write_release`] lays a small MedDRA excerpt out on disk in the same
//! `$`-delimited layout as `mdhier.asc` / `llt.asc`, so tests go through the
//! real loader.

use std::fs;
use std::io;
use std::path::PathBuf;

use meddra_records::{HierarchyRecord, LowLevelTermRecord};
use tempfile::TempDir;

/// A release written to a temporary directory. The directory is removed
/// when this value is dropped.
pub struct Release {
    dir: TempDir,
}

impl Release {
    pub fn hierarchy_path(&self) -> PathBuf {
        self.dir.path().join("mdhier.asc")
    }

    pub fn llt_path(&self) -> PathBuf {
        self.dir.path().join("llt.asc")
    }
}

/// Format a hierarchy row the way the distribution does, trailing `$` included.
pub fn hierarchy_line(r: &HierarchyRecord) -> String {
    format!(
        "{}${}${}${}${}${}${}${}${}${}${}${}$",
        r.pt_code,
        r.hlt_code,
        r.hlgt_code,
        r.soc_code,
        r.pt_name,
        r.hlt_name,
        r.hlgt_name,
        r.soc_name,
        r.soc_abbrev,
        r.null_field,
        r.pt_soc_code.map(|c| c.to_string()).unwrap_or_default(),
        if r.primary_soc_flag { "Y" } else { "N" },
    )
}

/// Format a low-level term row; the six unused columns are left empty.
pub fn llt_line(l: &LowLevelTermRecord) -> String {
    format!(
        "{}${}${}$$$$$$${}$$",
        l.llt_code,
        l.llt_name,
        l.pt_code,
        if l.is_current { "Y" } else { "N" },
    )
}

/// Write both tables to a fresh temporary directory.
pub fn write_release(
    records: &[HierarchyRecord],
    llts: &[LowLevelTermRecord],
) -> io::Result<Release> {
    let release = Release {
        dir: tempfile::tempdir()?,
    };
    let mut hierarchy: String = records.iter().map(|r| hierarchy_line(r) + "\n").collect();
    let mut llt: String = llts.iter().map(|l| llt_line(l) + "\n").collect();
    // Distributions occasionally carry blank trailing lines.
    hierarchy.push('\n');
    llt.push('\n');
    fs::write(release.hierarchy_path(), hierarchy)?;
    fs::write(release.llt_path(), llt)?;
    Ok(release)
}

pub fn hierarchy_record(
    pt: (i64, &str),
    hlt: (i64, &str),
    hlgt: (i64, &str),
    soc: (i64, &str, &str),
    primary: bool,
) -> HierarchyRecord {
    HierarchyRecord {
        pt_code: pt.0,
        hlt_code: hlt.0,
        hlgt_code: hlgt.0,
        soc_code: soc.0,
        pt_name: pt.1.to_string(),
        hlt_name: hlt.1.to_string(),
        hlgt_name: hlgt.1.to_string(),
        soc_name: soc.1.to_string(),
        soc_abbrev: soc.2.to_string(),
        null_field: String::new(),
        pt_soc_code: Some(soc.0),
        primary_soc_flag: primary,
    }
}

pub fn low_level_term(code: i64, name: &str, pt: i64, current: bool) -> LowLevelTermRecord {
    LowLevelTermRecord {
        llt_code: code,
        llt_name: name.to_string(),
        pt_code: pt,
        is_current: current,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines_have_the_distribution_field_counts() {
        let r = hierarchy_record(
            (1, "pt"),
            (2, "hlt"),
            (3, "hlgt"),
            (4, "soc", "S"),
            true,
        );
        assert_eq!(hierarchy_line(&r).split('$').count(), 13);
        let l = low_level_term(5, "llt", 1, false);
        assert_eq!(llt_line(&l).split('$').count(), 12);
        assert_eq!(llt_line(&l).split('$').nth(9), Some("N"));
    }
}
