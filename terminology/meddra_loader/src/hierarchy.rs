//! Parsing of the hierarchy table (`mdhier.asc`).
//!
//! Field order: PT code, HLT code, HLGT code, SOC code, PT name, HLT name,
//! HLGT name, SOC name, SOC abbreviation, null field, PT-SOC code, primary
//! SOC flag. Lines usually end with a trailing `$`.

use std::io::BufRead;
use std::path::Path;

use meddra_records::HierarchyRecord;

use crate::config::LoaderConfig;
use crate::error::{parse_code, parse_optional_code, FieldError, LoadError};
use crate::reader::{open, read_rows, READER_ORIGIN};

/// Minimum number of fields a hierarchy row must have.
pub const HIERARCHY_FIELD_COUNT: usize = 12;

/// Parse one line of the hierarchy table.
///
/// Returns `Ok(None)` when the line has fewer than
/// [`HIERARCHY_FIELD_COUNT`] fields.
pub fn parse_hierarchy_line(
    line: &str,
    config: &LoaderConfig,
) -> Result<Option<HierarchyRecord>, FieldError> {
    let fields: Vec<&str> = line.split(config.delimiter).collect();
    if fields.len() < HIERARCHY_FIELD_COUNT {
        return Ok(None);
    }

    Ok(Some(HierarchyRecord {
        pt_code: parse_code(&fields, 0)?,
        hlt_code: parse_code(&fields, 1)?,
        hlgt_code: parse_code(&fields, 2)?,
        soc_code: parse_code(&fields, 3)?,
        pt_name: fields[4].to_string(),
        hlt_name: fields[5].to_string(),
        hlgt_name: fields[6].to_string(),
        soc_name: fields[7].to_string(),
        soc_abbrev: fields[8].to_string(),
        null_field: fields[9].to_string(),
        pt_soc_code: parse_optional_code(&fields, 10)?,
        primary_soc_flag: fields[11] == "Y",
    }))
}

/// Parse a hierarchy table from any buffered reader.
pub fn parse_hierarchy<R: BufRead>(
    reader: R,
    config: &LoaderConfig,
) -> Result<Vec<HierarchyRecord>, LoadError> {
    read_rows(reader, READER_ORIGIN, "hierarchy", config, parse_hierarchy_line)
}

/// Load the hierarchy table from `path`.
pub fn load_hierarchy_file<P: AsRef<Path>>(
    path: P,
    config: &LoaderConfig,
) -> Result<Vec<HierarchyRecord>, LoadError> {
    let (reader, origin) = open(path.as_ref())?;
    read_rows(reader, &origin, "hierarchy", config, parse_hierarchy_line)
}
