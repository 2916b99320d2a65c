//! Parsing of the low-level term table (`llt.asc`).
//!
//! Field order: LLT code, LLT name, PT code, six columns that are not used
//! here, then the currency flag at index 9.

use std::io::BufRead;
use std::path::Path;

use meddra_records::LowLevelTermRecord;

use crate::config::LoaderConfig;
use crate::error::{parse_code, FieldError, LoadError};
use crate::reader::{open, read_rows, READER_ORIGIN};

/// Minimum number of fields a low-level term row must have.
pub const LOW_LEVEL_TERM_FIELD_COUNT: usize = 11;

const CURRENCY_COLUMN: usize = 9;

/// Strip one pair of surrounding `quote` characters, if present.
fn dequote(raw: &str, quote: char) -> &str {
    raw.strip_prefix(quote)
        .and_then(|inner| inner.strip_suffix(quote))
        .unwrap_or(raw)
}

/// Parse one line of the low-level term table.
///
/// Returns `Ok(None)` when the line has fewer than
/// [`LOW_LEVEL_TERM_FIELD_COUNT`] fields.
pub fn parse_low_level_term_line(
    line: &str,
    config: &LoaderConfig,
) -> Result<Option<LowLevelTermRecord>, FieldError> {
    let fields: Vec<&str> = line.split(config.delimiter).collect();
    if fields.len() < LOW_LEVEL_TERM_FIELD_COUNT {
        return Ok(None);
    }

    Ok(Some(LowLevelTermRecord {
        llt_code: parse_code(&fields, 0)?,
        llt_name: dequote(fields[1], config.quote).to_string(),
        pt_code: parse_code(&fields, 2)?,
        is_current: fields[CURRENCY_COLUMN] == "Y",
    }))
}

/// Parse a low-level term table from any buffered reader.
pub fn parse_low_level_terms<R: BufRead>(
    reader: R,
    config: &LoaderConfig,
) -> Result<Vec<LowLevelTermRecord>, LoadError> {
    read_rows(
        reader,
        READER_ORIGIN,
        "low-level term",
        config,
        parse_low_level_term_line,
    )
}

/// Load the low-level term table from `path`.
pub fn load_low_level_term_file<P: AsRef<Path>>(
    path: P,
    config: &LoaderConfig,
) -> Result<Vec<LowLevelTermRecord>, LoadError> {
    let (reader, origin) = open(path.as_ref())?;
    read_rows(
        reader,
        &origin,
        "low-level term",
        config,
        parse_low_level_term_line,
    )
}
