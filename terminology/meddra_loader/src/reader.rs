use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{debug, info, trace, warn};

use crate::config::{LoaderConfig, NumericFieldPolicy};
use crate::error::{FieldError, LoadError};

/// Label used in errors when the input is not a named file.
pub(crate) const READER_ORIGIN: &str = "<reader>";

/// Some distributions are saved with a leading byte-order mark.
const UTF8_BOM: char = '\u{feff}';

pub(crate) fn open(path: &Path) -> Result<(BufReader<File>, String), LoadError> {
    let origin = path.display().to_string();
    debug!("opening {origin}");
    let file = File::open(path).map_err(|e| LoadError::io(&origin, e))?;
    Ok((BufReader::new(file), origin))
}

/// Read every line of `reader` through `parse_line`, keeping rows in source
/// order.
///
/// `parse_line` returns `Ok(None)` for rows that should be silently skipped.
/// Lines are decoded lossily so that stray Latin-1 bytes in a distribution do
/// not abort the load. A byte-order mark on the first line is dropped.
pub(crate) fn read_rows<R, T, F>(
    mut reader: R,
    origin: &str,
    table: &str,
    config: &LoaderConfig,
    mut parse_line: F,
) -> Result<Vec<T>, LoadError>
where
    R: BufRead,
    F: FnMut(&str, &LoaderConfig) -> Result<Option<T>, FieldError>,
{
    let mut rows = Vec::new();
    let mut buf = Vec::new();
    let mut line_no = 0usize;
    let mut skipped_short = 0usize;
    let mut skipped_malformed = 0usize;

    loop {
        buf.clear();
        let read = reader
            .read_until(b'\n', &mut buf)
            .map_err(|e| LoadError::io(origin, e))?;
        if read == 0 {
            break;
        }
        line_no += 1;

        let text = String::from_utf8_lossy(&buf);
        let mut line = text.trim_end_matches(['\n', '\r']);
        if line_no == 1 {
            line = line.strip_prefix(UTF8_BOM).unwrap_or(line);
        }

        match parse_line(line, config) {
            Ok(Some(row)) => rows.push(row),
            Ok(None) => {
                trace!("{origin}:{line_no}: skipping row with too few fields");
                skipped_short += 1;
            }
            Err(field) => match config.numeric_policy {
                NumericFieldPolicy::Reject => {
                    return Err(LoadError::at_line(origin, line_no, field));
                }
                NumericFieldPolicy::SkipRow => {
                    warn!("{origin}:{line_no}: skipping row, {field}");
                    skipped_malformed += 1;
                }
            },
        }
    }

    info!(
        "loaded {} {table} rows from {origin} ({skipped_short} short, {skipped_malformed} malformed skipped)",
        rows.len()
    );
    Ok(rows)
}
