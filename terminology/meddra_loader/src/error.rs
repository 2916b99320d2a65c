//! Loader errors.

use std::io;

/// An error that aborts loading a table.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The file could not be opened or read.
    #[error("failed to read {origin}: {source}")]
    Io {
        /// File path, or `<reader>` when parsing from a reader.
        origin: String,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// A required code column did not hold an integer.
    #[error("{origin}:{line}: column {column} is not an integer: '{value}'")]
    InvalidNumber {
        /// File path, or `<reader>` when parsing from a reader.
        origin: String,
        /// 1-based line number.
        line: usize,
        /// 0-based column index.
        column: usize,
        /// The offending text.
        value: String,
    },
}

impl LoadError {
    pub(crate) fn io(origin: &str, source: io::Error) -> Self {
        LoadError::Io {
            origin: origin.to_string(),
            source,
        }
    }

    pub(crate) fn at_line(origin: &str, line: usize, field: FieldError) -> Self {
        LoadError::InvalidNumber {
            origin: origin.to_string(),
            line,
            column: field.column,
            value: field.value,
        }
    }
}

/// A column of a single row that failed to parse.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("column {column} is not an integer: '{value}'")]
pub struct FieldError {
    /// 0-based column index.
    pub column: usize,
    /// The offending text.
    pub value: String,
}

/// Parse the integer in `fields[column]`, accepting surrounding whitespace.
pub(crate) fn parse_code(fields: &[&str], column: usize) -> Result<i64, FieldError> {
    let raw = fields[column];
    raw.trim().parse::<i64>().map_err(|_| FieldError {
        column,
        value: raw.to_string(),
    })
}

/// Like [`parse_code`], but an empty column is `None`.
pub(crate) fn parse_optional_code(
    fields: &[&str],
    column: usize,
) -> Result<Option<i64>, FieldError> {
    if fields[column].trim().is_empty() {
        return Ok(None);
    }
    parse_code(fields, column).map(Some)
}
