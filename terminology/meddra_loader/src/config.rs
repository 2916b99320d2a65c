//! Loader configuration.

/// What to do with a row whose required code column is not an integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NumericFieldPolicy {
    /// Abort the whole load with [`crate::LoadError::InvalidNumber`].
    #[default]
    Reject,
    /// Log a warning and drop the row, like rows with too few fields.
    SkipRow,
}

/// Configuration for parsing the MedDRA tables
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoaderConfig {
    /// Field separator
    pub delimiter: char,
    /// Quote character stripped from around low-level term names
    pub quote: char,
    /// Handling of malformed numeric columns
    pub numeric_policy: NumericFieldPolicy,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            delimiter: '$',
            quote: '"',
            numeric_policy: NumericFieldPolicy::Reject,
        }
    }
}

impl LoaderConfig {
    /// Default configuration that skips rows with malformed codes instead of
    /// failing.
    pub fn tolerant() -> Self {
        Self {
            numeric_policy: NumericFieldPolicy::SkipRow,
            ..Self::default()
        }
    }
}
