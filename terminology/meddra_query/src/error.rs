use meddra_records::InvalidLevel;

/// An error returned by a query.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    /// An argument was not acceptable, e.g. an unknown term level.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl From<InvalidLevel> for QueryError {
    fn from(err: InvalidLevel) -> Self {
        QueryError::InvalidArgument(err.to_string())
    }
}
