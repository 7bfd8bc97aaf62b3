use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProfileError {
    /// Statistics over an empty frame are undefined.
    #[error("dataframe has no rows")]
    EmptyFrame,
    /// Range labels must be one fewer than bin edges.
    #[error("expected {expected} labels for {bins} bin edges, got {got}")]
    LabelCountMismatch {
        bins: usize,
        expected: usize,
        got: usize,
    },
    #[error(transparent)]
    Polars(#[from] polars::prelude::PolarsError),
}

pub type Result<T> = std::result::Result<T, ProfileError>;
