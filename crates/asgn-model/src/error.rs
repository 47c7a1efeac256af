use thiserror::Error;

#[derive(Debug, Error)]
pub enum AsgnError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Polars(#[from] polars::error::PolarsError),
    #[error("{0}")]
    Message(String),
}

pub type Result<T> = std::result::Result<T, AsgnError>;
