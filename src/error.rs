use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BenchError {
    #[error("matrix size must be at least 1, got {0}")]
    InvalidSize(usize),
    #[error("block size must be at least 1, got {0}")]
    InvalidBlockSize(usize),
}

pub type Result<T> = std::result::Result<T, BenchError>;
