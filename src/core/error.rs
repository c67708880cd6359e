//! Error types for the comparison pipeline
//!
//! All variants here abort a run. Per-quote problems are deliberately not
//! represented: the comparator records those as skip diagnostics instead.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CompareError {
    #[error("Domain error: {0}")]
    Domain(String),

    #[error("Data unavailable: {0}")]
    DataUnavailable(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Export error: {0}")]
    Export(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type CompareResult<T> = Result<T, CompareError>;

impl CompareError {
    pub fn domain(msg: impl Into<String>) -> Self {
        Self::Domain(msg.into())
    }

    pub fn data_unavailable(msg: impl Into<String>) -> Self {
        Self::DataUnavailable(msg.into())
    }

    pub fn network(msg: impl Into<String>) -> Self {
        Self::Network(msg.into())
    }

    pub fn export(msg: impl Into<String>) -> Self {
        Self::Export(msg.into())
    }
}
