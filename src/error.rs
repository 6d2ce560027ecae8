//! Error taxonomy for chain parsing and solving.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ChainError>;

/// Everything that can go wrong between reading a chain and reporting its cost.
#[derive(Debug, Error)]
pub enum ChainError {
    /// The text does not follow the `{{r, c}, {r, c}, ...}` layout.
    #[error("malformed input at byte {offset}: {reason}")]
    MalformedInput { offset: usize, reason: String },

    /// The input is well-formed but does not describe a multipliable chain.
    #[error("invalid chain: {0}")]
    InvalidChain(#[from] InvalidChain),

    /// The optimal cost of `A[i..=j]` does not fit in a `u64`.
    #[error("cost of A{i}..A{j} overflows u64")]
    Overflow { i: usize, j: usize },

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Structural problems with a chain of dimensions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidChain {
    #[error("chain contains no matrices")]
    Empty,

    /// `value` is the offending dimension of matrix `matrix`.
    #[error("matrix {matrix} has non-positive dimension {value}")]
    NonPositive { matrix: usize, value: i128 },

    /// Matrix `left` has `cols` columns but matrix `left + 1` has `rows` rows.
    #[error("matrix {left} has {cols} columns but matrix {} has {rows} rows", .left + 1)]
    Mismatch { left: usize, cols: u64, rows: u64 },
}

impl ChainError {
    /// Returns the structural error, if this is one.
    pub fn as_invalid_chain(&self) -> Option<&InvalidChain> {
        match self {
            ChainError::InvalidChain(inner) => Some(inner),
            _ => None,
        }
    }
}
