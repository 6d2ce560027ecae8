//! Matrix shapes and the flattened dimension vector.
//!
//! A chain of `n` matrices is described either by `n` [`Dims`] pairs or by a
//! dimension vector `p` of length `n + 1`, where matrix `i` is
//! `p[i] x p[i + 1]`.

use crate::error::{InvalidChain, Result};

/// Shape of one matrix: `rows x cols`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Dims {
    pub rows: u64,
    pub cols: u64,
}

impl Dims {
    pub const fn new(rows: u64, cols: u64) -> Self {
        Self { rows, cols }
    }
}

impl From<(u64, u64)> for Dims {
    fn from((rows, cols): (u64, u64)) -> Self {
        Self { rows, cols }
    }
}

/// Flatten `pairs` into `p = [rows(0), cols(0), cols(1), ..., cols(n-1)]`.
///
/// With `strict` set, every adjacent pair must be conformable. Without it the
/// row counts after the first are ignored, exactly as the bare recurrence
/// would treat them. Empty chains and zero dimensions are rejected either way.
pub fn dimension_vector(pairs: &[Dims], strict: bool) -> Result<Vec<u64>> {
    let first = pairs.first().ok_or(InvalidChain::Empty)?;

    for (matrix, d) in pairs.iter().enumerate() {
        for value in [d.rows, d.cols] {
            if value == 0 {
                return Err(InvalidChain::NonPositive { matrix, value: 0 }.into());
            }
        }
    }

    if strict {
        if let Some(left) = pairs.windows(2).position(|w| w[0].cols != w[1].rows) {
            return Err(InvalidChain::Mismatch {
                left,
                cols: pairs[left].cols,
                rows: pairs[left + 1].rows,
            }
            .into());
        }
    }

    let mut p = Vec::with_capacity(pairs.len() + 1);
    p.push(first.rows);
    p.extend(pairs.iter().map(|d| d.cols));
    Ok(p)
}

/// Check a raw dimension vector: at least one matrix, no zero entries.
pub fn validate_vector(p: &[u64]) -> Result<()> {
    if p.len() < 2 {
        return Err(InvalidChain::Empty.into());
    }
    if let Some(idx) = p.iter().position(|&v| v == 0) {
        // p[idx] is a dimension of matrix idx (rows) or idx - 1 (cols).
        let matrix = idx.min(p.len() - 2);
        return Err(InvalidChain::NonPositive { matrix, value: 0 }.into());
    }
    Ok(())
}
