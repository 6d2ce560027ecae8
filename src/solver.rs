//! Matrix-chain multiplication order.
//!
//! Classic DP:
//! - Given dimensions `p[0..=n]`, matrix `A_i` has size `p[i] x p[i+1]`.
//! - `m[i][j]` is the fewest scalar multiplications needed for `A_i..A_j`.
//! - Chains are filled by increasing length, so every `m[i][k]` and
//!   `m[k+1][j]` read while computing `m[i][j]` is already final.
//!
//! The split table `s[i][j]` keeps the first `k` reaching the minimum, which
//! fixes a unique optimal parenthesization for every input.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::dims::{dimension_vector, validate_vector, Dims};
use crate::error::{ChainError, Result};
use crate::table::Table;

/// A validated matrix chain, ready to be solved.
#[derive(Clone, Debug)]
pub struct MatrixChainProblem {
    /// Dimensions p[0..=n], with n matrices.
    p: Vec<u64>,
}

/// One split decision: `A_i..A_j` is evaluated as `(A_i..A_k)(A_{k+1}..A_j)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Split {
    pub i: usize,
    pub j: usize,
    pub k: usize,
}

impl MatrixChainProblem {
    /// Wrap a dimension vector. Rejects chains with no matrices or a zero
    /// dimension.
    pub fn new(p: Vec<u64>) -> Result<Self> {
        validate_vector(&p)?;
        Ok(Self { p })
    }

    /// Build from per-matrix shapes, requiring adjacent shapes to agree.
    pub fn from_pairs(pairs: &[Dims]) -> Result<Self> {
        Ok(Self {
            p: dimension_vector(pairs, true)?,
        })
    }

    /// Number of matrices in the chain.
    pub fn n(&self) -> usize {
        self.p.len() - 1
    }

    pub fn dims(&self) -> &[u64] {
        &self.p
    }

    /// Run the O(n³) fill and keep both tables.
    ///
    /// Candidate splits whose cost overflows `u64` are discarded; the solve
    /// only fails when no split of the whole chain fits.
    pub fn solve(self) -> Result<ChainSolution> {
        let n = self.n();
        let p = &self.p;

        #[cfg(feature = "tracing")]
        let span = tracing::debug_span!("matrix_chain_solve", matrices = n);
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        // `None` marks a subchain whose cost does not fit in a `u64`.
        let mut cost: Table<Option<u64>> = Table::new(n, Some(0));
        let mut split = Table::new(n, 0usize);
        let mut first_overflow = None;

        for len in 2..=n {
            for i in 0..=(n - len) {
                let j = i + len - 1;
                let mut best: Option<u64> = None;
                for k in i..j {
                    let (Some(left), Some(right)) = (cost[(i, k)], cost[(k + 1, j)]) else {
                        continue;
                    };
                    let q = p[i]
                        .checked_mul(p[k + 1])
                        .and_then(|x| x.checked_mul(p[j + 1]))
                        .and_then(|x| x.checked_add(left))
                        .and_then(|x| x.checked_add(right));
                    if let Some(q) = q {
                        if best.map_or(true, |b| q < b) {
                            best = Some(q);
                            split[(i, j)] = k;
                        }
                    }
                }
                cost[(i, j)] = best;
                if best.is_none() && first_overflow.is_none() {
                    #[cfg(feature = "tracing")]
                    tracing::warn!(i, j, "subchain cost exceeds u64");
                    first_overflow = Some((i, j));
                }
            }
        }

        let Some(total) = cost[(0, n - 1)] else {
            let (i, j) = first_overflow.unwrap_or((0, n - 1));
            return Err(ChainError::Overflow { i, j });
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(cost = total, "chain solved");

        Ok(ChainSolution {
            p: self.p,
            total,
            cost,
            split,
        })
    }
}

/// Minimum cost for a chain given as per-matrix shapes.
///
/// Adjacent shapes must be conformable; see [`crate::SolverBuilder`] to relax
/// that.
pub fn compute_min_cost(pairs: &[Dims]) -> Result<u64> {
    Ok(MatrixChainProblem::from_pairs(pairs)?.solve()?.cost())
}

/// Minimum cost for a chain given as a dimension vector `p`.
pub fn min_cost(p: &[u64]) -> Result<u64> {
    Ok(MatrixChainProblem::new(p.to_vec())?.solve()?.cost())
}

/// Filled cost and split tables for one chain.
#[derive(Clone, Debug)]
pub struct ChainSolution {
    p: Vec<u64>,
    total: u64,
    cost: Table<Option<u64>>,
    split: Table<usize>,
}

impl ChainSolution {
    /// Minimum number of scalar multiplications for the whole chain.
    pub fn cost(&self) -> u64 {
        self.total
    }

    /// Number of matrices.
    pub fn len(&self) -> usize {
        self.cost.n()
    }

    /// Always false: a solution holds at least one matrix.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn dims(&self) -> &[u64] {
        &self.p
    }

    /// Optimal cost of `A_i..A_j`, or `None` if `i > j`, the range is out of
    /// bounds, or the cost does not fit in a `u64`.
    pub fn cost_of(&self, i: usize, j: usize) -> Option<u64> {
        if i > j {
            return None;
        }
        self.cost.get(i, j).copied().flatten()
    }

    /// Split point chosen for `A_i..A_j`; `None` for single matrices and
    /// ranges that are empty, out of bounds, or unreachable.
    pub fn split_of(&self, i: usize, j: usize) -> Option<usize> {
        if i >= j {
            return None;
        }
        self.cost_of(i, j)?;
        self.split.get(i, j).copied()
    }

    /// Split decisions of the optimal parenthesization, in pre-order.
    pub fn splits(&self) -> Vec<Split> {
        fn collect(states: &mut Vec<Split>, split: &Table<usize>, i: usize, j: usize) {
            if i >= j {
                return;
            }
            let k = split[(i, j)];
            states.push(Split { i, j, k });
            collect(states, split, i, k);
            collect(states, split, k + 1, j);
        }

        let mut states = Vec::with_capacity(self.len().saturating_sub(1));
        collect(&mut states, &self.split, 0, self.len() - 1);
        states
    }

    /// Displayable view of the optimal parenthesization.
    pub fn parenthesization(&self) -> Parenthesization<'_> {
        Parenthesization { solution: self }
    }
}

/// Renders the optimal grouping as e.g. `((A0(A1A2))((A3A4)A5))`.
#[derive(Clone, Copy, Debug)]
pub struct Parenthesization<'a> {
    solution: &'a ChainSolution,
}

impl Parenthesization<'_> {
    fn write_range(&self, f: &mut fmt::Formatter<'_>, i: usize, j: usize) -> fmt::Result {
        if i == j {
            return write!(f, "A{i}");
        }
        let k = self.solution.split[(i, j)];
        f.write_str("(")?;
        self.write_range(f, i, k)?;
        self.write_range(f, k + 1, j)?;
        f.write_str(")")
    }
}

impl fmt::Display for Parenthesization<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_range(f, 0, self.solution.len() - 1)
    }
}
