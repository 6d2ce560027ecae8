//! Matrix-chain multiplication order (MCM-DP)
//!
//! This crate computes the fewest scalar multiplications needed to evaluate a
//! product `A0 · A1 · … · A(n-1)`, together with a grouping that achieves it,
//! using the classic bottom-up dynamic program over subchain lengths.
//!
//! ## Core idea
//! 1. Describe the chain as per-matrix shapes ([`Dims`]) or as a dimension
//!    vector `p` where matrix `i` is `p[i] x p[i+1]`.
//! 2. Fill the cost table `m[i][j]` by increasing chain length; each entry
//!    takes the cheapest split `k` of `A_i..A_j`.
//! 3. Read the answer from `m[0][n-1]` and, if wanted, walk the split table
//!    for the optimal parenthesization.
//!
//! The fill is O(n³) time and O(n²) space.
//!
//! ## Quick start
//! ```
//! use mcm_dp::{compute_min_cost, Dims, MatrixChainProblem};
//!
//! let chain = [Dims::new(10, 20), Dims::new(20, 30), Dims::new(30, 40)];
//! assert_eq!(compute_min_cost(&chain).unwrap(), 18_000);
//!
//! let solution = MatrixChainProblem::new(vec![30, 35, 15, 5, 10, 20, 25])
//!     .unwrap()
//!     .solve()
//!     .unwrap();
//! assert_eq!(solution.cost(), 15_125);
//! assert_eq!(solution.parenthesization().to_string(), "((A0(A1A2))((A3A4)A5))");
//! ```
//!
//! ## Validation
//! Chains are checked before solving: at least one matrix, no zero
//! dimensions, and (unless a lenient [`Solver`] is configured) matching inner
//! dimensions. Costs are accumulated in `u64` with overflow reported as
//! [`ChainError::Overflow`].

pub mod builder;
pub mod dims;
pub mod error;
pub mod parse;
pub mod solver;
pub mod table;

pub use crate::builder::{Solver, SolverBuilder};
pub use crate::dims::Dims;
pub use crate::error::{ChainError, InvalidChain, Result};
pub use crate::parse::{parse_chain, read_chain};
pub use crate::solver::{
    compute_min_cost, min_cost, ChainSolution, MatrixChainProblem, Parenthesization, Split,
};
