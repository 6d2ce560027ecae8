use crate::dims::{dimension_vector, Dims};
use crate::error::Result;
use crate::solver::{ChainSolution, MatrixChainProblem};

/// Configured entry point for solving chains.
#[derive(Clone, Copy, Debug)]
pub struct Solver {
    strict: bool,
}

impl Default for Solver {
    fn default() -> Self {
        SolverBuilder::new().build()
    }
}

impl Solver {
    pub fn builder() -> SolverBuilder {
        SolverBuilder::new()
    }

    /// Whether adjacent shapes must be conformable.
    pub fn is_strict(&self) -> bool {
        self.strict
    }

    pub fn solve_pairs(&self, pairs: &[Dims]) -> Result<ChainSolution> {
        let p = dimension_vector(pairs, self.strict)?;
        self.solve_dims(&p)
    }

    pub fn solve_dims(&self, p: &[u64]) -> Result<ChainSolution> {
        MatrixChainProblem::new(p.to_vec())?.solve()
    }
}

pub struct SolverBuilder {
    strict: Option<bool>,
}

impl SolverBuilder {
    pub fn new() -> Self {
        Self { strict: None }
    }

    /// With `false`, shapes are flattened without checking that
    /// `cols(i) == rows(i + 1)`; row counts after the first are ignored.
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = Some(strict);
        self
    }

    pub fn build(self) -> Solver {
        Solver {
            strict: self.strict.unwrap_or(true),
        }
    }
}

impl Default for SolverBuilder {
    fn default() -> Self {
        Self::new()
    }
}
