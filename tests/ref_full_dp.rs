use mcm_dp::{min_cost, ChainSolution, MatrixChainProblem};
use proptest::prelude::*;

/// Cheapest grouping of `A_i..A_j` by trying every split, no memoisation.
fn exhaustive_cost(p: &[u64], i: usize, j: usize) -> u64 {
    if i == j {
        return 0;
    }
    (i..j)
        .map(|k| {
            exhaustive_cost(p, i, k) + exhaustive_cost(p, k + 1, j) + p[i] * p[k + 1] * p[j + 1]
        })
        .min()
        .unwrap()
}

/// Cost of evaluating `A_i..A_j` following the solution's own split table.
fn replay_cost(solution: &ChainSolution, i: usize, j: usize) -> u64 {
    let p = solution.dims();
    match solution.split_of(i, j) {
        None => 0,
        Some(k) => {
            replay_cost(solution, i, k)
                + replay_cost(solution, k + 1, j)
                + p[i] * p[k + 1] * p[j + 1]
        }
    }
}

fn dims_strategy(max_matrices: usize) -> impl Strategy<Value = Vec<u64>> {
    proptest::collection::vec(1u64..40, 2..=max_matrices + 1)
}

proptest! {
    #[test]
    fn matches_exhaustive_search(p in dims_strategy(7)) {
        let n = p.len() - 1;
        prop_assert_eq!(min_cost(&p).unwrap(), exhaustive_cost(&p, 0, n - 1));
    }

    #[test]
    fn parenthesization_achieves_reported_cost(p in dims_strategy(9)) {
        let solution = MatrixChainProblem::new(p).unwrap().solve().unwrap();
        let n = solution.len();
        prop_assert_eq!(replay_cost(&solution, 0, n - 1), solution.cost());
        prop_assert_eq!(solution.splits().len(), n - 1);
    }

    #[test]
    fn every_subchain_is_optimal(p in dims_strategy(6)) {
        let solution = MatrixChainProblem::new(p.clone()).unwrap().solve().unwrap();
        let n = solution.len();
        for i in 0..n {
            for j in i..n {
                prop_assert_eq!(solution.cost_of(i, j), Some(exhaustive_cost(&p, i, j)));
            }
        }
    }
}
