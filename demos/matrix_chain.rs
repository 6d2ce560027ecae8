//! Example: matrix-chain multiplication order.
//!
//! Run with:
//! `cargo run --example matrix_chain`

use mcm_dp::{parse_chain, Solver};

fn main() -> mcm_dp::Result<()> {
    // Example from CLRS:
    // Matrices A0..A5 with dimensions:
    // 30x35, 35x15, 15x5, 5x10, 10x20, 20x25
    let chain = parse_chain("{{30, 35}, {35, 15}, {15, 5}, {5, 10}, {10, 20}, {20, 25}}")?;

    let solution = Solver::default().solve_pairs(&chain)?;

    println!("Optimal multiplication cost: {}", solution.cost());
    println!("Grouping: {}", solution.parenthesization());
    println!("Split decisions (i,j,k):");
    for s in solution.splits() {
        println!("  Split A[{}..{}] at {}", s.i, s.j, s.k);
    }
    Ok(())
}
