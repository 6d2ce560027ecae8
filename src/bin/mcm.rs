use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use mcm_dp::{read_chain, ChainSolution, Solver, Split};
use serde::Serialize;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Minimum scalar multiplications for a matrix chain.
///
/// FILE holds one record such as `{{30, 35}, {35, 15}, {15, 5}}`.
#[derive(Parser, Debug)]
#[command(name = "mcm", version, about)]
struct Options {
    /// Chain file to read
    file: PathBuf,

    /// Also print the optimal parenthesization
    #[arg(short, long)]
    parenthesize: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Skip the check that adjacent matrices are conformable
    #[arg(long)]
    lenient: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Serialize)]
struct Report {
    matrices: usize,
    cost: u64,
    parenthesization: String,
    splits: Vec<Split>,
}

impl OutputFormat {
    fn write(
        self,
        out: &mut impl Write,
        solution: &ChainSolution,
        parenthesize: bool,
    ) -> Result<()> {
        match self {
            OutputFormat::Text => {
                writeln!(out, "{}", solution.cost())?;
                if parenthesize {
                    writeln!(out, "{}", solution.parenthesization())?;
                }
            }
            OutputFormat::Json => {
                let report = Report {
                    matrices: solution.len(),
                    cost: solution.cost(),
                    parenthesization: solution.parenthesization().to_string(),
                    splits: solution.splits(),
                };
                serde_json::to_writer(&mut *out, &report)?;
                writeln!(out)?;
            }
        }
        Ok(())
    }
}

fn run(options: &Options, out: &mut impl Write) -> Result<()> {
    let chain = read_chain(&options.file)?;
    let solver = Solver::builder().with_strict(!options.lenient).build();
    let solution = solver
        .solve_pairs(&chain)
        .with_context(|| format!("cannot solve chain from {}", options.file.display()))?;
    tracing::info!(
        matrices = solution.len(),
        cost = solution.cost(),
        "solved chain"
    );
    options.format.write(out, &solution, options.parenthesize)
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let options = Options::parse();
    let mut stdout = io::stdout().lock();
    match run(&options, &mut stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("mcm: {err:#}");
            ExitCode::FAILURE
        }
    }
}
