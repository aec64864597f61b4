//! Stowage CLI
//!
//! Reads a problem (batch stream, YAML problem file, or named fixture),
//! solves it, and prints either the single maximum value or a full report.

use std::{
    fs,
    io::{self, Write},
    process::ExitCode,
};

use clap::Parser;
use thiserror::Error;

use stowage::{
    batch::{self, BatchError},
    config::Problem,
    fixtures::{Fixture, FixtureError},
    report::{Report, ReportError},
    solvers::{Solver, SolverError, dynamic::DynamicWeightSolver},
    utils::SolveArgs,
};

/// Errors surfaced by the command-line front end.
#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Batch(#[from] BatchError),

    #[error(transparent)]
    Fixture(#[from] FixtureError),

    #[error("failed to load problem file: {0}")]
    ProblemFile(#[from] serde_norway::Error),

    #[error(transparent)]
    Solver(#[from] SolverError),

    #[error(transparent)]
    Report(#[from] ReportError),
}

fn main() -> ExitCode {
    let args = SolveArgs::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            report_failure(&error);
            ExitCode::FAILURE
        }
    }
}

/// Loads, solves and prints. Nothing is printed to stdout on failure.
fn run(args: &SolveArgs) -> Result<(), CliError> {
    let problem = load_problem(args)?;
    let result = DynamicWeightSolver::solve(&problem)?;

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    if args.report {
        Report::new(&result).write_to(&mut handle)?;
    } else {
        writeln!(handle, "{}", result.max_value)?;
    }

    Ok(())
}

/// Resolves the problem source selected by the arguments.
fn load_problem(args: &SolveArgs) -> Result<Problem, CliError> {
    if let Some(name) = args.fixture.as_deref() {
        return Ok(Fixture::from_set(name)?.problem()?);
    }

    if let Some(path) = args.problem.as_deref() {
        return Ok(Problem::from_yaml(&fs::read_to_string(path)?)?);
    }

    let problem = match args.input.as_deref() {
        Some(path) => batch::read_problem(io::BufReader::new(fs::File::open(path)?))?,
        None => batch::read_problem(io::stdin().lock())?,
    };

    Ok(problem)
}

#[expect(clippy::print_stderr, reason = "CLI error reporting")]
fn report_failure(error: &CliError) {
    eprintln!("error: {error}");
}
