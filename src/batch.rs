//! Batch Boundary
//!
//! Line-oriented front end: read four integers `N G T R` followed by `N`
//! `(value, weight, group)` triples, solve, and write the single maximum
//! value. Tokens may be separated by any whitespace, so one-triple-per-line
//! and all-on-one-line inputs are both accepted.

use std::io::{BufRead, Write};

use thiserror::Error;

use crate::{
    config::{ConfigError, Problem},
    items::Item,
    solvers::{Solver, SolverError, SolverResult, dynamic::DynamicWeightSolver},
};

/// Errors raised by the batch boundary.
#[derive(Debug, Error)]
pub enum BatchError {
    /// The input stream ended before the named field was read.
    #[error("unexpected end of input while reading {field}")]
    MissingField {
        /// Name of the missing field.
        field: String,
    },

    /// A token could not be parsed as the named field.
    #[error("{field} must be a non-negative integer, got '{token}'")]
    InvalidInteger {
        /// Name of the offending field.
        field: String,
        /// The rejected token.
        token: String,
    },

    /// Wrapped configuration validation error.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Wrapped solver error.
    #[error(transparent)]
    Solver(#[from] SolverError),

    /// Wrapped I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Reads and validates a problem from the batch stream.
///
/// # Errors
///
/// Returns a [`BatchError`] when the stream is truncated, a token is not an
/// integer, or the parsed problem fails validation.
pub fn read_problem(mut input: impl BufRead) -> Result<Problem, BatchError> {
    let mut text = String::new();
    input.read_to_string(&mut text)?;

    let mut tokens = text.split_whitespace();

    let item_count = next_field(&mut tokens, "item count (N)")?;
    let groups = next_field(&mut tokens, "group count (G)")?;
    let capacity = next_field(&mut tokens, "capacity (T)")?;
    let rate = next_field(&mut tokens, "rate (R)")?;

    let mut items = Vec::new();

    for index in 0..item_count {
        let value = next_field(&mut tokens, format!("item {index} value"))?;
        let weight = next_field(&mut tokens, format!("item {index} weight"))?;
        let group = next_field(&mut tokens, format!("item {index} group"))?;

        items.push(Item::new(value, weight, group));
    }

    Ok(Problem::new(groups, capacity, rate, items)?)
}

/// Solves a batch stream and writes the single maximum value.
///
/// # Errors
///
/// Returns a [`BatchError`] when reading, validation, solving or writing
/// fails; nothing is written on failure.
pub fn run(input: impl BufRead, mut output: impl Write) -> Result<SolverResult, BatchError> {
    let problem = read_problem(input)?;
    let result = DynamicWeightSolver::solve(&problem)?;

    writeln!(output, "{}", result.max_value)?;

    Ok(result)
}

/// Pulls the next token and parses it as the named field.
fn next_field<'a>(
    tokens: &mut impl Iterator<Item = &'a str>,
    field: impl Into<String>,
) -> Result<u32, BatchError> {
    let field = field.into();

    let token = tokens
        .next()
        .ok_or_else(|| BatchError::MissingField {
            field: field.clone(),
        })?;

    token.parse().map_err(|_error| BatchError::InvalidInteger {
        field,
        token: token.to_owned(),
    })
}
