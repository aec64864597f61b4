//! Solvers
//!
//! The solver entry point consumes a validated [`Problem`](crate::config::Problem)
//! and produces one [`SolverResult`] per invocation: a [`GroupResult`] for
//! every non-empty group plus the pointwise maximum value across groups.

use std::time::Duration;

use smallvec::SmallVec;
use thiserror::Error;

use crate::{config::Problem, items::Item};

pub mod dynamic;

/// Items committed to one group's selection, in acceptance order.
pub type Selection = SmallVec<[Item; 8]>;

/// Solver Errors
#[derive(Debug, Error)]
pub enum SolverError {
    /// Cumulative selection value exceeded the representable range. The run
    /// is aborted rather than letting the total wrap.
    #[error("cumulative selection value overflowed while scoring group {group}")]
    ValueOverflow {
        /// Index of the group being scored.
        group: u32,
    },

    /// Internal solver invariant was violated (this is a bug).
    #[error("solver invariant violated: {message}")]
    InvariantViolation {
        /// What invariant was violated.
        message: &'static str,
    },
}

/// Outcome for a single non-empty group. Created once by the solver and
/// never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupResult {
    /// Index of the group this result belongs to.
    pub group_index: u32,

    /// Number of items committed to the selection.
    pub items_selected: usize,

    /// Total dynamic cost of the selection, position-indexed.
    pub dynamic_time_used: u32,

    /// Best attainable total value for the group.
    pub max_value: u64,

    /// The selected items in acceptance order (not input order).
    pub selected_items: Selection,
}

/// Aggregated outcome across all groups.
#[derive(Debug, Clone)]
pub struct SolverResult {
    /// Maximum value over all group results; 0 when there are none.
    pub max_value: u64,

    /// Wall-clock time spent solving. Diagnostic only.
    pub total_time: Duration,

    /// One entry per non-empty group, in ascending group-index order.
    pub group_results: Vec<GroupResult>,
}

/// Trait for solving a validated problem.
pub trait Solver {
    /// Solve every group of the problem and aggregate the results.
    ///
    /// # Errors
    ///
    /// Returns a [`SolverError`] if the computation fails; no partial result
    /// is produced.
    fn solve(problem: &Problem) -> Result<SolverResult, SolverError>;
}
