//! Stowage prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    batch::{self, BatchError},
    config::{ConfigError, Problem},
    fixtures::{Fixture, FixtureError},
    items::{Item, groups::ItemGroup},
    report::{Report, ReportError},
    solvers::{
        GroupResult, Selection, Solver, SolverError, SolverResult, dynamic::DynamicWeightSolver,
    },
    utils::SolveArgs,
};
