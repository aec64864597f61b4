//! Stowage
//!
//! Stowage is a grouped-selection optimisation engine: it picks the
//! value-maximal subset of items per group under a shared time budget,
//! where each accepted item's effective cost grows with its acceptance
//! position (`base_weight + rate × position`).

pub mod batch;
pub mod config;
pub mod fixtures;
pub mod items;
pub mod prelude;
pub mod report;
pub mod solvers;
pub mod utils;
