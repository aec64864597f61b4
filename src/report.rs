//! Report
//!
//! Renders a [`SolverResult`] for human consumption: the maximum value, a
//! per-group summary table, each group's selection in acceptance order, and
//! the elapsed solve time. When there are no group results only the maximum
//! value and the elapsed time are rendered.

use std::io;

use humanize_duration::{Truncate, prelude::DurationExt};
use tabled::{
    builder::Builder,
    settings::{Alignment, Style, object::Columns},
};
use thiserror::Error;

use crate::solvers::{GroupResult, SolverResult};

/// Errors that can occur while writing a report.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Failure writing to the output stream.
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Formats a solver result into a readable report.
#[derive(Debug)]
pub struct Report<'a> {
    result: &'a SolverResult,
}

impl<'a> Report<'a> {
    /// Creates a report over the given solver result.
    #[must_use]
    pub fn new(result: &'a SolverResult) -> Self {
        Self { result }
    }

    /// Writes the report to the given output stream.
    ///
    /// # Errors
    ///
    /// Returns a [`ReportError`] if the output stream cannot be written.
    pub fn write_to(&self, mut out: impl io::Write) -> Result<(), ReportError> {
        writeln!(out, "Max value: {}", self.result.max_value)?;

        if !self.result.group_results.is_empty() {
            writeln!(out)?;
            write_group_table(&mut out, &self.result.group_results)?;
            writeln!(out)?;
            write_selections(&mut out, &self.result.group_results)?;
        }

        writeln!(out)?;
        writeln!(
            out,
            "Solved in {}",
            self.result.total_time.human(Truncate::Nano)
        )?;

        Ok(())
    }
}

/// Writes the per-group summary table.
fn write_group_table(
    out: &mut impl io::Write,
    groups: &[GroupResult],
) -> Result<(), ReportError> {
    let mut builder = Builder::default();

    builder.push_record(["Group", "Items", "Dynamic time", "Max value"]);

    for group in groups {
        builder.push_record([
            group.group_index.to_string(),
            group.items_selected.to_string(),
            group.dynamic_time_used.to_string(),
            group.max_value.to_string(),
        ]);
    }

    let mut table = builder.build();
    table.with(Style::sharp());
    table.modify(Columns::new(1..), Alignment::right());

    writeln!(out, "{table}")?;

    Ok(())
}

/// Writes each group's selected items in acceptance order.
fn write_selections(out: &mut impl io::Write, groups: &[GroupResult]) -> Result<(), ReportError> {
    writeln!(out, "Optimal selection:")?;

    for group in groups {
        if group.selected_items.is_empty() {
            writeln!(out, "Group {}: No items selected", group.group_index)?;
            continue;
        }

        let rendered: Vec<String> = group
            .selected_items
            .iter()
            .map(ToString::to_string)
            .collect();

        writeln!(out, "Group {}: {}", group.group_index, rendered.join(" → "))?;
    }

    Ok(())
}
