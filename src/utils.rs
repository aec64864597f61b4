//! Utils

use std::path::PathBuf;

use clap::Parser;

/// Arguments for the stowage command-line front end.
#[derive(Debug, Parser)]
pub struct SolveArgs {
    /// Batch input file (`N G T R` then `value weight group` triples);
    /// read from stdin when omitted
    pub input: Option<PathBuf>,

    /// Load the problem from a YAML problem file instead of the batch stream
    #[clap(long, conflicts_with_all = ["input", "fixture"])]
    pub problem: Option<PathBuf>,

    /// Load a named fixture problem instead of reading input
    #[clap(short, long, conflicts_with = "input")]
    pub fixture: Option<String>,

    /// Render the full report instead of the single maximum value
    #[clap(short, long)]
    pub report: bool,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn argument_definition_is_consistent() {
        SolveArgs::command().debug_assert();
    }
}
