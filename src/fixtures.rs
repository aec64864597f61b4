//! Fixtures
//!
//! Named sample problems used by tests and the command-line `--fixture`
//! flag.

use thiserror::Error;

use crate::{
    config::{ConfigError, Problem},
    items::Item,
};

/// Fixture Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// No fixture set with the given name exists.
    #[error("Unknown fixture set: {0}")]
    UnknownSet(String),

    /// A fixture produced an invalid problem (this is a bug in the fixture).
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Named sample problem sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fixture {
    /// One group, rate 0: a classic knapsack instance.
    Uniform,

    /// Two groups with rate 2, including the pair that only fits in one
    /// acceptance order.
    TwoGroups,

    /// Many light items under a steep rate, so the rate dominates base
    /// weights.
    Rush,
}

impl Fixture {
    /// Looks up a fixture set by name.
    ///
    /// # Errors
    ///
    /// Returns a [`FixtureError::UnknownSet`] for unrecognised names.
    pub fn from_set(name: &str) -> Result<Self, FixtureError> {
        match name {
            "uniform" => Ok(Self::Uniform),
            "two-groups" => Ok(Self::TwoGroups),
            "rush" => Ok(Self::Rush),
            other => Err(FixtureError::UnknownSet(other.to_owned())),
        }
    }

    /// Builds the fixture's validated problem.
    ///
    /// # Errors
    ///
    /// Returns a [`FixtureError`] if the fixture data fails validation.
    pub fn problem(self) -> Result<Problem, FixtureError> {
        let problem = match self {
            Self::Uniform => Problem::new(
                1,
                10,
                0,
                vec![
                    Item::new(60, 5, 0),
                    Item::new(50, 4, 0),
                    Item::new(70, 6, 0),
                    Item::new(30, 3, 0),
                ],
            )?,
            Self::TwoGroups => Problem::new(
                2,
                10,
                2,
                vec![
                    Item::new(10, 2, 0),
                    Item::new(15, 3, 0),
                    Item::new(7, 5, 0),
                    Item::new(12, 4, 1),
                    Item::new(9, 2, 1),
                ],
            )?,
            Self::Rush => Problem::new(
                1,
                12,
                5,
                vec![
                    Item::new(8, 1, 0),
                    Item::new(7, 1, 0),
                    Item::new(6, 2, 0),
                    Item::new(5, 1, 0),
                    Item::new(4, 2, 0),
                ],
            )?,
        };

        Ok(problem)
    }
}
