//! Problem Configuration
//!
//! A [`Problem`] is the validated, immutable input snapshot for one solver
//! invocation. Validation happens here, at the boundary; the solver itself
//! never range-checks its input.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::items::Item;

/// Largest admissible group count (`G`).
pub const MAX_GROUPS: u32 = 1000;

/// Largest admissible capacity (`T`).
pub const MAX_CAPACITY: u32 = 10_000;

/// Largest admissible rate (`R`).
pub const MAX_RATE: u32 = 1000;

/// Largest admissible item value.
pub const MAX_ITEM_VALUE: u32 = 1_000_000;

/// Largest admissible item base weight.
pub const MAX_ITEM_WEIGHT: u32 = 1_000_000;

/// Errors raised while validating a problem configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A parameter or item field fell outside its admissible range.
    #[error("{field} must be between {min} and {max}, got {got}")]
    OutOfRange {
        /// Name of the offending field.
        field: String,
        /// Smallest admissible value.
        min: u32,
        /// Largest admissible value.
        max: u32,
        /// The rejected value.
        got: u32,
    },

    /// The item list was empty; there is nothing to solve.
    #[error("nothing to solve: the item list is empty")]
    NoItems,
}

/// Unvalidated problem shape as it appears in YAML problem files.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ProblemFile {
    groups: u32,
    capacity: u32,
    rate: u32,
    items: Vec<Item>,
}

/// A validated problem instance: the group count, the shared capacity and
/// rate, and the full ordered item collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ProblemFile", into = "ProblemFile")]
pub struct Problem {
    groups: u32,
    capacity: u32,
    rate: u32,
    items: Vec<Item>,
}

impl Problem {
    /// Validates and constructs a problem instance.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when a parameter or item field is out of
    /// range, or when the item list is empty.
    pub fn new(
        groups: u32,
        capacity: u32,
        rate: u32,
        items: Vec<Item>,
    ) -> Result<Self, ConfigError> {
        check_range("groups (G)", groups, 1, MAX_GROUPS)?;
        check_range("capacity (T)", capacity, 1, MAX_CAPACITY)?;
        check_range("rate (R)", rate, 0, MAX_RATE)?;

        if items.is_empty() {
            return Err(ConfigError::NoItems);
        }

        for (index, item) in items.iter().enumerate() {
            check_range(format!("item {index} value"), item.value(), 1, MAX_ITEM_VALUE)?;
            check_range(
                format!("item {index} weight"),
                item.base_weight(),
                1,
                MAX_ITEM_WEIGHT,
            )?;
            check_range(format!("item {index} group"), item.group(), 0, groups - 1)?;
        }

        Ok(Self {
            groups,
            capacity,
            rate,
            items,
        })
    }

    /// Loads and validates a problem from a YAML problem file.
    ///
    /// # Errors
    ///
    /// Returns a [`serde_norway::Error`] when the document cannot be parsed
    /// or fails validation.
    pub fn from_yaml(yaml: &str) -> Result<Self, serde_norway::Error> {
        serde_norway::from_str(yaml)
    }

    /// Returns the group count (`G`).
    pub fn groups(&self) -> u32 {
        self.groups
    }

    /// Returns the shared per-group capacity (`T`).
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Returns the shared rate (`R`).
    pub fn rate(&self) -> u32 {
        self.rate
    }

    /// Returns the full item collection, in input order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }
}

impl TryFrom<ProblemFile> for Problem {
    type Error = ConfigError;

    fn try_from(file: ProblemFile) -> Result<Self, Self::Error> {
        Self::new(file.groups, file.capacity, file.rate, file.items)
    }
}

impl From<Problem> for ProblemFile {
    fn from(problem: Problem) -> Self {
        Self {
            groups: problem.groups,
            capacity: problem.capacity,
            rate: problem.rate,
            items: problem.items,
        }
    }
}

/// Checks that `got` lies in `min..=max`, naming the field on failure.
fn check_range(
    field: impl Into<String>,
    got: u32,
    min: u32,
    max: u32,
) -> Result<(), ConfigError> {
    if got < min || got > max {
        return Err(ConfigError::OutOfRange {
            field: field.into(),
            min,
            max,
            got,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_problem_passes_validation() {
        let problem = Problem::new(2, 10, 1, vec![Item::new(10, 2, 0), Item::new(5, 3, 1)]);

        assert!(problem.is_ok(), "expected a valid problem");
    }

    #[test]
    fn zero_groups_is_rejected() {
        let err = Problem::new(0, 10, 1, vec![Item::new(10, 2, 0)]).err();

        assert!(
            matches!(err, Some(ConfigError::OutOfRange { ref field, .. }) if field == "groups (G)"),
            "expected groups rejection, got {err:?}"
        );
    }

    #[test]
    fn zero_capacity_is_rejected() {
        let err = Problem::new(1, 0, 1, vec![Item::new(10, 2, 0)]).err();

        assert!(
            matches!(err, Some(ConfigError::OutOfRange { ref field, .. }) if field == "capacity (T)"),
            "expected capacity rejection, got {err:?}"
        );
    }

    #[test]
    fn oversized_rate_is_rejected() {
        let err = Problem::new(1, 10, MAX_RATE + 1, vec![Item::new(10, 2, 0)]).err();

        assert!(
            matches!(err, Some(ConfigError::OutOfRange { ref field, .. }) if field == "rate (R)"),
            "expected rate rejection, got {err:?}"
        );
    }

    #[test]
    fn empty_item_list_is_a_distinct_error() {
        let err = Problem::new(1, 10, 0, Vec::new()).err();

        assert!(
            matches!(err, Some(ConfigError::NoItems)),
            "expected NoItems, got {err:?}"
        );
    }

    #[test]
    fn zero_value_item_is_rejected_with_its_index() {
        let items = vec![Item::new(10, 2, 0), Item::new(0, 3, 0)];
        let err = Problem::new(1, 10, 0, items).err();

        assert!(
            matches!(err, Some(ConfigError::OutOfRange { ref field, .. }) if field == "item 1 value"),
            "expected item value rejection, got {err:?}"
        );
    }

    #[test]
    fn item_group_outside_group_count_is_rejected() {
        let err = Problem::new(2, 10, 0, vec![Item::new(10, 2, 2)]).err();

        assert!(
            matches!(err, Some(ConfigError::OutOfRange { ref field, got: 2, .. }) if field == "item 0 group"),
            "expected item group rejection, got {err:?}"
        );
    }

    #[test]
    fn yaml_problem_file_round_trips_through_validation() {
        let yaml = "groups: 2\ncapacity: 10\nrate: 1\nitems:\n  - value: 10\n    weight: 2\n    group: 0\n  - value: 5\n    weight: 3\n    group: 1\n";

        let problem = Problem::from_yaml(yaml);

        assert!(
            matches!(problem, Ok(ref p) if p.items().len() == 2 && p.capacity() == 10),
            "expected parsed problem, got {problem:?}"
        );
    }

    #[test]
    fn yaml_problem_file_with_invalid_group_fails_validation() {
        let yaml = "groups: 1\ncapacity: 10\nrate: 1\nitems:\n  - value: 10\n    weight: 2\n    group: 5\n";

        assert!(
            Problem::from_yaml(yaml).is_err(),
            "expected validation failure for out-of-range item group"
        );
    }
}
