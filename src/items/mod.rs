//! Items

use std::fmt;

use serde::{Deserialize, Serialize};

pub mod groups;

/// An immutable item competing for a place in one group's selection.
///
/// The item's effective cost is not fixed: accepting it as the `k`-th member
/// of a group's selection costs `base_weight + rate * k`. See
/// [`Item::dynamic_weight`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    value: u32,
    #[serde(rename = "weight")]
    base_weight: u32,
    group: u32,
}

impl Item {
    /// Creates a new item with the given value, base weight and group index.
    #[must_use]
    pub fn new(value: u32, base_weight: u32, group: u32) -> Self {
        Self {
            value,
            base_weight,
            group,
        }
    }

    /// Returns the value of the item.
    pub fn value(&self) -> u32 {
        self.value
    }

    /// Returns the base weight of the item.
    pub fn base_weight(&self) -> u32 {
        self.base_weight
    }

    /// Returns the group index the item belongs to.
    pub fn group(&self) -> u32 {
        self.group
    }

    /// Effective cost of accepting this item at the given zero-based
    /// acceptance position: `base_weight + rate * position`.
    ///
    /// The position counts items already committed to the same group's
    /// candidate selection, not the item's place in the input. Widening to
    /// `u64` keeps the product exact for every admissible input.
    pub fn dynamic_weight(&self, rate: u32, position: u32) -> u64 {
        u64::from(self.base_weight) + u64::from(rate) * u64::from(position)
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(v={}, w={})", self.value, self.base_weight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_return_constructor_values() {
        let item = Item::new(15, 3, 2);

        assert_eq!(item.value(), 15);
        assert_eq!(item.base_weight(), 3);
        assert_eq!(item.group(), 2);
    }

    #[test]
    fn dynamic_weight_grows_linearly_with_position() {
        let item = Item::new(10, 4, 0);

        assert_eq!(item.dynamic_weight(3, 0), 4);
        assert_eq!(item.dynamic_weight(3, 1), 7);
        assert_eq!(item.dynamic_weight(3, 5), 19);
    }

    #[test]
    fn dynamic_weight_with_zero_rate_is_base_weight() {
        let item = Item::new(10, 4, 0);

        assert_eq!(item.dynamic_weight(0, 9), 4);
    }

    #[test]
    fn dynamic_weight_is_exact_at_the_range_extremes() {
        let item = Item::new(1, u32::MAX, 0);

        let weight = item.dynamic_weight(u32::MAX, u32::MAX);

        assert_eq!(
            weight,
            u64::from(u32::MAX) + u64::from(u32::MAX) * u64::from(u32::MAX)
        );
    }

    #[test]
    fn display_renders_value_and_base_weight() {
        let item = Item::new(10, 2, 0);

        assert_eq!(item.to_string(), "(v=10, w=2)");
    }
}
