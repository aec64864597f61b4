//! Item Groups
//!
//! Each group is solved as an independent instance, so the first step of any
//! solve is to partition the flat item collection into per-group
//! subsequences. Partitioning preserves the items' relative input order;
//! the solver relies on that order being stable for deterministic results.

use smallvec::SmallVec;

use crate::items::Item;

/// The ordered items backing one group's solver invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemGroup {
    index: u32,
    items: SmallVec<[Item; 8]>,
}

impl ItemGroup {
    /// Collects the ordered subsequence of `items` that belongs to the group
    /// with the given index, preserving relative order from the input.
    #[must_use]
    pub fn partition(items: &[Item], index: u32) -> Self {
        let items = items
            .iter()
            .copied()
            .filter(|item| item.group() == index)
            .collect();

        Self { index, items }
    }

    /// Returns the group index.
    pub fn index(&self) -> u32 {
        self.index
    }

    /// Returns the items in the group, in input order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Iterates over the items in the group.
    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    /// Returns the number of items in the group.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Checks whether the group has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
