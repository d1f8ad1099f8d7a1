//! Side-by-side comparison set.

use serde::{Deserialize, Serialize};

use crate::ids::ProductId;

/// Most products that can be compared at once.
pub const MAX_COMPARISON: usize = 4;

/// Fewest products needed before a comparison makes sense.
pub const MIN_TO_COMPARE: usize = 2;

/// Result of a toggle request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ToggleOutcome {
    Added,
    Removed,
    /// The set was full; nothing changed.
    AtCapacity,
}

/// Ordered set of product ids picked for comparison.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonSet {
    ids: Vec<ProductId>,
}

impl ComparisonSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove the id if present, otherwise add it while there is room.
    ///
    /// Adds past [`MAX_COMPARISON`] are ignored and reported as
    /// [`ToggleOutcome::AtCapacity`].
    pub fn toggle(&mut self, id: &ProductId) -> ToggleOutcome {
        if let Some(pos) = self.ids.iter().position(|i| i == id) {
            self.ids.remove(pos);
            return ToggleOutcome::Removed;
        }
        if self.ids.len() >= MAX_COMPARISON {
            return ToggleOutcome::AtCapacity;
        }
        self.ids.push(id.clone());
        ToggleOutcome::Added
    }

    pub fn contains(&self, id: &ProductId) -> bool {
        self.ids.contains(id)
    }

    pub fn ids(&self) -> &[ProductId] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Whether the compare action is enabled.
    pub fn can_compare(&self) -> bool {
        self.ids.len() >= MIN_TO_COMPARE
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }
}
