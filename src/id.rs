//! Item identifiers
//!
//! Positional indices shift whenever the list changes, so every item also
//! carries an opaque `ItemId` handed out by its list at creation time.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identifier for a todo item within one list.
///
/// Display format: `item-{n:04}`
/// Example: `item-0007`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(u64);

impl ItemId {
    /// The first identifier a fresh list hands out
    pub const FIRST: ItemId = ItemId(1);

    /// Wrap a raw identifier value
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Get the raw value
    pub fn get(self) -> u64 {
        self.0
    }

    /// The identifier following this one, or `None` once the id space is used up
    pub fn next(self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

impl Default for ItemId {
    fn default() -> Self {
        Self::FIRST
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "item-{:04}", self.0)
    }
}
