//! Todo item type

use crate::id::ItemId;
use serde::{Deserialize, Serialize};

/// A single entry in a todo list.
///
/// Text and identity are fixed at creation; only the completion flag
/// changes afterwards, and only through a toggle transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    id: ItemId,
    text: String,
    complete: bool,
}

impl TodoItem {
    pub(crate) fn new(id: ItemId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            complete: false,
        }
    }

    /// Stable identifier assigned when the item was added
    pub fn id(&self) -> ItemId {
        self.id
    }

    /// The item text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether the item is marked complete
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    pub(crate) fn toggled(&self) -> Self {
        Self {
            complete: !self.complete,
            ..self.clone()
        }
    }
}
