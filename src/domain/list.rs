//! Ordered todo list value type
//!
//! A `TodoList` is an immutable-by-convention value: the transition methods
//! below return a new list and leave `self` untouched, so callers can keep
//! the previous state around and diff it against the next one.

use super::item::TodoItem;
use crate::error::{Result, TodoError};
use crate::id::ItemId;
use crate::store;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Ordered sequence of todo items. Position in the sequence is the only order.
///
/// Deserialization goes through [`RawTodoList`] so a snapshot can never
/// make the list hand out an id that one of its items already carries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawTodoList")]
pub struct TodoList {
    pub(crate) items: Vec<TodoItem>,
    pub(crate) next_id: ItemId,
}

/// Unchecked wire shape of a [`TodoList`].
#[derive(Debug, Deserialize)]
pub struct RawTodoList {
    items: Vec<TodoItem>,
    #[serde(default)]
    next_id: ItemId,
}

impl TryFrom<RawTodoList> for TodoList {
    type Error = TodoError;

    /// Rejects duplicate item ids; raises `next_id` past the largest item id.
    fn try_from(raw: RawTodoList) -> Result<Self> {
        let mut seen = HashSet::with_capacity(raw.items.len());
        for item in &raw.items {
            if !seen.insert(item.id()) {
                return Err(TodoError::InvalidSnapshot(format!("duplicate item id {}", item.id())));
            }
        }

        let next_id = match raw.items.iter().map(|item| item.id()).max() {
            Some(max) => {
                let after_max = max.next().ok_or_else(|| {
                    TodoError::InvalidSnapshot(format!("item id {} leaves no room for new items", max))
                })?;
                raw.next_id.max(after_max)
            }
            None => raw.next_id,
        };

        Ok(Self {
            items: raw.items,
            next_id,
        })
    }
}

impl TodoList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the list has no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Item at a position, if any
    pub fn get(&self, index: usize) -> Option<&TodoItem> {
        self.items.get(index)
    }

    /// Items in display order
    pub fn items(&self) -> &[TodoItem] {
        &self.items
    }

    /// Iterate items in display order
    pub fn iter(&self) -> std::slice::Iter<'_, TodoItem> {
        self.items.iter()
    }

    /// Current position of the item with the given id
    pub fn position_of(&self, id: ItemId) -> Option<usize> {
        self.items.iter().position(|item| item.id() == id)
    }

    /// Number of items marked complete
    pub fn completed_count(&self) -> usize {
        self.items.iter().filter(|item| item.is_complete()).count()
    }

    /// Number of items not yet complete
    pub fn pending_count(&self) -> usize {
        self.len() - self.completed_count()
    }

    /// Whether `index` is the last position
    pub fn is_last(&self, index: usize) -> bool {
        self.len().checked_sub(1) == Some(index)
    }

    /// Serialize the list as a JSON snapshot.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Restore a list from a JSON snapshot, rejecting snapshots with
    /// duplicate item ids.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub(crate) fn allocate_id(&mut self) -> Result<ItemId> {
        let id = self.next_id;
        self.next_id = id.next().ok_or(TodoError::IdsExhausted)?;
        Ok(id)
    }

    /// See [`store::add`].
    pub fn add(&self, text: &str) -> Result<TodoList> {
        store::add(self, text)
    }

    /// See [`store::toggle`].
    pub fn toggle(&self, index: usize) -> Result<TodoList> {
        store::toggle(self, index)
    }

    /// See [`store::move_up`].
    pub fn move_up(&self, index: usize) -> Result<TodoList> {
        store::move_up(self, index)
    }

    /// See [`store::move_down`].
    pub fn move_down(&self, index: usize) -> Result<TodoList> {
        store::move_down(self, index)
    }

    /// See [`store::remove`].
    pub fn remove(&self, index: usize) -> Result<TodoList> {
        store::remove(self, index)
    }
}

impl<'a> IntoIterator for &'a TodoList {
    type Item = &'a TodoItem;
    type IntoIter = std::slice::Iter<'a, TodoItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
