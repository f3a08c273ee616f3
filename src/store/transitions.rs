//! The five list transitions.
//!
//! Every function takes the current list by reference and returns the next
//! list. The input is never modified; on error nothing is returned but the
//! error, so a rejected transition leaves the caller holding the old state.

use crate::domain::{TodoItem, TodoList};
use crate::error::{Result, TodoError};
use log::{debug, warn};

/// Append a new, incomplete item to the end of the list.
///
/// The text is stored exactly as supplied. Text that is empty or only
/// whitespace is rejected with `InvalidInput`.
pub fn add(list: &TodoList, text: &str) -> Result<TodoList> {
    if text.trim().is_empty() {
        warn!("add rejected: item text is empty");
        return Err(TodoError::InvalidInput("item text is empty".to_string()));
    }

    let mut next = list.clone();
    let id = next.allocate_id()?;
    next.items.push(TodoItem::new(id, text));
    debug!("add: {} -> len={}", id, next.len());
    Ok(next)
}

/// Flip the completion flag of the item at `index`.
pub fn toggle(list: &TodoList, index: usize) -> Result<TodoList> {
    check_index(list, index, "toggle")?;

    let mut next = list.clone();
    next.items[index] = list.items[index].toggled();
    debug!("toggle: index={} complete={}", index, next.items[index].is_complete());
    Ok(next)
}

/// Swap the item at `index` with the one above it.
///
/// At the first position this is an identity transition.
pub fn move_up(list: &TodoList, index: usize) -> Result<TodoList> {
    check_index(list, index, "move_up")?;

    if index == 0 {
        debug!("move_up: index=0 is already first");
        return Ok(list.clone());
    }

    let mut next = list.clone();
    next.items.swap(index, index - 1);
    debug!("move_up: {} -> {}", index, index - 1);
    Ok(next)
}

/// Swap the item at `index` with the one below it.
///
/// At the last position this is an identity transition.
pub fn move_down(list: &TodoList, index: usize) -> Result<TodoList> {
    check_index(list, index, "move_down")?;

    if list.is_last(index) {
        debug!("move_down: index={} is already last", index);
        return Ok(list.clone());
    }

    let mut next = list.clone();
    next.items.swap(index, index + 1);
    debug!("move_down: {} -> {}", index, index + 1);
    Ok(next)
}

/// Delete the item at `index`; later items shift down by one.
pub fn remove(list: &TodoList, index: usize) -> Result<TodoList> {
    check_index(list, index, "remove")?;

    let mut next = list.clone();
    let removed = next.items.remove(index);
    debug!("remove: index={} id={} -> len={}", index, removed.id(), next.len());
    Ok(next)
}

fn check_index(list: &TodoList, index: usize, op: &str) -> Result<()> {
    if index < list.len() {
        Ok(())
    } else {
        warn!("{} rejected: index {} out of range (len={})", op, index, list.len());
        Err(TodoError::out_of_range(index, list.len()))
    }
}
