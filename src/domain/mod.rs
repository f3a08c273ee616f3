//! Domain types for todolist
//!
//! - TodoItem: one entry with text, completion flag and a stable id
//! - TodoList: the ordered sequence of items; display order is the only order

pub mod item;
pub mod list;

pub use item::TodoItem;
pub use list::TodoList;
