//! todolist - an ordered todo list with pure state transitions
//!
//! The list's display order is its only order. Every mutation (add, toggle,
//! move up, move down, remove) is a function from the current list to the
//! next one; a rejected mutation returns an error and leaves the current
//! list as it was.

pub mod command;
pub mod domain;
pub mod error;
pub mod id;
pub mod input;
pub mod script;
pub mod session;
pub mod store;

pub use command::Command;
pub use domain::{TodoItem, TodoList};
pub use error::{Result, TodoError};
pub use id::ItemId;
pub use input::PendingInput;
pub use script::{LineError, ReplayReport};
pub use session::Session;
