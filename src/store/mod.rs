//! Todo list store.
//!
//! Pure state transitions over a [`TodoList`](crate::domain::TodoList):
//! add, toggle, move up, move down and remove. Each takes the current list
//! and returns either the next list or an error; the current list is never
//! changed in place.
//!
//! # Example
//!
//! ```
//! use todolist::domain::TodoList;
//! use todolist::store;
//!
//! let list = store::add(&TodoList::new(), "buy milk")?;
//! let list = store::toggle(&list, 0)?;
//! assert!(list.get(0).unwrap().is_complete());
//! # Ok::<(), todolist::TodoError>(())
//! ```

mod transitions;

pub use transitions::{add, move_down, move_up, remove, toggle};
