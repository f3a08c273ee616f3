//! Editing session
//!
//! A `Session` owns the current list and the pending input buffer. Each
//! operation computes the next list with a store transition and commits it
//! only when the transition succeeds.

use crate::command::Command;
use crate::domain::TodoList;
use crate::error::{Result, TodoError};
use crate::input::PendingInput;
use crate::store;
use log::{debug, info};

/// Current list plus pending input for one user session.
#[derive(Debug, Clone, Default)]
pub struct Session {
    list: TodoList,
    pending: PendingInput,
}

impl Session {
    /// Start a session with an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a session from an existing list.
    pub fn with_list(list: TodoList) -> Self {
        Self {
            list,
            pending: PendingInput::new(),
        }
    }

    /// The current list
    pub fn list(&self) -> &TodoList {
        &self.list
    }

    /// Consume the session, returning the current list
    pub fn into_list(self) -> TodoList {
        self.list
    }

    /// The pending input buffer
    pub fn pending(&self) -> &PendingInput {
        &self.pending
    }

    /// Mutable access to the pending input buffer
    pub fn pending_mut(&mut self) -> &mut PendingInput {
        &mut self.pending
    }

    /// Add the pending text as a new item and clear the buffer.
    ///
    /// If the text is rejected, both the list and the buffer are kept.
    pub fn submit(&mut self) -> Result<()> {
        let next = store::add(&self.list, self.pending.content())?;
        self.commit(next);
        self.pending.clear();
        Ok(())
    }

    /// Enter `text` into the pending buffer and submit it.
    pub fn add(&mut self, text: &str) -> Result<()> {
        self.pending.set(text);
        self.submit()
    }

    pub fn toggle(&mut self, index: usize) -> Result<()> {
        let next = store::toggle(&self.list, index)?;
        self.commit(next);
        Ok(())
    }

    pub fn move_up(&mut self, index: usize) -> Result<()> {
        let next = store::move_up(&self.list, index)?;
        self.commit(next);
        Ok(())
    }

    pub fn move_down(&mut self, index: usize) -> Result<()> {
        let next = store::move_down(&self.list, index)?;
        self.commit(next);
        Ok(())
    }

    pub fn remove(&mut self, index: usize) -> Result<()> {
        let next = store::remove(&self.list, index)?;
        self.commit(next);
        Ok(())
    }

    /// Apply a parsed command.
    ///
    /// Returns `true` when the list changed.
    pub fn apply(&mut self, command: &Command) -> Result<bool> {
        info!("Applying command: {}", command);
        let before = self.list.clone();

        match command {
            Command::Add(text) => self.add(text)?,
            Command::Toggle(i) => {
                let index = self.resolve(*i)?;
                self.toggle(index)?
            }
            Command::MoveUp(i) => {
                let index = self.resolve(*i)?;
                self.move_up(index)?
            }
            Command::MoveDown(i) => {
                let index = self.resolve(*i)?;
                self.move_down(index)?
            }
            Command::Remove(i) => {
                let index = self.resolve(*i)?;
                self.remove(index)?
            }
            Command::List => {}
        }

        Ok(self.list != before)
    }

    /// Convert a signed index from the command language to a list position.
    fn resolve(&self, index: i64) -> Result<usize> {
        usize::try_from(index).map_err(|_| TodoError::IndexOutOfRange {
            index,
            len: self.list.len(),
        })
    }

    fn commit(&mut self, next: TodoList) {
        debug!("commit: len {} -> {}", self.list.len(), next.len());
        self.list = next;
    }
}
