//! Item Editor
//!
//! Tracks which todo, if any, is being edited inline. At most one edit is
//! open at a time; opening another closes the previous one.

use crate::domain::{Todo, TodoId};

/// A submitted edit: the todo and the raw text of the edit field.
/// An empty (after trimming) title is a delete request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditCommit {
    pub id: TodoId,
    pub title: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemEditor {
    editing: Option<TodoId>,
}

impl ItemEditor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start editing `todo`, returning the edit this one replaced
    pub fn open(&mut self, todo: &Todo) -> Option<TodoId> {
        let previous = self.close();
        self.editing = Some(todo.id);
        previous
    }

    /// Discard the open edit, if any
    pub fn close(&mut self) -> Option<TodoId> {
        self.editing.take()
    }

    pub fn editing(&self) -> Option<TodoId> {
        self.editing
    }

    pub fn is_editing(&self, id: TodoId) -> bool {
        self.editing == Some(id)
    }

    /// Submit `value` for the open edit and close it.
    /// Nothing is committed when no edit is open.
    pub fn commit(&mut self, value: &str) -> Option<EditCommit> {
        self.close().map(|id| EditCommit {
            id,
            title: value.to_string(),
        })
    }
}
