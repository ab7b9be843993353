//! Todo Entity
//!
//! A single entry of the todo list.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a todo record, persisted as a plain JSON number
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(pub u64);

impl TodoId {
    /// The id after this one, `None` once the id space is used up
    pub fn checked_next(self) -> Option<Self> {
        self.0.checked_add(1).map(TodoId)
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A todo record
///
/// Field order matches the persisted snapshot: `{"id":0,"completed":false,"title":"..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: TodoId,
    pub completed: bool,
    pub title: String,
}

impl Todo {
    /// Create a new, not yet completed todo
    pub fn new(id: TodoId, title: impl Into<String>) -> Self {
        Self {
            id,
            completed: false,
            title: title.into(),
        }
    }

    /// Merge the fields present in `patch` into this record.
    /// The id is never changed.
    pub fn apply(&mut self, patch: &TodoPatch) {
        if let Some(title) = &patch.title {
            self.title = title.clone();
        }
        if let Some(completed) = patch.completed {
            self.completed = completed;
        }
    }
}

/// Partial update of a todo, matched by `id`
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TodoPatch {
    pub id: TodoId,
    pub title: Option<String>,
    pub completed: Option<bool>,
}

impl TodoPatch {
    pub fn title(id: TodoId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: Some(title.into()),
            completed: None,
        }
    }

    pub fn completed(id: TodoId, completed: bool) -> Self {
        Self {
            id,
            title: None,
            completed: Some(completed),
        }
    }
}

impl From<&Todo> for TodoPatch {
    fn from(todo: &Todo) -> Self {
        Self {
            id: todo.id,
            title: Some(todo.title.clone()),
            completed: Some(todo.completed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_todo_creation() {
        let todo = Todo::new(TodoId(3), "buy milk");
        assert_eq!(todo.id, TodoId(3));
        assert_eq!(todo.title, "buy milk");
        assert!(!todo.completed);
    }

    #[test]
    fn test_snapshot_field_layout() {
        let todo = Todo::new(TodoId(0), "x");
        let json = serde_json::to_string(&todo).unwrap();
        assert_eq!(json, r#"{"id":0,"completed":false,"title":"x"}"#);
    }

    #[test]
    fn test_apply_partial_patch() {
        let mut todo = Todo::new(TodoId(1), "old");
        todo.apply(&TodoPatch::completed(TodoId(1), true));
        assert!(todo.completed);
        assert_eq!(todo.title, "old");

        todo.apply(&TodoPatch::title(TodoId(1), "new"));
        assert_eq!(todo.title, "new");
        assert!(todo.completed);
    }

    #[test]
    fn test_checked_next() {
        assert_eq!(TodoId(0).checked_next(), Some(TodoId(1)));
        assert_eq!(TodoId(u64::MAX).checked_next(), None);
    }

    #[test]
    fn test_apply_ignores_patch_id() {
        let mut todo = Todo::new(TodoId(1), "a");
        todo.apply(&TodoPatch::title(TodoId(9), "b"));
        assert_eq!(todo.id, TodoId(1));
    }
}
