//! Todo Model
//!
//! Owns the authoritative todo list and the active filter. Every mutation
//! rewrites the persisted snapshot and then notifies subscribers
//! synchronously, in registration order.

use crate::config::ModelConfig;
use crate::domain::{Filter, Todo, TodoId, TodoPatch};
use crate::storage::{KeyValueStore, SnapshotStore};

/// Change notification sent to subscribers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelEvent {
    /// The list changed and has been persisted
    TodosChanged,
    /// The filter was re-derived from the address bar
    FilterChanged(Filter),
}

/// Handle returned by `subscribe`, used to unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(usize);

type Listener = Box<dyn FnMut(&ModelEvent)>;

pub struct TodoModel<S> {
    todos: Vec<Todo>,
    filter: Filter,
    /// `None` once a saved id reached the top of the id space
    next_id: Option<TodoId>,
    snapshots: SnapshotStore<S>,
    listeners: Vec<(ListenerId, Listener)>,
    next_listener: usize,
}

impl<S: KeyValueStore> TodoModel<S> {
    /// Load the saved list from `store` and the filter from `fragment`
    pub fn new(store: S, config: &ModelConfig, fragment: &str) -> Self {
        let snapshots = SnapshotStore::new(store, config.storage_key.clone());
        let todos = snapshots.load();
        // Ids keep counting up from the highest saved id, so deleting and
        // re-adding never hands out an id that is still in use.
        let next_id = match todos.iter().map(|t| t.id).max() {
            Some(max) => max.checked_next(),
            None => Some(TodoId::default()),
        };
        if next_id.is_none() {
            tracing::warn!(key = snapshots.key(), "saved todo ids exhausted the id space, reusing free ids");
        }
        let filter = Filter::from_fragment(fragment);
        tracing::debug!(count = todos.len(), ?filter, key = snapshots.key(), "loaded todos");

        Self {
            todos,
            filter,
            next_id,
            snapshots,
            listeners: Vec::new(),
            next_listener: 0,
        }
    }

    /// Append a new active todo. The caller trims the title.
    pub fn add(&mut self, title: impl Into<String>) -> TodoId {
        let id = self.allocate_id();
        self.todos.push(Todo::new(id, title));
        tracing::debug!(%id, "added todo");
        self.commit();
        id
    }

    pub fn mark_complete(&mut self, id: TodoId) -> bool {
        self.update(&TodoPatch::completed(id, true))
    }

    pub fn mark_incomplete(&mut self, id: TodoId) -> bool {
        self.update(&TodoPatch::completed(id, false))
    }

    pub fn mark_all_complete(&mut self) {
        self.set_all_completed(true);
    }

    pub fn mark_all_incomplete(&mut self) {
        self.set_all_completed(false);
    }

    /// Merge `patch` into the todo with the same id.
    /// Returns false, without persisting or notifying, if no todo matches.
    pub fn update(&mut self, patch: &TodoPatch) -> bool {
        let Some(todo) = self.todos.iter_mut().find(|t| t.id == patch.id) else {
            tracing::debug!(id = %patch.id, "update of unknown todo ignored");
            return false;
        };
        todo.apply(patch);
        tracing::debug!(id = %patch.id, "updated todo");
        self.commit();
        true
    }

    /// Remove the todo with `id`.
    /// Returns false, without persisting or notifying, if no todo matches.
    pub fn delete(&mut self, id: TodoId) -> bool {
        let Some(index) = self.todos.iter().position(|t| t.id == id) else {
            tracing::debug!(%id, "delete of unknown todo ignored");
            return false;
        };
        self.todos.remove(index);
        tracing::debug!(%id, "deleted todo");
        self.commit();
        true
    }

    /// Remove every completed todo, returning how many were removed
    pub fn delete_completed(&mut self) -> usize {
        let before = self.todos.len();
        self.todos.retain(|t| !t.completed);
        let removed = before - self.todos.len();
        tracing::debug!(removed, "cleared completed todos");
        self.commit();
        removed
    }

    fn allocate_id(&mut self) -> TodoId {
        match self.next_id {
            Some(id) => {
                self.next_id = id.checked_next();
                id
            }
            None => lowest_free_id(&self.todos),
        }
    }

    fn set_all_completed(&mut self, completed: bool) {
        for todo in &mut self.todos {
            todo.completed = completed;
        }
        tracing::debug!(completed, count = self.todos.len(), "marked all todos");
        self.commit();
    }

    /// Persist the full list, then notify. A failed write is logged and the
    /// in-memory state is kept.
    fn commit(&mut self) {
        if let Err(e) = self.snapshots.save(&self.todos) {
            tracing::error!(key = self.snapshots.key(), error = %e, "failed to persist todos");
        }
        self.notify(ModelEvent::TodosChanged);
    }
}

impl<S> TodoModel<S> {
    /// Re-derive the filter from the address bar fragment and notify.
    /// The list and the snapshot are left alone.
    pub fn navigate(&mut self, fragment: &str) -> Filter {
        self.filter = Filter::from_fragment(fragment);
        tracing::debug!(filter = ?self.filter, fragment, "filter changed");
        self.notify(ModelEvent::FilterChanged(self.filter));
        self.filter
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&ModelEvent) + 'static) -> ListenerId {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    fn notify(&mut self, event: ModelEvent) {
        for (_, listener) in &mut self.listeners {
            listener(&event);
        }
    }

    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    pub fn get(&self, id: TodoId) -> Option<&Todo> {
        self.todos.iter().find(|t| t.id == id)
    }

    pub fn filter(&self) -> Filter {
        self.filter
    }

    /// Todos visible under the current filter, in list order
    pub fn filtered_todos(&self) -> impl Iterator<Item = &Todo> + '_ {
        let filter = self.filter;
        self.todos.iter().filter(move |t| filter.matches(t))
    }

    pub fn todo_count(&self) -> usize {
        self.todos.len()
    }

    pub fn active_count(&self) -> usize {
        self.todos.iter().filter(|t| !t.completed).count()
    }

    pub fn completed_count(&self) -> usize {
        self.todos.iter().filter(|t| t.completed).count()
    }

    pub fn has_todos(&self) -> bool {
        !self.todos.is_empty()
    }

    pub fn has_completed(&self) -> bool {
        self.todos.iter().any(|t| t.completed)
    }

    /// True iff the list is non-empty and every todo is completed
    pub fn is_all_complete(&self) -> bool {
        self.has_todos() && self.todos.iter().all(|t| t.completed)
    }
}

/// Smallest id not held by any todo
fn lowest_free_id(todos: &[Todo]) -> TodoId {
    let mut ids: Vec<u64> = todos.iter().map(|t| t.id.0).collect();
    ids.sort_unstable();
    ids.dedup();
    let free = ids
        .iter()
        .zip(0u64..)
        .find(|(id, expected)| **id != *expected)
        .map_or(ids.len() as u64, |(_, expected)| expected);
    TodoId(free)
}
