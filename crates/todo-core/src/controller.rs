//! Controller
//!
//! Maps events raised by the views onto model operations.

use crate::domain::{TodoId, TodoPatch};
use crate::editor::EditCommit;
use crate::model::TodoModel;
use crate::storage::KeyValueStore;

/// User interaction raised by a view
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent {
    /// Text submitted in the add box (untrimmed)
    Add(String),
    /// Toggle-all checkbox changed
    ToggleAll(bool),
    Check(TodoId),
    Uncheck(TodoId),
    /// Inline edit submitted
    Edit(EditCommit),
    Delete(TodoId),
    ClearCompleted,
    /// The address bar fragment changed
    Navigate(String),
}

/// What the view should do after an event was handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// Nothing further
    Done,
    /// A todo was added; empty the add box
    ClearInput,
    /// The event was dropped
    Ignored,
}

pub fn dispatch<S: KeyValueStore>(model: &mut TodoModel<S>, event: ViewEvent) -> Dispatch {
    match event {
        ViewEvent::Add(value) => {
            let title = value.trim();
            if title.is_empty() {
                return Dispatch::Ignored;
            }
            model.add(title);
            Dispatch::ClearInput
        }
        ViewEvent::ToggleAll(checked) => {
            if checked {
                model.mark_all_complete();
            } else {
                model.mark_all_incomplete();
            }
            Dispatch::Done
        }
        ViewEvent::Check(id) => applied(model.mark_complete(id)),
        ViewEvent::Uncheck(id) => applied(model.mark_incomplete(id)),
        ViewEvent::Edit(EditCommit { id, title }) => {
            let title = title.trim();
            if title.is_empty() {
                applied(model.delete(id))
            } else {
                applied(model.update(&TodoPatch::title(id, title)))
            }
        }
        ViewEvent::Delete(id) => applied(model.delete(id)),
        ViewEvent::ClearCompleted => {
            model.delete_completed();
            Dispatch::Done
        }
        ViewEvent::Navigate(fragment) => {
            model.navigate(&fragment);
            Dispatch::Done
        }
    }
}

fn applied(matched: bool) -> Dispatch {
    if matched {
        Dispatch::Done
    } else {
        Dispatch::Ignored
    }
}
