//! Controller
//!
//! Forwards view events to the model held in the app context.

use leptos::prelude::*;
use todo_core::{dispatch, Dispatch, ViewEvent};

use crate::context::AppContext;

#[derive(Clone, Copy)]
pub struct Controller {
    ctx: AppContext,
}

impl Controller {
    pub fn new(ctx: AppContext) -> Self {
        Self { ctx }
    }

    pub fn handle(&self, event: ViewEvent) -> Dispatch {
        tracing::debug!(?event, "view event");
        self.ctx
            .update_model(|model| dispatch(model, event))
            .unwrap_or(Dispatch::Ignored)
    }

    /// Add the add-box text as a new todo and empty the box on success
    pub fn add_todo(&self, input: RwSignal<String>) {
        let value = input.get_untracked();
        if self.handle(ViewEvent::Add(value)) == Dispatch::ClearInput {
            input.set(String::new());
        }
    }

    /// Submit the open inline edit with the edit field's value
    pub fn commit_edit(&self, value: &str) {
        let commit = self.ctx.editor.try_update(|editor| editor.commit(value)).flatten();
        if let Some(commit) = commit {
            self.handle(ViewEvent::Edit(commit));
        }
    }

    /// Close the inline editor without committing
    pub fn cancel_edit(&self) {
        self.ctx.editor.update(|editor| {
            editor.close();
        });
    }
}

pub fn use_controller() -> Controller {
    expect_context::<Controller>()
}
