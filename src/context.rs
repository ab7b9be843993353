//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;
use todo_core::{ItemEditor, TodoModel};

use crate::storage::BrowserStore;

pub type Model = TodoModel<BrowserStore>;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// The todo model; not Send, so it lives in local storage
    model: StoredValue<Model, LocalStorage>,
    /// Bumped by the model's change notification - read
    pub version: ReadSignal<u32>,
    /// Which todo is being edited inline
    pub editor: RwSignal<ItemEditor>,
}

impl AppContext {
    /// Take ownership of `model` and subscribe to its change notification
    pub fn new(mut model: Model) -> Self {
        let (version, set_version) = signal(0u32);
        model.subscribe(move |event| {
            tracing::trace!(?event, "model changed");
            set_version.update(|v| *v = v.wrapping_add(1));
        });

        Self {
            model: StoredValue::new_local(model),
            version,
            editor: RwSignal::new(ItemEditor::new()),
        }
    }

    /// Read model state; reactive callers re-run on every model change
    pub fn with_model<R>(&self, f: impl FnOnce(&Model) -> R) -> R {
        self.version.track();
        self.model.with_value(f)
    }

    /// Mutate the model. `None` once the app has been torn down.
    pub fn update_model<R>(&self, f: impl FnOnce(&mut Model) -> R) -> Option<R> {
        self.model.try_update_value(f)
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
