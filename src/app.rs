//! TodoMVC Frontend App
//!
//! Builds the model from storage and the address bar, wires the model's
//! change notification and the hashchange listener, and lays out the views.

use leptos::prelude::*;
use leptos_hashroute::{bind_hashchange, current_hash, normalize_fragment};
use todo_core::{TodoModel, ViewEvent};

use crate::components::{Footer, Header, TodoList, ToggleAll};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::controller::Controller;
use crate::storage::BrowserStore;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let model = TodoModel::new(BrowserStore::open(), &config.model, &current_hash());
    let ctx = AppContext::new(model);
    let controller = Controller::new(ctx);

    // Provide context to all children
    provide_context(ctx);
    provide_context(controller);

    // Filter links and back/forward both land here
    bind_hashchange(move |hash| {
        controller.handle(ViewEvent::Navigate(normalize_fragment(&hash)));
    });

    let has_todos = move || ctx.with_model(|m| m.has_todos());

    view! {
        <section class="todoapp">
            <Header />
            <section
                class="main"
                style:display=move || if has_todos() { "block" } else { "none" }
            >
                <ToggleAll />
                <TodoList />
            </section>
            <Footer />
        </section>
    }
}
