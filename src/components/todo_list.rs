//! Todo List Component
//!
//! Rebuilt in full whenever the model changes.

use leptos::prelude::*;
use todo_core::Todo;

use crate::components::TodoItem;
use crate::context::use_app_context;

#[component]
pub fn TodoList() -> impl IntoView {
    let ctx = use_app_context();
    let visible = move || ctx.with_model(|m| m.filtered_todos().cloned().collect::<Vec<Todo>>());

    view! {
        <ul class="todo-list">
            {move || {
                visible()
                    .into_iter()
                    .map(|todo| view! { <TodoItem todo=todo /> })
                    .collect_view()
            }}
        </ul>
    }
}
