//! Footer Component
//!
//! Counter, filter links and the clear-completed button.

use leptos::prelude::*;
use todo_core::{Filter, ViewEvent};

use crate::context::use_app_context;
use crate::controller::use_controller;

#[component]
pub fn Footer() -> impl IntoView {
    let ctx = use_app_context();
    let controller = use_controller();

    let count = move || ctx.with_model(|m| m.todo_count());
    let has_completed = move || ctx.with_model(|m| m.has_completed());

    view! {
        <footer
            class="footer"
            style:display=move || if ctx.with_model(|m| m.has_todos()) { "block" } else { "none" }
        >
            <span class="todo-count">
                <strong>{count}</strong>
                {move || if count() == 1 { " item" } else { " items" }}
            </span>
            <ul class="filters">
                {Filter::ALL.iter().map(|filter| {
                    let filter = *filter;
                    let is_selected = move || ctx.with_model(|m| m.filter() == filter);
                    view! {
                        <li>
                            <a href=filter.fragment() class:selected=is_selected>
                                {filter.label()}
                            </a>
                        </li>
                    }
                }).collect_view()}
            </ul>
            <button
                class="clear-completed"
                style:display=move || if has_completed() { "initial" } else { "none" }
                on:click=move |_| {
                    controller.handle(ViewEvent::ClearCompleted);
                }
            >
                "Clear completed"
            </button>
        </footer>
    }
}
