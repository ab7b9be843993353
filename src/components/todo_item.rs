//! Todo Item Component
//!
//! One row of the list: checkbox, title, destroy button, and the inline
//! editor while this todo is being edited.

use leptos::prelude::*;
use todo_core::{Todo, ViewEvent};

use crate::components::TodoEditor;
use crate::context::use_app_context;
use crate::controller::use_controller;

#[component]
pub fn TodoItem(todo: Todo) -> impl IntoView {
    let ctx = use_app_context();
    let controller = use_controller();

    let id = todo.id;
    let completed = todo.completed;
    let title = todo.title.clone();
    let edit_title = todo.title.clone();

    let is_editing = move || ctx.editor.with(|editor| editor.is_editing(id));
    let item_class = move || {
        let mut c = Vec::new();
        if completed { c.push("completed"); }
        if is_editing() { c.push("editing"); }
        c.join(" ")
    };

    view! {
        <li class=item_class data-id=id.to_string()>
            <div class="view">
                <input
                    class="toggle"
                    type="checkbox"
                    prop:checked=completed
                    on:change=move |ev| {
                        let event = if event_target_checked(&ev) {
                            ViewEvent::Check(id)
                        } else {
                            ViewEvent::Uncheck(id)
                        };
                        controller.handle(event);
                    }
                />
                <label on:dblclick=move |_| {
                    ctx.editor.update(|editor| {
                        editor.open(&todo);
                    });
                }>
                    {title}
                </label>
                <button class="destroy" on:click=move |_| {
                    controller.handle(ViewEvent::Delete(id));
                }></button>
            </div>
            <Show when=is_editing>
                <TodoEditor title=edit_title.clone() />
            </Show>
        </li>
    }
}
