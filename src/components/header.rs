//! Header Component
//!
//! Title and the add box for new todos.

use leptos::prelude::*;

use crate::controller::use_controller;

#[component]
pub fn Header() -> impl IntoView {
    let controller = use_controller();
    let new_title = RwSignal::new(String::new());

    view! {
        <header class="header">
            <h1>"todos"</h1>
            <input
                id="new-todo"
                class="new-todo"
                placeholder="What needs to be done?"
                autofocus=true
                prop:value=move || new_title.get()
                on:input=move |ev| new_title.set(event_target_value(&ev))
                on:keydown=move |ev: web_sys::KeyboardEvent| {
                    if ev.key() == "Enter" {
                        controller.add_todo(new_title);
                    }
                }
            />
        </header>
    }
}
