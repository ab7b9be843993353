//! Toggle All Component

use leptos::prelude::*;
use todo_core::ViewEvent;

use crate::context::use_app_context;
use crate::controller::use_controller;

/// Checkbox marking every todo complete or incomplete
#[component]
pub fn ToggleAll() -> impl IntoView {
    let ctx = use_app_context();
    let controller = use_controller();

    view! {
        <input
            id="toggle-all"
            class="toggle-all"
            type="checkbox"
            prop:checked=move || ctx.with_model(|m| m.is_all_complete())
            on:change=move |ev| {
                controller.handle(ViewEvent::ToggleAll(event_target_checked(&ev)));
            }
        />
        <label for="toggle-all">"Mark all as complete"</label>
    }
}
