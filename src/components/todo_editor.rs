//! Todo Editor Component
//!
//! Inline edit field. `change` commits, `blur` and Escape discard.

use leptos::html;
use leptos::prelude::*;

use crate::controller::use_controller;

#[component]
pub fn TodoEditor(title: String) -> impl IntoView {
    let controller = use_controller();
    let input_ref = NodeRef::<html::Input>::new();

    // Focus once mounted
    Effect::new(move |_| {
        if let Some(input) = input_ref.get() {
            let _ = input.focus();
        }
    });

    view! {
        <input
            class="edit"
            node_ref=input_ref
            value=title
            on:change=move |ev| controller.commit_edit(&event_target_value(&ev))
            on:blur=move |_| controller.cancel_edit()
            on:keydown=move |ev: web_sys::KeyboardEvent| {
                if ev.key() == "Escape" {
                    controller.cancel_edit();
                }
            }
        />
    }
}
