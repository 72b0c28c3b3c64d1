//! New Item Form Component
//!
//! Text input plus category selector for appending items.

use leptos::html;
use leptos::prelude::*;

use crate::constants::{CATEGORIES, DEFAULT_CATEGORY};
use crate::context::AppContext;

/// Form for adding items to the end of the list
#[component]
pub fn NewItemForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (new_text, set_new_text) = signal(String::new());
    let (category, set_category) = signal(String::from(DEFAULT_CATEGORY));
    let input_ref: NodeRef<html::Input> = NodeRef::new();

    let focus_input = move || {
        if let Some(input) = input_ref.get_untracked() {
            let _ = input.focus();
        }
    };

    // Focus once the input is mounted
    Effect::new(move |_| {
        if let Some(input) = input_ref.get() {
            let _ = input.focus();
        }
    });

    let add_item = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        // Blank text is rejected by the list; just hand focus back
        if ctx.add(&new_text.get_untracked(), &category.get_untracked()) {
            set_new_text.set(String::new());
            set_category.set(DEFAULT_CATEGORY.to_string());
        }
        focus_input();
    };

    view! {
        <form id="form" class="new-item-form" on:submit=add_item>
            <input
                id="cosa"
                type="text"
                placeholder="Agregar artículo..."
                autocomplete="off"
                node_ref=input_ref
                prop:value=move || new_text.get()
                on:input=move |ev| set_new_text.set(event_target_value(&ev))
            />
            <select
                id="category"
                prop:value=move || category.get()
                on:change=move |ev| set_category.set(event_target_value(&ev))
            >
                {CATEGORIES.iter().map(|name| view! {
                    <option value=*name>{*name}</option>
                }).collect_view()}
            </select>
            <button type="submit" class="btn-add">"Agregar"</button>
        </form>
    }
}
