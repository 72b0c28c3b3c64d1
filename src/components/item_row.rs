//! Item Row Component
//!
//! A single checklist entry: checkbox, name, category, delete button.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::models::Item;
use crate::store::{
    store_is_completed, store_is_completed_untracked, store_is_leaving, use_ui_store,
};

#[component]
pub fn ItemRow(item: Item) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_ui_store();

    let id = item.id;
    let completed = item.completed;
    let leaving = move || store_is_leaving(&store, id);

    let row_class = move || match (completed, leaving()) {
        (true, true) => "item completed leaving",
        (true, false) => "item completed",
        (false, true) => "item leaving",
        (false, false) => "item",
    };

    view! {
        <li class=row_class>
            <input
                type="checkbox"
                class="item-checkbox"
                prop:checked=move || store_is_completed(&store, id)
                on:change=move |ev| {
                    ctx.toggle(id);
                    // A rolled-back toggle republishes the old state; put the box back
                    event_target::<web_sys::HtmlInputElement>(&ev)
                        .set_checked(store_is_completed_untracked(&store, id));
                }
            />
            <span class="item-text">
                <span class="item-name">{item.text}</span>
                <span class="item-category">{item.category}</span>
            </span>
            <div class="item-actions">
                <button
                    type="button"
                    class="btn-delete"
                    aria-label="Eliminar artículo"
                    disabled=leaving
                    on:click=move |_| ctx.remove_with_transition(id)
                >
                    <i class="fas fa-trash"></i>
                </button>
            </div>
        </li>
    }
}
