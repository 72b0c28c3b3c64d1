//! Bulk Action Buttons
//!
//! "Clear completed" and "remove all"; both ask `window.confirm` first.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::store::{store_bulk_flags, use_ui_store};

#[component]
pub fn BulkActions() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_ui_store();

    view! {
        <div class="bulk-actions">
            <Show when=move || store_bulk_flags(&store).0>
                <button id="clearCompleted" type="button" class="btn-secondary" on:click=move |_| ctx.clear_completed()>
                    <i class="fas fa-broom"></i>
                    " Limpiar completados"
                </button>
            </Show>
            <Show when=move || store_bulk_flags(&store).1>
                <button id="removeAll" type="button" class="btn-danger" on:click=move |_| ctx.remove_all()>
                    <i class="fas fa-trash-alt"></i>
                    " Borrar todo"
                </button>
            </Show>
        </div>
    }
}
