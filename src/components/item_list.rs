//! Item List Component
//!
//! Renders the visible rows of the current projection, or the empty state.

use leptos::prelude::*;

use crate::components::ItemRow;
use crate::projection::{EmptyReason, VisibleItem};
use crate::store::{store_empty_reason, store_visible, use_ui_store};

#[component]
pub fn ItemList() -> impl IntoView {
    let store = use_ui_store();

    let visible = move || store_visible(&store);
    let empty_reason = move || store_empty_reason(&store);

    view! {
        <ul id="lista" class="item-list">
            <For
                each=visible
                // Completion is part of the key so a toggled row re-renders
                key=|row: &VisibleItem| (row.item.id, row.item.completed)
                children=move |row: VisibleItem| view! { <ItemRow item=row.item /> }
            />
        </ul>

        <Show when=move || empty_reason().is_some()>
            <div id="emptyState" class="empty-state">
                <i class="fas fa-clipboard-list"></i>
                <p>
                    {move || match empty_reason() {
                        Some(EmptyReason::NoMatches) => "Ningún artículo coincide con la búsqueda",
                        _ => "Tu lista está vacía",
                    }}
                </p>
            </div>
        </Show>
    }
}
