//! Filter Bar Component
//!
//! Filter buttons with live counts, and the search box.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::models::Filter;
use crate::store::{store_counts, store_filter, store_search, use_ui_store};

#[component]
pub fn FilterBar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_ui_store();

    view! {
        <div class="filters">
            {Filter::ALL.iter().map(|&filter| {
                let is_active = move || store_filter(&store) == filter;
                view! {
                    <button
                        type="button"
                        class=move || if is_active() { "filter-btn active" } else { "filter-btn" }
                        data-filter=filter.as_str()
                        on:click=move |_| ctx.set_filter(filter)
                    >
                        {filter.label()}
                        <span class="count">{move || store_counts(&store).for_filter(filter)}</span>
                    </button>
                }
            }).collect_view()}
        </div>
    }
}

/// Search input; every keystroke re-projects
#[component]
pub fn SearchBox() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_ui_store();

    view! {
        <div class="search">
            <i class="fas fa-search"></i>
            <input
                id="searchInput"
                type="search"
                placeholder="Buscar artículos..."
                prop:value=move || store_search(&store)
                on:input=move |ev| ctx.set_search(&event_target_value(&ev))
            />
        </div>
    }
}
