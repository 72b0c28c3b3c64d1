//! Checklist App
//!
//! Root component: opens storage, provides context, lays out the page.

use leptos::prelude::*;

use crate::components::{
    BulkActions, FilterBar, ItemList, NewItemForm, SearchBox, StatsPanel, ThemeToggle,
};
use crate::context::AppContext;

#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();

    // Provide context to all children
    provide_context(ctx.store);
    provide_context(ctx);

    view! {
        <div class="container">
            <header class="app-header">
                <h1>"Mi Lista"</h1>
                <ThemeToggle />
            </header>

            <NewItemForm />

            <section class="toolbar">
                <SearchBox />
                <FilterBar />
            </section>

            <StatsPanel />

            <ItemList />

            <BulkActions />
        </div>
    }
}
