//! Stats Panel Component

use leptos::prelude::*;

use crate::store::{store_counts, store_progress, use_ui_store};

/// Totals and completion progress
#[component]
pub fn StatsPanel() -> impl IntoView {
    let store = use_ui_store();
    let counts = move || store_counts(&store);

    view! {
        <div class="stats">
            <div class="stat">
                <span id="statTotal" class="stat-value">{move || counts().total}</span>
                <span class="stat-label">"Total"</span>
            </div>
            <div class="stat">
                <span id="statCompleted" class="stat-value">{move || counts().completed}</span>
                <span class="stat-label">"Completados"</span>
            </div>
            <div class="stat">
                <span id="statPending" class="stat-value">{move || counts().pending}</span>
                <span class="stat-label">"Pendientes"</span>
            </div>
            <div class="stat">
                <span id="statProgress" class="stat-value">{move || format!("{}%", store_progress(&store))}</span>
                <span class="stat-label">"Progreso"</span>
            </div>
        </div>
    }
}
