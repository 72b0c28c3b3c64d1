//! Theme Toggle Button

use leptos::prelude::*;

use crate::context::AppContext;
use crate::store::{store_theme, use_ui_store};

/// Sun/moon button switching light and dark mode
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_ui_store();

    view! {
        <button
            id="themeToggle"
            type="button"
            class="theme-toggle"
            aria-label="Cambiar tema"
            on:click=move |_| ctx.toggle_theme()
        >
            <i class=move || if store_theme(&store).is_dark() { "fas fa-sun" } else { "fas fa-moon" }></i>
        </button>
    }
}
