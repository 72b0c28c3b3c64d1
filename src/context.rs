//! Application Context
//!
//! Shared handle provided via Leptos Context API. Components forward user
//! gestures here; each gesture runs one controller call and then publishes
//! the resulting projection to the UI store.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use log::{error, warn};

use crate::constants::{CONFIRM_CLEAR_COMPLETED, CONFIRM_REMOVE_ALL, REMOVE_TRANSITION_MS};
use crate::controller::Controller;
use crate::error::{ListError, ListResult};
use crate::models::{Filter, ItemId, Theme};
use crate::storage::{BrowserStorage, ThemeStore};
use crate::store::{
    store_mark_leaving, store_publish, store_set_theme, store_theme, store_unmark_leaving,
    UiState, UiStore,
};

/// App-wide handle provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Checklist controller (browser objects are not Send, so stored locally)
    controller: StoredValue<Controller<BrowserStorage>, LocalStorage>,
    /// Theme preference slot
    themes: StoredValue<ThemeStore<BrowserStorage>, LocalStorage>,
    /// Reactive state read by components
    pub store: UiStore,
}

impl AppContext {
    /// Open browser storage, load the saved list and theme
    pub fn new() -> Self {
        let storage = BrowserStorage::open();
        let controller = Controller::load(storage.clone());
        let themes = ThemeStore::new(storage);
        let theme = themes.load();
        apply_theme(theme);

        let store = UiStore::new(UiState::new(controller.projection().clone(), theme));
        Self {
            controller: StoredValue::new_local(controller),
            themes: StoredValue::new_local(themes),
            store,
        }
    }

    /// Run one controller call, then hand its projection to the UI
    fn dispatch<R>(&self, action: impl FnOnce(&mut Controller<BrowserStorage>) -> R) -> Option<R> {
        let ran = self.controller.try_update_value(|controller| {
            let result = action(controller);
            (result, controller.projection().clone(), controller.query().clone())
        });
        ran.map(|(result, projection, query)| {
            store_publish(&self.store, projection, &query);
            result
        })
    }

    /// Add an item. Returns false when nothing was added.
    pub fn add(&self, text: &str, category: &str) -> bool {
        match self.dispatch(|c| c.add(text, category)) {
            Some(Ok(_)) => true,
            Some(Err(ListError::EmptyText)) | None => false,
            Some(Err(e)) => {
                error!("[APP] Add failed: {}", e);
                false
            }
        }
    }

    pub fn toggle(&self, id: ItemId) {
        if let Some(result) = self.dispatch(|c| c.toggle(id)) {
            report("Toggle", result);
        }
    }

    pub fn remove(&self, id: ItemId) {
        if let Some(result) = self.dispatch(|c| c.remove(id)) {
            report("Remove", result);
        }
    }

    /// Play the slide-out transition, then remove. Clicking a row that is
    /// already leaving does nothing.
    pub fn remove_with_transition(&self, id: ItemId) {
        if !store_mark_leaving(&self.store, id) {
            return;
        }
        let ctx = *self;
        spawn_local(async move {
            TimeoutFuture::new(REMOVE_TRANSITION_MS).await;
            ctx.remove(id);
            store_unmark_leaving(&ctx.store, id);
        });
    }

    // Confirmation is asked before dispatch: the modal must not run while the
    // controller is borrowed.
    pub fn clear_completed(&self) {
        let confirmed = browser_confirm(CONFIRM_CLEAR_COMPLETED);
        if let Some(result) = self.dispatch(|c| c.clear_completed(|_| confirmed)) {
            report("Clear completed", result);
        }
    }

    pub fn remove_all(&self) {
        let confirmed = browser_confirm(CONFIRM_REMOVE_ALL);
        if let Some(result) = self.dispatch(|c| c.remove_all(|_| confirmed)) {
            report("Remove all", result);
        }
    }

    pub fn set_filter(&self, filter: Filter) {
        self.dispatch(|c| {
            c.set_filter(filter);
        });
    }

    pub fn set_search(&self, term: &str) {
        self.dispatch(|c| {
            c.set_search(term);
        });
    }

    /// Flip and persist the theme; a failed write still switches the page
    pub fn toggle_theme(&self) {
        let theme = store_theme(&self.store).toggled();
        apply_theme(theme);
        store_set_theme(&self.store, theme);
        if let Some(Err(e)) = self.themes.try_with_value(|themes| themes.save(theme)) {
            warn!("[APP] Theme not saved: {}", e);
        }
    }
}

fn report<T>(action: &str, result: ListResult<T>) {
    if let Err(e) = result {
        error!("[APP] {} failed: {}", action, e);
    }
}

fn browser_confirm(message: &str) -> bool {
    window().confirm_with_message(message).unwrap_or(false)
}

/// Toggle the `dark-mode` class on `<body>`
fn apply_theme(theme: Theme) {
    if let Some(body) = document().body() {
        let _ = body.class_list().toggle_with_force("dark-mode", theme.is_dark());
    }
}
