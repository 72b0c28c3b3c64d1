//! UI State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Holds only what
//! the components render: the latest projection plus presentation flags.
//! List data itself lives in the controller.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Filter, ItemId, Theme, ViewQuery};
use crate::projection::{Counts, EmptyReason, Projection, VisibleItem};

/// Reactive view state, one field per concern
#[derive(Clone, Debug, Default, Store)]
pub struct UiState {
    /// Last projection published by the controller
    pub projection: Projection,
    /// Active filter button
    pub filter: Filter,
    /// Search box contents
    pub search: String,
    /// Current color scheme
    pub theme: Theme,
    /// Rows playing their slide-out transition
    pub leaving: Vec<ItemId>,
}

impl UiState {
    pub fn new(projection: Projection, theme: Theme) -> Self {
        Self {
            projection,
            theme,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type UiStore = Store<UiState>;

/// Get the UI store from context
pub fn use_ui_store() -> UiStore {
    expect_context::<UiStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Publish a fresh projection together with the query that produced it
pub fn store_publish(store: &UiStore, projection: Projection, query: &ViewQuery) {
    store.projection().set(projection);
    store.filter().set(query.filter);
    store.search().set(query.search.clone());
}

pub fn store_visible(store: &UiStore) -> Vec<VisibleItem> {
    store.projection().with(|p| p.visible.clone())
}

pub fn store_counts(store: &UiStore) -> Counts {
    store.projection().with(|p| p.counts)
}

pub fn store_progress(store: &UiStore) -> u8 {
    store.projection().with(|p| p.progress_percent)
}

pub fn store_empty_reason(store: &UiStore) -> Option<EmptyReason> {
    store.projection().with(|p| p.empty_reason)
}

/// (show clear-completed, show remove-all)
pub fn store_bulk_flags(store: &UiStore) -> (bool, bool) {
    store
        .projection()
        .with(|p| (p.show_clear_completed, p.show_remove_all))
}

pub fn store_filter(store: &UiStore) -> Filter {
    store.filter().get()
}

pub fn store_search(store: &UiStore) -> String {
    store.search().get()
}

pub fn store_theme(store: &UiStore) -> Theme {
    store.theme().get()
}

pub fn store_set_theme(store: &UiStore, theme: Theme) {
    store.theme().set(theme);
}

/// Completion state of a visible row as last published
pub fn store_is_completed(store: &UiStore, id: ItemId) -> bool {
    store.projection().with(|p| row_completed(p, id))
}

pub fn store_is_completed_untracked(store: &UiStore, id: ItemId) -> bool {
    store.projection().with_untracked(|p| row_completed(p, id))
}

fn row_completed(projection: &Projection, id: ItemId) -> bool {
    projection
        .visible
        .iter()
        .any(|row| row.item.id == id && row.item.completed)
}

pub fn store_is_leaving(store: &UiStore, id: ItemId) -> bool {
    store.leaving().with(|ids| ids.contains(&id))
}

/// Mark a row as leaving. Returns false when it already was.
pub fn store_mark_leaving(store: &UiStore, id: ItemId) -> bool {
    if store.leaving().with_untracked(|ids| ids.contains(&id)) {
        return false;
    }
    store.leaving().write().push(id);
    true
}

pub fn store_unmark_leaving(store: &UiStore, id: ItemId) {
    store.leaving().write().retain(|leaving| *leaving != id);
}
