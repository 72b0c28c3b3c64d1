//! Render/Sync Controller
//!
//! The only place list mutations happen. Every mutation runs the same cycle:
//! mutate the `ItemList`, persist it through the `ItemStore`, re-project.
//! When the write fails the list is restored from a snapshot, so memory and
//! storage never disagree.

use log::{debug, info, warn};

use crate::constants::{CONFIRM_CLEAR_COMPLETED, CONFIRM_REMOVE_ALL};
use crate::error::{ListResult, StoreError};
use crate::list::ItemList;
use crate::models::{Filter, ItemId, ViewQuery};
use crate::projection::{project, Projection};
use crate::storage::{ItemStore, KeyValueStorage};

/// How a mutation is persisted
enum Persist {
    Save,
    Clear,
}

pub struct Controller<S> {
    list: ItemList,
    store: ItemStore<S>,
    query: ViewQuery,
    projection: Projection,
}

impl<S: KeyValueStorage> Controller<S> {
    /// Start from whatever the store holds (empty when absent or corrupt)
    pub fn load(storage: S) -> Self {
        let store = ItemStore::new(storage);
        let list = ItemList::from_records(store.load());
        if list.is_empty() {
            debug!("[LIST] Starting with an empty list");
        } else {
            info!("[LIST] Loaded {} items", list.len());
        }
        let query = ViewQuery::default();
        let projection = project(list.items(), &query);
        Self {
            list,
            store,
            query,
            projection,
        }
    }

    pub fn projection(&self) -> &Projection {
        &self.projection
    }

    pub fn query(&self) -> &ViewQuery {
        &self.query
    }

    pub fn add(&mut self, text: &str, category: &str) -> ListResult<ItemId> {
        let id = self.transact(Persist::Save, |list| Ok((list.add(text, category)?, true)))?;
        debug!("[LIST] Added {}", id);
        Ok(id)
    }

    /// Returns false when `id` no longer exists
    pub fn toggle(&mut self, id: ItemId) -> ListResult<bool> {
        let toggled = self.transact(Persist::Save, |list| {
            let toggled = list.toggle(id);
            Ok((toggled, toggled))
        })?;
        if !toggled {
            debug!("[LIST] Toggle ignored, {} not found", id);
        }
        Ok(toggled)
    }

    /// Returns false when `id` no longer exists
    pub fn remove(&mut self, id: ItemId) -> ListResult<bool> {
        let removed = self.transact(Persist::Save, |list| {
            let removed = list.remove(id);
            let changed = removed.is_some();
            Ok((removed, changed))
        })?;
        match &removed {
            Some(item) => debug!("[LIST] Removed {} '{}'", id, item.text),
            None => debug!("[LIST] Remove ignored, {} not found", id),
        }
        Ok(removed.is_some())
    }

    /// Remove completed items after `confirm` agrees. Returns how many went.
    pub fn clear_completed(&mut self, confirm: impl FnOnce(&str) -> bool) -> ListResult<usize> {
        if !confirm(CONFIRM_CLEAR_COMPLETED) {
            debug!("[LIST] Clear completed cancelled");
            return Ok(0);
        }
        let removed = self.transact(Persist::Save, |list| {
            let n = list.remove_where(|item| item.completed);
            Ok((n, n > 0))
        })?;
        info!("[LIST] Cleared {} completed items", removed);
        Ok(removed)
    }

    /// Empty the list and drop its storage slot after `confirm` agrees
    pub fn remove_all(&mut self, confirm: impl FnOnce(&str) -> bool) -> ListResult<usize> {
        if !confirm(CONFIRM_REMOVE_ALL) {
            debug!("[LIST] Remove all cancelled");
            return Ok(0);
        }
        let removed = self.transact(Persist::Clear, |list| Ok((list.remove_all(), true)))?;
        info!("[LIST] Removed all {} items", removed);
        Ok(removed)
    }

    pub fn set_filter(&mut self, filter: Filter) -> &Projection {
        self.query.filter = filter;
        self.reproject()
    }

    pub fn set_search(&mut self, term: &str) -> &Projection {
        self.query.search = term.to_string();
        self.reproject()
    }

    fn reproject(&mut self) -> &Projection {
        self.projection = project(self.list.items(), &self.query);
        &self.projection
    }

    /// Run `mutate` as one unit. It returns its result and whether the list
    /// changed; unchanged lists skip the write. An error from `mutate` leaves
    /// the list untouched.
    fn transact<T>(
        &mut self,
        persist: Persist,
        mutate: impl FnOnce(&mut ItemList) -> ListResult<(T, bool)>,
    ) -> ListResult<T> {
        let snapshot = self.list.clone();
        let (outcome, changed) = mutate(&mut self.list)?;
        if !changed {
            return Ok(outcome);
        }

        if let Err(e) = self.persist(persist) {
            warn!("[LIST] Persist failed, rolling back: {}", e);
            self.list = snapshot;
            return Err(e.into());
        }

        self.reproject();
        Ok(outcome)
    }

    fn persist(&self, persist: Persist) -> Result<(), StoreError> {
        match persist {
            Persist::Save => self.store.save(&self.list.records()),
            Persist::Clear => self.store.clear(),
        }
    }
}
