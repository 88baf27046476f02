//! List State Store
//!
//! The list aggregate, its actions, and the reducer that applies them.
//! Wrapped in a reactive_stores `Store` for field-level reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::Item;

/// State owned by the repository list for its mounted lifetime
#[derive(Clone, Debug, PartialEq, Store)]
pub struct ListState {
    /// Fetched items in arrival order
    pub items: Vec<Item>,
    /// True only while a fetch is in flight
    pub loading: bool,
    /// Next page to request (starts at 1, never decreases)
    pub page: u32,
}

impl ListState {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            loading: false,
            page: 1,
        }
    }

    /// Apply one state transition
    pub fn apply(&mut self, action: ListAction) {
        match action {
            ListAction::AppendPage(items) => self.items.extend(items),
            ListAction::SetLoading(loading) => self.loading = loading,
            ListAction::AdvancePage => self.page += 1,
            ListAction::EditItem { id, name, description } => {
                for item in self.items.iter_mut().filter(|item| item.id == id) {
                    item.name = name.clone();
                    item.description = description.clone();
                }
            }
            ListAction::RemoveItem(id) => self.items.retain(|item| item.id != id),
        }
    }
}

impl Default for ListState {
    fn default() -> Self {
        Self::new()
    }
}

/// Transitions accepted by [`ListState::apply`]
#[derive(Clone, Debug, PartialEq)]
pub enum ListAction {
    /// Concatenate a fetched page (no de-duplication)
    AppendPage(Vec<Item>),
    SetLoading(bool),
    AdvancePage,
    /// Replace name/description of every matching item; no-op if absent
    EditItem {
        id: u64,
        name: String,
        description: String,
    },
    /// Drop the matching item; no-op if absent
    RemoveItem(u64),
}

/// Type alias for the store
pub type ListStore = Store<ListState>;

// ========================
// Store Helper Functions
// ========================

/// Apply an action to the store
pub fn store_dispatch(store: &ListStore, action: ListAction) {
    store.update(|state| state.apply(action));
}

/// Apply an action unless the store has already been disposed
pub fn store_try_dispatch(store: &ListStore, action: ListAction) {
    if store.try_update(|state| state.apply(action)).is_none() {
        log::debug!("[LIST] Store disposed, dropping action");
    }
}
