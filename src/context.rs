//! List Context
//!
//! List store and edit session shared with row components via Leptos Context API.

use leptos::prelude::*;

use crate::edit::EditSession;
use crate::store::{store_dispatch, ListAction, ListStore};

#[derive(Clone, Copy)]
pub struct ListContext {
    pub store: ListStore,
    /// Current edit session - read/write
    pub edit: RwSignal<EditSession>,
}

impl ListContext {
    pub fn new(store: ListStore) -> Self {
        Self {
            store,
            edit: RwSignal::new(EditSession::new()),
        }
    }

    /// Reactive: is `id` the row in edit mode
    pub fn is_editing(&self, id: u64) -> bool {
        self.edit.with(|session| session.is_editing(id))
    }

    pub fn start_editing(&self, id: u64, name: &str, description: &str) {
        self.edit.update(|session| session.start(id, name, description));
    }

    pub fn set_draft_name(&self, name: String) {
        self.edit.update(|session| session.set_draft_name(name));
    }

    pub fn set_draft_description(&self, description: String) {
        self.edit.update(|session| session.set_draft_description(description));
    }

    /// Commit drafts to the item and leave edit mode (local only)
    pub fn save_edit(&self, id: u64) {
        let action = self.edit.try_update(|session| session.save(id));
        if let Some(action) = action {
            log::debug!("[LIST] Saved local edit of item {}", id);
            store_dispatch(&self.store, action);
        }
    }

    /// Drop the item from the list (local only)
    pub fn remove_item(&self, id: u64) {
        log::debug!("[LIST] Removed item {}", id);
        store_dispatch(&self.store, ListAction::RemoveItem(id));
    }
}

/// Get the list context provided by `RepoList`
pub fn use_list_context() -> ListContext {
    expect_context::<ListContext>()
}
