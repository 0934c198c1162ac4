//! Todo List State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::filter::{active_filter, filter_by_title, visible};
use crate::models::TodoItem;

/// Page state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct ListState {
    /// Last fetched full list
    pub all: Vec<TodoItem>,
    /// Items matching `query`; empty when no filter is active
    pub filtered: Vec<TodoItem>,
    /// Last search text, `None` until the user types
    pub query: Option<String>,
}

/// Type alias for the store
pub type TodoStore = Store<ListState>;

// ========================
// Store Helper Functions
// ========================

/// Replace the whole list after a fetch, re-running the active filter
pub fn store_replace_all(store: &TodoStore, items: Vec<TodoItem>) {
    let filtered = store
        .query()
        .with_untracked(|query| active_filter(&items, query.as_deref()));
    store.filtered().set(filtered);
    store.all().set(items);
}

/// Filter the current list by title
pub fn store_search(store: &TodoStore, text: String) {
    let filtered = store.all().with_untracked(|all| filter_by_title(all, &text));
    store.query().set(Some(text));
    store.filtered().set(filtered);
}

/// Snapshot of the list without tracking
pub fn store_all_untracked(store: &TodoStore) -> Vec<TodoItem> {
    store.all().get_untracked()
}

/// Rows to render (tracked)
pub fn store_visible(store: &TodoStore) -> Vec<TodoItem> {
    let all = store.all().get();
    let filtered = store.filtered().get();
    visible(&all, &filtered).to_vec()
}

/// (total, done) over the full list (tracked)
pub fn store_counts(store: &TodoStore) -> (usize, usize) {
    store
        .all()
        .with(|all| (all.len(), all.iter().filter(|item| item.done).count()))
}
