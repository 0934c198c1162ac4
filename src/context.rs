//! Todo List Context
//!
//! Page-owned state and the only operations allowed to change it, shared with
//! rows via the Leptos Context API.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::commands::{BrowserConfirm, HttpTodoApi};
use crate::config::AppConfig;
use crate::debounce::Debouncer;
use crate::error::ApiResult;
use crate::models::{TodoId, TodoItem};
use crate::store::{store_all_untracked, store_replace_all, store_search, ListState, TodoStore};
use crate::sync::SyncGateway;

/// Page controller provided via context
#[derive(Clone, Copy)]
pub struct TodoListContext {
    store: TodoStore,
    gateway: StoredValue<SyncGateway<HttpTodoApi>>,
    refetch: StoredValue<Debouncer, LocalStorage>,
}

impl TodoListContext {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            store: Store::new(ListState::default()),
            gateway: StoredValue::new(SyncGateway::new(HttpTodoApi::new(config.api_base_url.clone()))),
            refetch: StoredValue::new_local(Debouncer::new(config.search_debounce_ms)),
        }
    }

    pub fn store(&self) -> TodoStore {
        self.store
    }

    /// Replace the list with a fresh fetch
    pub fn reload(&self) {
        let store = self.store;
        let Some(gateway) = self.gateway.try_get_value() else {
            return;
        };
        spawn_local(async move {
            apply(&store, "reload", gateway.fetch_all().await);
        });
    }

    /// Flip the done flag of `id` on the backend
    pub fn toggle(&self, id: TodoId) {
        let store = self.store;
        let Some(gateway) = self.gateway.try_get_value() else {
            return;
        };
        let all = store_all_untracked(&store);
        spawn_local(async move {
            apply(&store, "toggle", gateway.toggle_done(&all, id).await);
        });
    }

    /// Delete `id` after asking the user
    pub fn delete(&self, id: TodoId) {
        let store = self.store;
        let Some(gateway) = self.gateway.try_get_value() else {
            return;
        };
        spawn_local(async move {
            apply_delete(&store, id, gateway.delete_item(&BrowserConfirm, id).await);
        });
    }

    /// Filter immediately, refetch once typing pauses
    pub fn search(&self, text: String) {
        let ctx = *self;
        self.refetch.with_value(|debouncer| debouncer.call(move || ctx.reload()));
        store_search(&self.store, text);
    }

    /// Drop a pending search refetch
    pub fn cancel_pending(&self) {
        self.refetch.try_with_value(Debouncer::cancel);
    }
}

/// Write a fetched list into the store, or log and keep the old one
fn apply(store: &TodoStore, action: &str, result: ApiResult<Vec<TodoItem>>) {
    match result {
        Ok(items) => replace_if_mounted(store, items),
        Err(e) => log::error!("{} failed: {}", action, e),
    }
}

/// Like `apply`, where `Ok(None)` is a declined confirmation
fn apply_delete(store: &TodoStore, id: TodoId, result: ApiResult<Option<Vec<TodoItem>>>) {
    match result {
        Ok(Some(items)) => replace_if_mounted(store, items),
        Ok(None) => {}
        Err(e) => log::error!("delete of todo {} failed: {}", id, e),
    }
}

/// Responses can land after the page is gone
fn replace_if_mounted(store: &TodoStore, items: Vec<TodoItem>) {
    if store.is_disposed() {
        log::debug!("dropping {} todos fetched after unmount", items.len());
        return;
    }
    store_replace_all(store, items);
}

/// Get the todo list context
pub fn use_todo_list() -> TodoListContext {
    expect_context::<TodoListContext>()
}
