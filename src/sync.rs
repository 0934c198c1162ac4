//! Sync Gateway
//!
//! Read/update/delete round trips against the todo backend. Every successful
//! mutation is followed by exactly one full refetch; the fresh list is handed
//! back to the caller, which owns the state.

use crate::commands::{Confirm, TodoApi};
use crate::error::ApiResult;
use crate::models::{TodoId, TodoItem};

pub const DELETE_PROMPT: &str = "Delete this todo?";

#[derive(Debug, Clone)]
pub struct SyncGateway<A> {
    api: A,
}

/// Flag to send when toggling `id`. An id missing from `all` counts as not done.
pub fn next_done(all: &[TodoItem], id: TodoId) -> bool {
    !all.iter().find(|item| item.id == id).is_some_and(|item| item.done)
}

impl<A: TodoApi> SyncGateway<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    /// Fetch the full list
    pub async fn fetch_all(&self) -> ApiResult<Vec<TodoItem>> {
        let items = self.api.list().await?;
        log::debug!("fetched {} todos", items.len());
        Ok(items)
    }

    /// Flip `done` for `id` against the local copy `all`, then refetch
    pub async fn toggle_done(&self, all: &[TodoItem], id: TodoId) -> ApiResult<Vec<TodoItem>> {
        if !all.iter().any(|item| item.id == id) {
            log::warn!("todo {} not in local list, marking done", id);
        }
        let done = next_done(all, id);
        self.api.set_done(id, done).await?;
        log::debug!("todo {} done={}", id, done);
        self.fetch_all().await
    }

    /// Delete `id` once the user confirms, then refetch.
    /// `Ok(None)` means the user declined and nothing was sent.
    pub async fn delete_item<C: Confirm>(&self, confirm: &C, id: TodoId) -> ApiResult<Option<Vec<TodoItem>>> {
        if !confirm.confirm(DELETE_PROMPT) {
            log::debug!("delete of todo {} declined", id);
            return Ok(None);
        }
        self.api.delete(id).await?;
        log::debug!("todo {} deleted", id);
        self.fetch_all().await.map(Some)
    }
}
