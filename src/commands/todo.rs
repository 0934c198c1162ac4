//! Todo Commands
//!
//! HTTP bindings for the todo collection resource.

use gloo_net::http::{Request, Response};

use crate::error::{ApiError, ApiResult};
use crate::models::{TodoId, TodoItem, TodoListResponse, UpdateDoneArgs};

/// Operations the todo backend offers
#[allow(async_fn_in_trait)]
pub trait TodoApi {
    /// `GET /api/todolist`
    async fn list(&self) -> ApiResult<Vec<TodoItem>>;
    /// `PATCH /api/todoList/{id}` with `{ done }`
    async fn set_done(&self, id: TodoId, done: bool) -> ApiResult<()>;
    /// `DELETE /api/todoList/{id}`
    async fn delete(&self, id: TodoId) -> ApiResult<()>;
}

// ========================
// URLs
// ========================

pub fn list_url(base_url: &str) -> String {
    format!("{}/api/todolist", base_url)
}

pub fn item_url(base_url: &str, id: TodoId) -> String {
    format!("{}/api/todoList/{}", base_url, id)
}

// ========================
// HTTP Backend
// ========================

/// `TodoApi` over fetch
#[derive(Debug, Clone, PartialEq)]
pub struct HttpTodoApi {
    base_url: String,
}

impl HttpTodoApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }
}

/// Only 200 counts as success
fn expect_ok(response: &Response, url: &str) -> ApiResult<()> {
    match response.status() {
        200 => Ok(()),
        status => Err(ApiError::Status { status, url: url.to_string() }),
    }
}

fn network(err: gloo_net::Error) -> ApiError {
    ApiError::Network(err.to_string())
}

impl TodoApi for HttpTodoApi {
    async fn list(&self) -> ApiResult<Vec<TodoItem>> {
        let url = list_url(&self.base_url);
        let response = Request::get(&url).send().await.map_err(network)?;
        expect_ok(&response, &url)?;
        let body: TodoListResponse = response
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(body.items)
    }

    async fn set_done(&self, id: TodoId, done: bool) -> ApiResult<()> {
        let url = item_url(&self.base_url, id);
        let response = Request::patch(&url)
            .json(&UpdateDoneArgs { done })
            .map_err(|e| ApiError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(network)?;
        expect_ok(&response, &url)
    }

    async fn delete(&self, id: TodoId) -> ApiResult<()> {
        let url = item_url(&self.base_url, id);
        let response = Request::delete(&url).send().await.map_err(network)?;
        expect_ok(&response, &url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls_same_origin() {
        assert_eq!(list_url(""), "/api/todolist");
        assert_eq!(item_url("", 3), "/api/todoList/3");
    }

    #[test]
    fn test_urls_with_base() {
        assert_eq!(list_url("http://localhost:5000"), "http://localhost:5000/api/todolist");
        assert_eq!(item_url("http://localhost:5000", 42), "http://localhost:5000/api/todoList/42");
    }
}
