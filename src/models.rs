//! Frontend Models
//!
//! Data structures matching the todo backend's JSON.

use serde::{Deserialize, Serialize};

/// Backend identifier of a todo item
pub type TodoId = u32;

/// Todo item (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TodoItem {
    #[serde(rename = "_id")]
    pub id: TodoId,
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub done: bool,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<String>,
    #[serde(rename = "updatedAt", default)]
    pub updated_at: Option<String>,
}

/// Body of `GET /api/todolist`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TodoListResponse {
    pub items: Vec<TodoItem>,
}

/// Body of `PATCH /api/todoList/{id}`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UpdateDoneArgs {
    pub done: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_list_response() {
        let json = r#"{
            "items": [
                {"_id": 1, "title": "Buy milk", "content": "2L", "done": false,
                 "createdAt": "2024-01-02T03:04:05.000Z", "updatedAt": "2024-01-02T03:04:05.000Z"},
                {"_id": 2, "title": "Walk dog", "done": true}
            ]
        }"#;

        let response: TodoListResponse = serde_json::from_str(json).unwrap();

        assert_eq!(response.items.len(), 2);
        assert_eq!(response.items[0].id, 1);
        assert_eq!(response.items[0].content, "2L");
        assert_eq!(response.items[0].created_at.as_deref(), Some("2024-01-02T03:04:05.000Z"));
        assert!(response.items[1].done);
        assert_eq!(response.items[1].content, "");
        assert_eq!(response.items[1].updated_at, None);
    }

    #[test]
    fn test_update_body_shape() {
        let json = serde_json::to_string(&UpdateDoneArgs { done: true }).unwrap();
        assert_eq!(json, r#"{"done":true}"#);
    }

    #[test]
    fn test_item_serializes_backend_keys() {
        let item = TodoItem {
            id: 7,
            title: "x".to_string(),
            content: String::new(),
            done: false,
            created_at: None,
            updated_at: None,
        };
        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value["_id"], 7);
        assert!(value.get("id").is_none());
        assert!(value.get("createdAt").is_some());
    }
}
