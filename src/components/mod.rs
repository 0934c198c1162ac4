//! UI Components
//!
//! Leptos components for the todo list pages.

mod page_header;
mod route_pages;
mod search_box;
mod todo_list_view;
mod todo_row;

pub use page_header::PageHeader;
pub use route_pages::{NotFound, TodoDetailView, TodoRegistView};
pub use search_box::SearchBox;
pub use todo_list_view::TodoListView;
pub use todo_row::TodoRow;
