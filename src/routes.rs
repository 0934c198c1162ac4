//! Route Table
//!
//! Paths the list page navigates to, and the router that serves them.

use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes},
    ParamSegment, StaticSegment,
};

use crate::components::{NotFound, TodoDetailView, TodoListView, TodoRegistView};
use crate::models::TodoId;

pub const LIST: &str = "/";
pub const REGIST: &str = "/regist";
const DETAIL_PREFIX: &str = "/detail";

/// `/detail/{id}`
pub fn detail_path(id: TodoId) -> String {
    format!("{}/{}", DETAIL_PREFIX, id)
}

/// Router with the list, detail and create routes
#[component]
pub fn AppRouter() -> impl IntoView {
    view! {
        <Router>
            <main class="app-layout">
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=StaticSegment("") view=TodoListView />
                    <Route path=(StaticSegment("detail"), ParamSegment("id")) view=TodoDetailView />
                    <Route path=StaticSegment("regist") view=TodoRegistView />
                </Routes>
            </main>
        </Router>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_path() {
        assert_eq!(detail_path(1), "/detail/1");
        assert_eq!(detail_path(4096), "/detail/4096");
    }

    #[test]
    fn test_route_paths_format() {
        assert!(LIST.starts_with('/'));
        assert!(REGIST.starts_with('/'));
        assert!(!REGIST.ends_with('/'));
        assert!(detail_path(9).starts_with(DETAIL_PREFIX));
    }
}
