//! Todo List Page
//!
//! Fetches the list on mount, renders it and wires search, toggle and delete.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::{PageHeader, SearchBox, TodoRow};
use crate::config::AppConfig;
use crate::context::TodoListContext;
use crate::routes;
use crate::store::{store_counts, store_visible};

/// List page; owns the list state for as long as it is mounted
#[component]
pub fn TodoListView() -> impl IntoView {
    let config = use_context::<AppConfig>().unwrap_or_default();
    let ctx = TodoListContext::new(&config);
    provide_context(ctx);

    let store = ctx.store();
    let navigate = use_navigate();

    // Load on mount
    Effect::new(move |_| {
        log::info!("loading todo list");
        ctx.reload();
    });

    on_cleanup(move || ctx.cancel_pending());

    view! {
        <PageHeader title="List" />
        <SearchBox on_search=move |text: String| ctx.search(text) />

        <div class="content">
            <ul class="todo-list">
                <For
                    each=move || store_visible(&store)
                    key=|todo| (todo.id, todo.done, todo.title.clone())
                    children=move |todo| view! { <TodoRow todo=todo /> }
                />
            </ul>

            <button class="create-btn" on:click=move |_| navigate(routes::REGIST, Default::default())>
                "+"
            </button>

            <p class="item-count">
                {move || {
                    let (total, done) = store_counts(&store);
                    format!("{} todos, {} done", total, done)
                }}
            </p>
        </div>
    }
}
