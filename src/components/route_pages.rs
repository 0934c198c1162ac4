//! Navigation Target Pages
//!
//! Detail and create screens reachable from the list.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::components::PageHeader;
use crate::routes;

#[component]
pub fn TodoDetailView() -> impl IntoView {
    let params = use_params_map();
    let todo_id = move || params.read().get("id").unwrap_or_default();

    view! {
        <PageHeader title="Detail" />
        <div class="content">
            <p class="todo-id">{move || format!("Todo #{}", todo_id())}</p>
            <A href=routes::LIST>"Back to list"</A>
        </div>
    }
}

#[component]
pub fn TodoRegistView() -> impl IntoView {
    view! {
        <PageHeader title="New Todo" />
        <div class="content">
            <A href=routes::LIST>"Back to list"</A>
        </div>
    }
}

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <PageHeader title="Not Found" />
        <div class="content">
            <A href=routes::LIST>"Back to list"</A>
        </div>
    }
}
