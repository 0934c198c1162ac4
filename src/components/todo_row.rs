//! Todo Row Component
//!
//! One item in the todo list.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::context::use_todo_list;
use crate::models::TodoItem;
use crate::routes;

/// A single todo row
#[component]
pub fn TodoRow(todo: TodoItem) -> impl IntoView {
    let ctx = use_todo_list();
    let navigate = use_navigate();

    let id = todo.id;
    let done = todo.done;

    view! {
        <li class="todo-row">
            // Checkbox follows the server; the change only requests a toggle
            <input
                type="checkbox"
                class="todo-check"
                prop:checked=done
                on:change=move |ev| {
                    event_target::<web_sys::HtmlInputElement>(&ev).set_checked(done);
                    ctx.toggle(id);
                }
            />

            <h3
                class=if done { "todo-title checked" } else { "todo-title" }
                on:click=move |_| navigate(&routes::detail_path(id), Default::default())
            >
                {todo.title}
            </h3>

            <button class="delete-btn" title="Delete" on:click=move |_| ctx.delete(id)>"×"</button>
        </li>
    }
}
