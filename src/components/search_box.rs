//! Search Box Component
//!
//! Title search input. Reports every keystroke; debouncing is the caller's job.

use leptos::prelude::*;

/// Search input
///
/// Props:
/// - on_search: Callback with the full input text after each change
#[component]
pub fn SearchBox(#[prop(into)] on_search: Callback<String>) -> impl IntoView {
    view! {
        <div class="search-box">
            <input
                type="search"
                class="search-input"
                placeholder="Search by title..."
                autocomplete="off"
                on:input=move |ev| on_search.run(event_target_value(&ev))
            />
        </div>
    }
}
