//! Page Header Component

use leptos::prelude::*;

/// Page title bar
#[component]
pub fn PageHeader(#[prop(into)] title: String) -> impl IntoView {
    view! {
        <header class="page-header">
            <h1 class="page-title">{title}</h1>
        </header>
    }
}
