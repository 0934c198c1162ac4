//! Todo List Frontend App
//!
//! Root component: shares configuration and mounts the router.

use leptos::prelude::*;

use crate::config::AppConfig;
use crate::routes::AppRouter;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    log::debug!("api base url: {:?}", config.api_base_url);
    provide_context(config);

    view! { <AppRouter /> }
}
