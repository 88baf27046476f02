//! Repository List App
//!
//! Page title plus the repository list. Holds no state of its own.

use leptos::prelude::*;

use crate::components::RepoList;
use crate::config::SearchConfig;

#[component]
pub fn App(config: SearchConfig) -> impl IntoView {
    view! {
        <div class="app">
            <h2 class="app-title">"Repository list"</h2>
            <RepoList config=config />
        </div>
    }
}
