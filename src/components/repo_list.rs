//! Repository List Component
//!
//! Owns the list store for its mounted lifetime. Fetches page 1 on mount and
//! the next page whenever the window is scrolled to the bottom while idle.

use std::rc::Rc;

use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api::RepoSearch;
use crate::components::RepoRow;
use crate::config::SearchConfig;
use crate::context::ListContext;
use crate::controller::Pager;
use crate::scroll::{read_scroll_metrics, should_load_more};
use crate::store::{store_try_dispatch, ListState, ListStateStoreFields};

#[component]
pub fn RepoList(config: SearchConfig) -> impl IntoView {
    let store = Store::new(ListState::new());
    provide_context(ListContext::new(store));

    let threshold_px = config.bottom_threshold_px;
    let page_advance = config.page_advance;
    let pager = Rc::new(Pager::new(RepoSearch::new(config), page_advance));

    // Start one fetch unless one is already in flight
    let load_page = {
        let pager = Rc::clone(&pager);
        move || {
            let Some(page) = store.try_update(|state| pager.begin(state)).flatten() else {
                return;
            };
            log::debug!("[LIST] Fetching page {}", page);
            let pager = Rc::clone(&pager);
            spawn_local(async move {
                pager
                    .finish(page, |action| store_try_dispatch(&store, action))
                    .await;
            });
        }
    };

    // Initial load on mount
    Effect::new({
        let load_page = load_page.clone();
        move |_| load_page()
    });

    let scroll_handle = window_event_listener(ev::scroll, move |_| {
        let Some(metrics) = read_scroll_metrics() else {
            return;
        };
        if should_load_more(&metrics, store.loading().get_untracked(), threshold_px) {
            load_page();
        }
    });

    let liveness = pager.liveness().clone();
    on_cleanup(move || {
        scroll_handle.remove();
        liveness.dispose();
    });

    view! {
        <div class="repo-list">
            <For
                each=move || store.items().get().into_iter().enumerate()
                // Ids may repeat across pages, so the position is part of the key
                key=|(index, item)| (*index, item.id, item.name.clone(), item.description.clone())
                children=move |(_, item)| view! { <RepoRow item=item /> }
            />

            <Show when=move || store.loading().get()>
                <div class="loading">
                    <span class="spinner"></span>
                    "Loading..."
                </div>
            </Show>

            <p class="item-count">{move || format!("{} repositories", store.items().read().len())}</p>
        </div>
    }
}
