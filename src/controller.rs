//! Fetch Controller
//!
//! Drives one page fetch: gate on `loading`, await the source, then apply
//! the result. At most one fetch is in flight because `begin` flips
//! `loading` synchronously.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::api::SearchSource;
use crate::config::PageAdvance;
use crate::store::{ListAction, ListState};

/// Cleared when the owning view is torn down; late completions are dropped
#[derive(Clone, Debug)]
pub struct Liveness(Arc<AtomicBool>);

impl Liveness {
    pub fn new() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }

    pub fn is_alive(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    pub fn dispose(&self) {
        self.0.store(false, Ordering::Release);
    }
}

impl Default for Liveness {
    fn default() -> Self {
        Self::new()
    }
}

pub struct Pager<S> {
    source: S,
    page_advance: PageAdvance,
    liveness: Liveness,
}

impl<S: SearchSource> Pager<S> {
    pub fn new(source: S, page_advance: PageAdvance) -> Self {
        Self {
            source,
            page_advance,
            liveness: Liveness::new(),
        }
    }

    pub fn liveness(&self) -> &Liveness {
        &self.liveness
    }

    /// Mark the fetch as started and return the page to request.
    /// `None` while another fetch is in flight or after disposal.
    pub fn begin(&self, state: &mut ListState) -> Option<u32> {
        if state.loading || !self.liveness.is_alive() {
            return None;
        }
        state.apply(ListAction::SetLoading(true));
        Some(state.page)
    }

    /// Await `page` and report the outcome through `dispatch`
    pub async fn finish<D>(&self, page: u32, mut dispatch: D)
    where
        D: FnMut(ListAction),
    {
        let result = self.source.fetch_page(page).await;

        if !self.liveness.is_alive() {
            log::debug!("[LIST] Ignoring page {} completion after teardown", page);
            return;
        }

        match result {
            Ok(items) => {
                log::info!("[LIST] Loaded {} items for page {}", items.len(), page);
                dispatch(ListAction::AppendPage(items));
                dispatch(ListAction::AdvancePage);
            }
            Err(e) => {
                log::error!("[LIST] Error fetching page {}: {}", page, e);
                if self.page_advance == PageAdvance::Always {
                    dispatch(ListAction::AdvancePage);
                }
            }
        }

        dispatch(ListAction::SetLoading(false));
    }
}
