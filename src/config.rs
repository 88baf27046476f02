//! Search Configuration
//!
//! Fixed parameters for the repository search and the list behavior.

/// GitHub repository search endpoint
pub const SEARCH_ENDPOINT: &str = "https://api.github.com/search/repositories";

/// Sort direction sent as the `order` query parameter
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

/// When the page cursor moves after a fetch attempt
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageAdvance {
    /// After every attempt, failed ones included (a failed page is skipped)
    Always,
    /// Only after a successful fetch (a failed page is retried next time)
    OnSuccess,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SearchConfig {
    pub endpoint: String,
    pub query: String,
    pub sort: String,
    pub order: SortOrder,
    pub page_advance: PageAdvance,
    /// Distance from the document bottom that still counts as "at bottom"
    pub bottom_threshold_px: f64,
    pub log_level: log::LevelFilter,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            endpoint: SEARCH_ENDPOINT.to_string(),
            query: "javascript".to_string(),
            sort: "stars".to_string(),
            order: SortOrder::Asc,
            page_advance: PageAdvance::Always,
            bottom_threshold_px: 1.0,
            log_level: log::LevelFilter::Info,
        }
    }
}
