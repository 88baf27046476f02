//! Repository Search API
//!
//! Read-only access to the remote search endpoint. No auth header is sent.

use reqwest::{Client, Url};

use crate::config::SearchConfig;
use crate::error::FetchError;
use crate::models::{Item, SearchResponse};

/// Source of result pages
pub trait SearchSource {
    async fn fetch_page(&self, page: u32) -> Result<Vec<Item>, FetchError>;
}

/// Build `<endpoint>?q=..&sort=..&order=..&page=..`
pub fn search_url(config: &SearchConfig, page: u32) -> Result<Url, FetchError> {
    let page = page.to_string();
    Url::parse_with_params(
        &config.endpoint,
        &[
            ("q", config.query.as_str()),
            ("sort", config.sort.as_str()),
            ("order", config.order.as_str()),
            ("page", page.as_str()),
        ],
    )
    .map_err(|e| FetchError::Endpoint(format!("{}: {}", config.endpoint, e)))
}

/// reqwest-backed search client
#[derive(Clone)]
pub struct RepoSearch {
    client: Client,
    config: SearchConfig,
}

impl RepoSearch {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }
}

impl SearchSource for RepoSearch {
    async fn fetch_page(&self, page: u32) -> Result<Vec<Item>, FetchError> {
        let url = search_url(&self.config, page)?;
        log::debug!("[API] GET {}", url);

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let parsed = response.json::<SearchResponse>().await?;
        Ok(parsed.items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SortOrder;

    #[test]
    fn test_default_search_url() {
        let url = search_url(&SearchConfig::default(), 1).unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.github.com/search/repositories?q=javascript&sort=stars&order=asc&page=1"
        );
    }

    #[test]
    fn test_search_url_uses_page_and_encodes_query() {
        let config = SearchConfig {
            query: "rust lang".to_string(),
            order: SortOrder::Desc,
            ..SearchConfig::default()
        };
        let url = search_url(&config, 17).unwrap();

        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("q".to_string(), "rust lang".to_string()),
                ("sort".to_string(), "stars".to_string()),
                ("order".to_string(), "desc".to_string()),
                ("page".to_string(), "17".to_string()),
            ]
        );
    }

    #[test]
    fn test_invalid_endpoint() {
        let config = SearchConfig {
            endpoint: "not a url".to_string(),
            ..SearchConfig::default()
        };
        let err = search_url(&config, 1).unwrap_err();
        assert!(matches!(err, FetchError::Endpoint(_)));
    }
}
