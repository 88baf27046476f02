//! Frontend Models
//!
//! Data structures matching the repository search API.

use serde::{Deserialize, Deserializer};

/// One repository search result (client-visible fields only)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Item {
    pub id: u64,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    /// GitHub reports this as `stargazers_count`
    #[serde(default, alias = "stargazers_count")]
    pub stars: u64,
}

impl Item {
    #[cfg(test)]
    pub fn new(id: u64, name: impl Into<String>, description: impl Into<String>, stars: u64) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            stars,
        }
    }
}

/// Search response body; everything besides `items` is ignored
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub items: Vec<Item>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
