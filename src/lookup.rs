//! Encyclopedia summary lookup with disambiguation retry
//!
//! Fetches a page summary by title from a MediaWiki REST endpoint. When the
//! direct fetch comes back without an extract, as a disambiguation page, or
//! as the not-found sentinel, a single opensearch call resolves the best
//! canonical title and the summary is fetched again for that title.
//!
//! The lookup never surfaces an error to its caller: any fetch or parse
//! failure becomes a miss (`None`), and the command cascade treats a miss as
//! "fall through to the next rule".

use crate::error::{Result, SavantError};
use serde_json::Value;
use std::time::Duration;
use url::Url;

/// Default API base for the public encyclopedia
pub const DEFAULT_API_BASE: &str = "https://en.wikipedia.org";

/// MediaWiki sentinel type for a missing page
const NOT_FOUND_TYPE: &str = "https://mediawiki.org/wiki/HyperSwitch/errors/not_found";

/// A resolved page summary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    /// Canonical page title
    pub title: String,
    /// Extract text
    pub extract: String,
    /// Canonical page URL for the source link
    pub page_url: String,
    /// Thumbnail image URL, if the page has one
    pub thumbnail: Option<String>,
}

impl Summary {
    /// Format the summary as assistant markup
    ///
    /// Title heading, overview section with the extract, and a source link.
    pub fn to_markup(&self) -> String {
        format!(
            "# {}\n\n## Overview\n{}\n\n## Source\n[Read more on Wikipedia]({})",
            self.title, self.extract, self.page_url
        )
    }
}

/// Client for summary-by-title and opensearch-by-query endpoints
pub struct SummaryLookup {
    client: reqwest::Client,
    api_base: String,
}

impl SummaryLookup {
    /// Create a lookup client against the given API base
    ///
    /// `api_base` is the scheme-and-host prefix (no trailing slash); tests
    /// point it at a mock server.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(api_base: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            api_base: api_base.into(),
        })
    }

    /// Look up a summary for a free-text query
    ///
    /// Returns `Some` on success and `None` on any miss or failure; errors
    /// are logged, never propagated.
    pub async fn lookup(&self, query: &str) -> Option<Summary> {
        match self.try_lookup(query).await {
            Ok(summary) => summary,
            Err(e) => {
                tracing::warn!("Encyclopedia lookup failed for {:?}: {}", query, e);
                None
            }
        }
    }

    async fn try_lookup(&self, query: &str) -> Result<Option<Summary>> {
        let mut data = self.fetch_summary(query).await?;

        if !has_extract(&data) || is_disambiguation(&data) || is_not_found(&data) {
            if let Some(best_match) = self.search_best_title(query).await? {
                data = self.fetch_summary(&best_match).await?;
            }
        }

        if has_extract(&data) && !is_not_found(&data) {
            Ok(Some(parse_summary(&data)))
        } else {
            Ok(None)
        }
    }

    /// Direct summary-by-title fetch
    async fn fetch_summary(&self, title: &str) -> Result<Value> {
        let mut url = Url::parse(&format!("{}/api/rest_v1/page/summary/", self.api_base))
            .map_err(|e| SavantError::Lookup(format!("Invalid API base: {}", e)))?;
        url.path_segments_mut()
            .map_err(|_| SavantError::Lookup("API base cannot be a base URL".into()))?
            .pop_if_empty()
            .push(title);

        let data = self.client.get(url).send().await?.json::<Value>().await?;
        Ok(data)
    }

    /// Resolve the best-matching canonical title via opensearch
    async fn search_best_title(&self, query: &str) -> Result<Option<String>> {
        let url = format!("{}/w/api.php", self.api_base);
        let data = self
            .client
            .get(url)
            .query(&[
                ("action", "opensearch"),
                ("search", query),
                ("limit", "1"),
                ("format", "json"),
                ("origin", "*"),
            ])
            .send()
            .await?
            .json::<Value>()
            .await?;

        // Opensearch replies [query, [titles], [descriptions], [urls]]
        let title = data
            .get(1)
            .and_then(|titles| titles.get(0))
            .and_then(|t| t.as_str())
            .map(|t| t.to_string());
        Ok(title)
    }
}

fn has_extract(data: &Value) -> bool {
    data.get("extract")
        .and_then(|e| e.as_str())
        .map(|e| !e.is_empty())
        .unwrap_or(false)
}

fn is_disambiguation(data: &Value) -> bool {
    data.get("type").and_then(|t| t.as_str()) == Some("disambiguation")
}

fn is_not_found(data: &Value) -> bool {
    data.get("type").and_then(|t| t.as_str()) == Some(NOT_FOUND_TYPE)
}

fn parse_summary(data: &Value) -> Summary {
    let field = |keys: &[&str]| -> Option<String> {
        let mut value = data;
        for key in keys {
            value = value.get(key)?;
        }
        value.as_str().map(|s| s.to_string())
    };

    Summary {
        title: field(&["title"]).unwrap_or_default(),
        extract: field(&["extract"]).unwrap_or_default(),
        page_url: field(&["content_urls", "desktop", "page"]).unwrap_or_default(),
        thumbnail: field(&["thumbnail", "source"]),
    }
}
