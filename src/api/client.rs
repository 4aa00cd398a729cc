use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::error::{AppError, Result};
use crate::paging::{Page, PageRequest};

use super::models::{Character, Comic, Envelope};

/// Stateless page-fetching client: one remote call per method, no retries,
/// no caching. Cheap to clone (the inner reqwest client is reference
/// counted), so each spawned fetch task gets its own copy.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key,
        }
    }

    /// Fetch one page of the character catalog, optionally filtered by
    /// name prefix.
    pub async fn characters(&self, request: &PageRequest) -> Result<Page<Character>> {
        let url = format!("{}/v1/public/characters", self.base_url);
        self.fetch_page(&url, request).await
    }

    /// Fetch one page of a character's comic appearances.
    pub async fn comics(&self, character_id: u64, request: &PageRequest) -> Result<Page<Comic>> {
        let url = format!(
            "{}/v1/public/characters/{}/comics",
            self.base_url, character_id
        );
        self.fetch_page(&url, request).await
    }

    async fn fetch_page<T: DeserializeOwned>(
        &self,
        url: &str,
        request: &PageRequest,
    ) -> Result<Page<T>> {
        let query = page_query(request, self.api_key.as_deref());
        debug!(url, offset = request.offset, limit = request.limit, "GET page");

        let response = self
            .http
            .get(url)
            .query(&query)
            .send()
            .await
            .map_err(|e| AppError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            warn!(url, %status, "page request rejected");
            return Err(AppError::Transport(format!("{} returned {}", url, status)));
        }

        let envelope: Envelope<T> = response
            .json()
            .await
            .map_err(|e| AppError::Decode(e.to_string()))?;
        Ok(envelope.into())
    }
}

/// Build the query string for a page request. The API key, when configured,
/// rides along on every call; the paging engine never sees it.
fn page_query(request: &PageRequest, api_key: Option<&str>) -> Vec<(String, String)> {
    let mut query = vec![
        ("offset".to_string(), request.offset.to_string()),
        ("limit".to_string(), request.limit.to_string()),
    ];
    if let Some(prefix) = &request.filter {
        query.push(("nameStartsWith".to_string(), prefix.clone()));
    }
    if let Some(key) = api_key {
        query.push(("apikey".to_string(), key.to_string()));
    }
    query
}
