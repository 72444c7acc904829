use crate::error::{PinboardError, Result};
use crate::types::SearchPage;
use reqwest::{Client, Response};
use std::time::Duration;
use tracing::debug;
use url::Url;

pub const API_BASE_URL: &str = "https://api.github.com";
/// Page size requested from the search endpoint.
pub const PER_PAGE: u32 = 5;
const ACCEPT_V3: &str = "application/vnd.github.v3+json";
const USER_AGENT: &str = "Repo Pinboard/0.1.0";

/// Anything that can answer a repository search.
///
/// The search controller only talks to this trait, so tests can drive it with a
/// scripted backend instead of the network.
#[ractor::async_trait]
pub trait RepoSearch: Send + Sync + 'static {
    async fn search_repositories(&self, query: &str) -> Result<SearchPage>;
}

#[derive(Debug)]
pub struct GitHubClient {
    client: Client,
    base_url: Url,
}

impl GitHubClient {
    pub fn new() -> Result<Self> {
        Self::with_base_url(API_BASE_URL, Duration::from_secs(30))
    }

    pub fn with_base_url(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;

        let mut base_url = Url::parse(base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(PinboardError::ApiError(format!(
                "API URL cannot be used as a base: {}",
                base_url
            )));
        }
        // Url::join drops the last path segment unless it ends with a slash
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        Ok(GitHubClient { client, base_url })
    }

    /// Build the search URL for an already-trimmed query.
    pub fn search_url(&self, query: &str) -> Result<Url> {
        let mut url = self.base_url.join("search/repositories")?;
        url.query_pairs_mut()
            .append_pair("q", query)
            .append_pair("per_page", &PER_PAGE.to_string());
        Ok(url)
    }

    async fn make_request(&self, url: Url) -> Result<Response> {
        let response = self
            .client
            .get(url)
            .header("Accept", ACCEPT_V3)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            Err(PinboardError::UnexpectedStatus(status))
        }
    }
}

#[ractor::async_trait]
impl RepoSearch for GitHubClient {
    async fn search_repositories(&self, query: &str) -> Result<SearchPage> {
        let url = self.search_url(query)?;
        debug!(%url, "Searching repositories");

        let response = self.make_request(url).await?;
        let body = response.text().await?;
        let page: SearchPage = serde_json::from_str(&body)?;

        debug!(
            total_count = page.total_count,
            returned = page.items.len(),
            "Search completed"
        );
        Ok(page)
    }
}
