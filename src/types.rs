use serde::{Deserialize, Serialize};

// GitHub search API response structures

/// Body of `GET /search/repositories`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchPage {
    #[serde(default)]
    pub total_count: u64,
    pub items: Vec<SearchResult>,
}

impl SearchPage {
    pub fn new(items: Vec<SearchResult>) -> Self {
        Self {
            total_count: items.len() as u64,
            items,
        }
    }
}

/// A single repository hit. Only `name` is guaranteed by the API contract we rely on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub name: String,
    #[serde(default)]
    pub owner: Option<RepoOwner>,
    #[serde(default)]
    pub stargazers_count: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoOwner {
    #[serde(default)]
    pub login: Option<String>,
}

impl SearchResult {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            owner: None,
            stargazers_count: None,
        }
    }

    pub fn with_owner(mut self, login: impl Into<String>) -> Self {
        self.owner = Some(RepoOwner {
            login: Some(login.into()),
        });
        self
    }

    pub fn with_stars(mut self, stars: u64) -> Self {
        self.stargazers_count = Some(stars);
        self
    }

    /// Owner login, if the API sent one.
    pub fn owner_login(&self) -> Option<&str> {
        self.owner.as_ref().and_then(|o| o.login.as_deref())
    }

    /// Star count, 0 when absent or null.
    pub fn stars(&self) -> u64 {
        self.stargazers_count.unwrap_or(0)
    }
}
