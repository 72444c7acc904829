#![allow(dead_code)]

use axum::{
    extract::Query,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use repo_pinboard::error::{PinboardError, Result};
use repo_pinboard::github::RepoSearch;
use repo_pinboard::types::{SearchPage, SearchResult};
use serde_json::json;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// How the scripted backend answers one query
#[derive(Debug, Clone)]
pub enum Scripted {
    Page(SearchPage),
    Status(u16),
    Broken,
}

/// In-memory search backend with per-query answers and delays
pub struct ScriptedSearch {
    queries: Mutex<Vec<String>>,
    answers: Mutex<HashMap<String, (Duration, Scripted)>>,
}

impl ScriptedSearch {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            queries: Mutex::new(Vec::new()),
            answers: Mutex::new(HashMap::new()),
        })
    }

    pub fn respond(&self, query: &str, items: Vec<SearchResult>) {
        self.script(query, Duration::ZERO, Scripted::Page(SearchPage::new(items)));
    }

    pub fn respond_after(&self, query: &str, delay: Duration, items: Vec<SearchResult>) {
        self.script(query, delay, Scripted::Page(SearchPage::new(items)));
    }

    pub fn fail_with_status(&self, query: &str, status: u16) {
        self.script(query, Duration::ZERO, Scripted::Status(status));
    }

    pub fn fail_with_garbage(&self, query: &str) {
        self.script(query, Duration::ZERO, Scripted::Broken);
    }

    fn script(&self, query: &str, delay: Duration, answer: Scripted) {
        self.answers
            .lock()
            .unwrap()
            .insert(query.to_string(), (delay, answer));
    }

    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

#[ractor::async_trait]
impl RepoSearch for ScriptedSearch {
    async fn search_repositories(&self, query: &str) -> Result<SearchPage> {
        self.queries.lock().unwrap().push(query.to_string());

        let scripted = self.answers.lock().unwrap().get(query).cloned();
        let (delay, answer) =
            scripted.unwrap_or((Duration::ZERO, Scripted::Page(SearchPage::default())));

        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        match answer {
            Scripted::Page(page) => Ok(page),
            Scripted::Status(code) => Err(PinboardError::UnexpectedStatus(
                reqwest::StatusCode::from_u16(code).unwrap(),
            )),
            Scripted::Broken => {
                let err = serde_json::from_str::<SearchPage>("{\"items\":").unwrap_err();
                Err(err.into())
            }
        }
    }
}

pub fn repo(name: &str, owner: &str, stars: u64) -> SearchResult {
    SearchResult::new(name).with_owner(owner).with_stars(stars)
}

pub fn repos(count: usize) -> Vec<SearchResult> {
    (0..count)
        .map(|i| repo(&format!("repo-{}", i), "octocat", i as u64))
        .collect()
}

/// Let every ready task run, then advance the paused clock by a millisecond.
pub async fn settle() {
    tokio::time::sleep(Duration::from_millis(1)).await;
}

/// Serve `router` on an ephemeral local port and return its base URL.
pub async fn spawn_mock_github(router: Router) -> anyhow::Result<String> {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, router).await {
            eprintln!("Mock GitHub server stopped: {}", e);
        }
    });

    Ok(format!("http://{}", addr))
}

/// A search endpoint that echoes the query back as a single repository.
pub fn echo_search_router() -> Router {
    Router::new().route("/search/repositories", get(echo_search))
}

async fn echo_search(
    Query(params): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> impl IntoResponse {
    let accept = headers
        .get("accept")
        .and_then(|h| h.to_str().ok())
        .unwrap_or_default();
    if accept != "application/vnd.github.v3+json" {
        return (
            StatusCode::NOT_ACCEPTABLE,
            Json(json!({ "message": "unexpected Accept header" })),
        );
    }

    let query = params.get("q").cloned().unwrap_or_default();
    let per_page: u64 = params
        .get("per_page")
        .and_then(|p| p.parse().ok())
        .unwrap_or(0);

    (
        StatusCode::OK,
        Json(json!({
            "total_count": per_page,
            "incomplete_results": false,
            "items": [
                {
                    "name": query,
                    "full_name": format!("octocat/{}", query),
                    "owner": { "login": "octocat", "id": 1 },
                    "stargazers_count": 42
                }
            ]
        })),
    )
}

/// A search endpoint that always answers with `status` and `body`.
pub fn fixed_router(status: StatusCode, body: &'static str) -> Router {
    Router::new().route(
        "/search/repositories",
        get(move || async move { (status, body) }),
    )
}
