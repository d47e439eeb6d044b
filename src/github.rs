use async_trait::async_trait;
use regex::Regex;
use reqwest::header::{ACCEPT, HeaderMap, LINK, USER_AGENT};
use reqwest::{Client, Response, Url};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::sync::{Arc, LazyLock};
use thiserror::Error;
use tracing::debug;

use crate::config::Config;
use crate::stats::{RepositoryMetric, UserProfile};

const PAGE_SIZE: &str = "100";

static LINK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<([^>]+)>\s*;\s*rel="([^"]+)""#).expect("link header regex is valid")
});

#[derive(Error, Debug)]
pub enum GithubError {
    #[error("Network error requesting {url}: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("GitHub API returned HTTP {status} for {url}: {message}")]
    Status {
        url: String,
        status: u16,
        message: String,
    },

    #[error("Failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Invalid URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },
}

pub type Result<T> = std::result::Result<T, GithubError>;

/// Which kind of item an issue search should count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueKind {
    Issue,
    PullRequest,
}

impl IssueKind {
    fn qualifier(self) -> &'static str {
        match self {
            IssueKind::Issue => "issue",
            IssueKind::PullRequest => "pr",
        }
    }
}

/// The slice of the GitHub REST API the stats card needs.
#[async_trait]
pub trait GithubApi: Send + Sync {
    async fn user_profile(&self, username: &str) -> Result<UserProfile>;

    /// Every repository owned by `username`, across all pages.
    async fn list_repositories(&self, username: &str) -> Result<Vec<RepositoryMetric>>;

    /// Total commits on the default branch of `full_name` (`owner/repo`).
    async fn repository_commit_count(&self, full_name: &str) -> Result<u64>;

    async fn search_issue_count(&self, author: &str, kind: IssueKind) -> Result<u64>;

    async fn watched_count(&self, username: &str) -> Result<u64>;

    async fn gist_count(&self, username: &str) -> Result<u64>;
}

#[derive(Clone)]
pub struct GithubClient {
    token: Option<Arc<String>>,
    api_base: Arc<String>,
    http: Arc<Client>,
}

impl GithubClient {
    /// Create a REST client; requests are unauthenticated when no token is configured.
    pub fn new(config: &Config) -> Self {
        Self {
            token: config.token.clone().map(Arc::new),
            api_base: Arc::new(config.api_base.clone()),
            http: Arc::new(Client::new()),
        }
    }

    fn endpoint(&self, path: &str, query: &[(&str, &str)]) -> Result<Url> {
        let raw = format!("{}{}", self.api_base, path);
        let mut url = Url::parse(&raw).map_err(|e| GithubError::InvalidUrl {
            url: raw.clone(),
            reason: e.to_string(),
        })?;
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }
        Ok(url)
    }

    /// Low-level GET. Non-2xx responses become `GithubError::Status`; nothing is retried.
    async fn get(&self, url: &Url) -> Result<Response> {
        debug!(%url, "GET");

        let mut req = self
            .http
            .get(url.clone())
            .header(ACCEPT, "application/vnd.github+json")
            .header(USER_AGENT, "halfguru-stats");
        if let Some(token) = &self.token {
            req = req.bearer_auth(token.as_str());
        }

        let resp = req.send().await.map_err(|source| GithubError::Network {
            url: url.to_string(),
            source,
        })?;

        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }

        #[derive(Deserialize)]
        struct ApiMessage {
            message: Option<String>,
        }

        let message = resp
            .json::<ApiMessage>()
            .await
            .ok()
            .and_then(|m| m.message)
            .unwrap_or_else(|| status.canonical_reason().unwrap_or("unknown").to_string());

        Err(GithubError::Status {
            url: url.to_string(),
            status: status.as_u16(),
            message,
        })
    }

    async fn decode<T: DeserializeOwned>(url: &Url, resp: Response) -> Result<T> {
        resp.json().await.map_err(|source| GithubError::Decode {
            url: url.to_string(),
            source,
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &Url) -> Result<T> {
        let resp = self.get(url).await?;
        Self::decode(url, resp).await
    }

    /// Follow `rel="next"` links until the listing is exhausted.
    async fn get_all<T: DeserializeOwned>(&self, first: Url) -> Result<Vec<T>> {
        let mut out = Vec::new();
        let mut url = first;

        loop {
            let resp = self.get(&url).await?;
            let next = link_target(resp.headers(), "next");
            let page: Vec<T> = Self::decode(&url, resp).await?;
            out.extend(page);

            match next {
                Some(n) => {
                    url = Url::parse(&n).map_err(|e| GithubError::InvalidUrl {
                        url: n.clone(),
                        reason: e.to_string(),
                    })?;
                }
                None => break,
            }
        }

        Ok(out)
    }

    /// Count a listing without downloading it: request one item per page and
    /// read the page number of the `rel="last"` link.
    async fn count_items(&self, path: &str) -> Result<u64> {
        let url = self.endpoint(path, &[("per_page", "1")])?;
        let resp = self.get(&url).await?;

        if let Some(last) = link_target(resp.headers(), "last") {
            return page_number(&last).ok_or_else(|| GithubError::InvalidUrl {
                url: last.clone(),
                reason: "last page link has no page parameter".to_string(),
            });
        }

        // Zero or one item: everything fits on the first page.
        let items: Vec<serde_json::Value> = Self::decode(&url, resp).await?;
        Ok(items.len() as u64)
    }
}

#[async_trait]
impl GithubApi for GithubClient {
    async fn user_profile(&self, username: &str) -> Result<UserProfile> {
        let url = self.endpoint(&format!("/users/{username}"), &[])?;
        self.get_json(&url).await
    }

    async fn list_repositories(&self, username: &str) -> Result<Vec<RepositoryMetric>> {
        let url = self.endpoint(
            &format!("/users/{username}/repos"),
            &[("per_page", PAGE_SIZE)],
        )?;
        self.get_all(url).await
    }

    async fn repository_commit_count(&self, full_name: &str) -> Result<u64> {
        self.count_items(&format!("/repos/{full_name}/commits"))
            .await
    }

    async fn search_issue_count(&self, author: &str, kind: IssueKind) -> Result<u64> {
        #[derive(Deserialize)]
        struct SearchTotal {
            total_count: u64,
        }

        let q = format!("author:{author} type:{}", kind.qualifier());
        let url = self.endpoint("/search/issues", &[("q", q.as_str()), ("per_page", "1")])?;
        let parsed: SearchTotal = self.get_json(&url).await?;
        Ok(parsed.total_count)
    }

    async fn watched_count(&self, username: &str) -> Result<u64> {
        self.count_items(&format!("/users/{username}/subscriptions"))
            .await
    }

    async fn gist_count(&self, username: &str) -> Result<u64> {
        self.count_items(&format!("/users/{username}/gists")).await
    }
}

/// Target URL of the `Link` header entry with the given `rel`.
fn link_target(headers: &HeaderMap, rel: &str) -> Option<String> {
    let value = headers.get(LINK)?.to_str().ok()?;
    LINK_RE
        .captures_iter(value)
        .find(|c| &c[2] == rel)
        .map(|c| c[1].to_string())
}

fn page_number(link: &str) -> Option<u64> {
    let url = Url::parse(link).ok()?;
    url.query_pairs()
        .find(|(k, _)| k == "page")
        .and_then(|(_, v)| v.parse().ok())
}
