use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Profile fields fetched once per run from `GET /users/{username}`.
#[derive(Debug, Clone, Deserialize)]
pub struct UserProfile {
    pub login: String,
    pub name: Option<String>,
    pub bio: Option<String>,
    #[serde(rename = "blog")]
    pub website: Option<String>,
    pub avatar_url: String,
    #[serde(default)]
    pub followers: u64,
    pub hireable: Option<bool>,
    pub created_at: DateTime<Utc>,
}

/// One entry of the repository listing. Only lives for the aggregation pass.
#[derive(Debug, Clone, Deserialize)]
pub struct RepositoryMetric {
    pub full_name: String,
    #[serde(rename = "stargazers_count")]
    pub stargazers: u64,
    #[serde(rename = "forks_count")]
    pub forks: u64,
    pub fork: bool,
}

/// Outcome of counting the commits of a single repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitTally {
    /// Forks are never attributed to the user.
    Forked,
    Counted(u64),
    /// The count could not be fetched; the repository contributes nothing.
    Unavailable { reason: String },
}

impl CommitTally {
    pub fn contribution(&self) -> u64 {
        match self {
            CommitTally::Counted(n) => *n,
            CommitTally::Forked | CommitTally::Unavailable { .. } => 0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AggregatedStats {
    pub username: String,
    pub name: Option<String>,
    pub bio: Option<String>,
    pub website: Option<String>,
    pub avatar_url: String,
    pub followers: u64,
    pub hireable: Option<bool>,
    pub stars: u64,
    pub forks: u64,
    pub commits: u64,
    pub repo_count: u64,
    pub issues: u64,
    pub pull_requests: u64,
    pub watching: u64,
    pub gists: u64,
    pub account_age_days: i64,
}
