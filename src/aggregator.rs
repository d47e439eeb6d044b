use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use crate::age::account_age_days;
use crate::github::{GithubApi, IssueKind};
use crate::stats::{AggregatedStats, CommitTally, RepositoryMetric};

/// Commit outcome for one repository. Failures are folded into
/// `CommitTally::Unavailable` and never reach the caller as errors.
pub async fn tally_commits(api: &dyn GithubApi, repo: &RepositoryMetric) -> CommitTally {
    if repo.fork {
        return CommitTally::Forked;
    }

    match api.repository_commit_count(&repo.full_name).await {
        Ok(n) => CommitTally::Counted(n),
        Err(e) => CommitTally::Unavailable {
            reason: e.to_string(),
        },
    }
}

/// Collect every counter shown on the card for `username`.
///
/// Only the top-level calls (profile, repository listing, searches, watched
/// and gist listings) can fail the run. Per-repository commit counts that
/// cannot be fetched contribute zero.
pub async fn aggregate(
    api: &dyn GithubApi,
    username: &str,
    now: DateTime<Utc>,
) -> Result<AggregatedStats> {
    let profile = api
        .user_profile(username)
        .await
        .with_context(|| format!("Failed to fetch profile for {username}"))?;
    let repos = api
        .list_repositories(username)
        .await
        .with_context(|| format!("Failed to list repositories for {username}"))?;

    info!(login = %profile.login, repos = repos.len(), "Fetched profile and repositories");

    let stars: u64 = repos.iter().map(|r| r.stargazers).sum();
    let forks: u64 = repos.iter().map(|r| r.forks).sum();

    let mut commits = 0u64;
    for repo in &repos {
        let tally = tally_commits(api, repo).await;
        match &tally {
            CommitTally::Unavailable { reason } => {
                warn!("Failed to count commits for {}: {reason}", repo.full_name);
            }
            other => debug!(repo = %repo.full_name, tally = ?other, "Counted commits"),
        }
        commits += tally.contribution();
    }

    let issues = api
        .search_issue_count(username, IssueKind::Issue)
        .await
        .context("Failed to search issues")?;
    let pull_requests = api
        .search_issue_count(username, IssueKind::PullRequest)
        .await
        .context("Failed to search pull requests")?;
    let watching = api
        .watched_count(username)
        .await
        .context("Failed to count watched repositories")?;
    let gists = api
        .gist_count(username)
        .await
        .context("Failed to count gists")?;

    Ok(AggregatedStats {
        username: username.to_string(),
        name: profile.name,
        bio: profile.bio,
        website: profile.website.filter(|w| !w.is_empty()),
        avatar_url: profile.avatar_url,
        followers: profile.followers,
        hireable: profile.hireable,
        stars,
        forks,
        commits,
        repo_count: repos.len() as u64,
        issues,
        pull_requests,
        watching,
        gists,
        account_age_days: account_age_days(profile.created_at, now),
    })
}
