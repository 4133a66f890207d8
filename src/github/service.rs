use async_trait::async_trait;
use chrono::Utc;
use indicatif::ProgressBar;
use serde_json::json;

use crate::config::StatsConfig;
use crate::error::{Error, Result};
use crate::github::client::GitHubClient;
use crate::github::paginator::{RepositoryFetcher, RepositoryPage, RepositoryPageSource};
use crate::github::queries::{REPOSITORIES_QUERY, USER_PROFILE_QUERY};
use crate::github::response::{ProfileData, RepositoryPageData};
use crate::models::GitHubStats;
use crate::stats::assemble;

#[async_trait]
impl RepositoryPageSource for GitHubClient {
    async fn fetch_page(
        &self,
        username: &str,
        cursor: Option<&str>,
        page_size: u32,
    ) -> Result<RepositoryPage> {
        let variables = json!({
            "username": username,
            "first": page_size,
            "after": cursor,
        });
        let data: RepositoryPageData = self.execute(REPOSITORIES_QUERY, variables).await?;
        let connection = data.user.unwrap_or_default().repositories;

        Ok(RepositoryPage {
            records: connection.nodes.into_iter().map(Into::into).collect(),
            has_next_page: connection.page_info.has_next_page,
            end_cursor: connection.page_info.end_cursor,
        })
    }
}

/// Fetches one user's activity and reduces it into a stats snapshot.
pub struct GitHubStatsService {
    client: GitHubClient,
    config: StatsConfig,
}

impl GitHubStatsService {
    pub fn new(client: GitHubClient, config: StatsConfig) -> Self {
        Self { client, config }
    }

    /// Fetch everything for `username` and assemble one snapshot.
    ///
    /// Fetch failures never escape: a failed profile query produces a
    /// degraded all-zero snapshot and a failed repository page leaves a
    /// partial collection behind it.
    pub async fn fetch_stats(&self, username: &str) -> GitHubStats {
        match self.try_fetch(username).await {
            Ok(stats) => stats,
            Err(err) => {
                tracing::warn!("GitHub stats fetch failed for {}: {}", username, err);
                GitHubStats::degraded(username)
            }
        }
    }

    async fn try_fetch(&self, username: &str) -> Result<GitHubStats> {
        tracing::info!("Fetching GitHub profile for: {}", username);
        let data: ProfileData = self
            .client
            .execute(USER_PROFILE_QUERY, json!({ "username": username }))
            .await?;
        let profile = data
            .user
            .ok_or_else(|| Error::NotFound(username.to_string()))?;

        let totals = profile.contribution_totals();
        let calendar = profile.calendar_days();
        tracing::info!(
            "User reports {} repositories",
            profile.repositories.total_count
        );

        let spinner = ProgressBar::new_spinner();
        spinner.set_message("fetching repositories");
        let fetcher = RepositoryFetcher::new(&self.client);
        let repositories = fetcher
            .fetch_all(username, self.config.page_size, self.config.max_repos)
            .await;
        spinner.finish_with_message(format!("fetched {} repositories", repositories.len()));

        Ok(assemble(
            profile.into_profile(),
            repositories,
            totals,
            calendar,
            Utc::now().date_naive(),
            self.config.top_languages,
        ))
    }
}
