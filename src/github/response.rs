//! Typed decoding of the GraphQL responses. Payloads are decoded once at
//! this boundary; the reductions only ever see domain records.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;

use crate::models::{ContributionDay, ContributionTotals, RepositoryRecord, UserProfile};

/// Envelope every GraphQL response arrives in.
#[derive(Debug, Deserialize)]
pub struct GraphQlEnvelope<T> {
    pub data: Option<T>,
    pub errors: Option<Vec<GraphQlError>>,
}

#[derive(Debug, Deserialize)]
pub struct GraphQlError {
    pub message: String,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ProfileData {
    pub user: Option<ProfileNode>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileNode {
    pub login: String,
    pub name: Option<String>,
    pub bio: Option<String>,
    pub location: Option<String>,
    pub company: Option<String>,
    pub website_url: Option<String>,
    pub avatar_url: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub gists: CountField,
    #[serde(default)]
    pub followers: CountField,
    #[serde(default)]
    pub following: CountField,
    #[serde(default)]
    pub repositories: CountField,
    pub contributions_collection: Option<ContributionsCollection>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountField {
    #[serde(default)]
    pub total_count: u32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributionsCollection {
    #[serde(default)]
    pub total_commit_contributions: u32,
    #[serde(default)]
    pub total_issue_contributions: u32,
    #[serde(default)]
    pub total_pull_request_contributions: u32,
    #[serde(default)]
    pub total_pull_request_review_contributions: u32,
    pub contribution_calendar: Option<ContributionCalendar>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributionCalendar {
    #[serde(default)]
    pub total_contributions: u32,
    #[serde(default)]
    pub weeks: Vec<CalendarWeek>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarWeek {
    #[serde(default)]
    pub contribution_days: Vec<CalendarDay>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarDay {
    pub date: NaiveDate,
    #[serde(default)]
    pub contribution_count: u32,
}

#[derive(Debug, Deserialize)]
pub struct RepositoryPageData {
    pub user: Option<RepositoryPageNode>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RepositoryPageNode {
    #[serde(default)]
    pub repositories: RepositoryConnection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositoryConnection {
    #[serde(default)]
    pub page_info: PageInfo,
    #[serde(default)]
    pub nodes: Vec<RepositoryNode>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    #[serde(default)]
    pub has_next_page: bool,
    pub end_cursor: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositoryNode {
    pub name: String,
    #[serde(default)]
    pub is_private: bool,
    #[serde(default)]
    pub is_fork: bool,
    #[serde(default)]
    pub stargazer_count: u32,
    #[serde(default)]
    pub fork_count: u32,
    pub primary_language: Option<LanguageName>,
    #[serde(default)]
    pub issues: CountField,
    #[serde(default)]
    pub pull_requests: CountField,
    pub default_branch_ref: Option<BranchRef>,
}

#[derive(Debug, Deserialize)]
pub struct LanguageName {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct BranchRef {
    pub target: Option<BranchTarget>,
}

#[derive(Debug, Default, Deserialize)]
pub struct BranchTarget {
    #[serde(default)]
    pub history: CountField,
}

impl RepositoryNode {
    fn commit_count(&self) -> u32 {
        self.default_branch_ref
            .as_ref()
            .and_then(|branch| branch.target.as_ref())
            .map(|target| target.history.total_count)
            .unwrap_or(0)
    }
}

impl From<RepositoryNode> for RepositoryRecord {
    fn from(node: RepositoryNode) -> Self {
        let commits = node.commit_count();
        RepositoryRecord {
            name: node.name,
            is_private: node.is_private,
            is_fork: node.is_fork,
            stars: node.stargazer_count,
            forks: node.fork_count,
            issues: node.issues.total_count,
            pull_requests: node.pull_requests.total_count,
            commits,
            primary_language: node.primary_language.map(|lang| lang.name),
        }
    }
}

impl ProfileNode {
    pub fn contribution_totals(&self) -> ContributionTotals {
        let collection = self.contributions_collection.as_ref();
        ContributionTotals {
            commits: collection.map(|c| c.total_commit_contributions).unwrap_or(0),
            issues: collection.map(|c| c.total_issue_contributions).unwrap_or(0),
            pull_requests: collection
                .map(|c| c.total_pull_request_contributions)
                .unwrap_or(0),
            reviews: collection
                .map(|c| c.total_pull_request_review_contributions)
                .unwrap_or(0),
            calendar_total: collection
                .and_then(|c| c.contribution_calendar.as_ref())
                .map(|calendar| calendar.total_contributions)
                .unwrap_or(0),
        }
    }

    /// Flatten the calendar weeks into one day series.
    pub fn calendar_days(&self) -> Vec<ContributionDay> {
        self.contributions_collection
            .as_ref()
            .and_then(|c| c.contribution_calendar.as_ref())
            .map(|calendar| {
                calendar
                    .weeks
                    .iter()
                    .flat_map(|week| week.contribution_days.iter())
                    .map(|day| ContributionDay {
                        date: day.date,
                        count: day.contribution_count,
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn into_profile(self) -> UserProfile {
        UserProfile {
            login: self.login,
            name: self.name,
            bio: self.bio,
            location: self.location,
            company: self.company,
            website: self.website_url,
            gists: self.gists.total_count,
            followers: self.followers.total_count,
            following: self.following.total_count,
            created_at: self.created_at,
            avatar_url: self.avatar_url,
        }
    }
}
