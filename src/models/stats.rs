use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use super::contribution::ContributionTotals;
use super::repo::RepositoryRecord;
use super::user::UserProfile;

/// Per-metric public/private partition. The grand total is always the sum
/// of the two halves; there is no independently stored total to drift.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VisibilitySplit {
    pub public: u64,
    pub private: u64,
}

impl VisibilitySplit {
    pub fn total(&self) -> u64 {
        self.public + self.private
    }
}

impl Serialize for VisibilitySplit {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("VisibilitySplit", 3)?;
        state.serialize_field("public", &self.public)?;
        state.serialize_field("private", &self.private)?;
        state.serialize_field("total", &self.total())?;
        state.end()
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct AggregatedStats {
    pub repos: VisibilitySplit,
    pub stars: VisibilitySplit,
    pub forks: VisibilitySplit,
    pub issues: VisibilitySplit,
    pub pulls: VisibilitySplit,
    pub commits: VisibilitySplit,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StreakResult {
    pub current_streak: u32,
    pub longest_streak: u32,
}

/// The complete snapshot for one invocation. Assembled once, never
/// mutated afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct GitHubStats {
    pub user: UserProfile,
    pub stats: AggregatedStats,
    pub languages: Vec<String>,
    pub account_age_years: i32,
    pub contributions: ContributionTotals,
    pub streaks: StreakResult,
    pub repositories: Vec<RepositoryRecord>,
}

impl GitHubStats {
    /// Snapshot for a login whose data could not be fetched: zeroed
    /// aggregates, so a degraded card can still be rendered from the
    /// sources that did succeed.
    pub fn degraded(login: &str) -> Self {
        Self {
            user: UserProfile::unresolved(login),
            stats: AggregatedStats::default(),
            languages: Vec::new(),
            account_age_years: 0,
            contributions: ContributionTotals::default(),
            streaks: StreakResult::default(),
            repositories: Vec::new(),
        }
    }
}
