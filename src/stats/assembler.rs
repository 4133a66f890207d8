use chrono::{Datelike, NaiveDate};

use crate::models::{
    ContributionDay, ContributionTotals, GitHubStats, RepositoryRecord, UserProfile,
};
use crate::stats::{aggregate, compute_streaks, rank_languages};

/// Compose the final snapshot from already-fetched data. No I/O happens
/// here; the reductions are total functions over whatever collection they
/// receive, including the empty one.
///
/// Account age is calendar-year subtraction, so an account created on
/// December 31 reads as one year old the following January.
pub fn assemble(
    user: UserProfile,
    repositories: Vec<RepositoryRecord>,
    contributions: ContributionTotals,
    calendar: Vec<ContributionDay>,
    reference: NaiveDate,
    top_languages: usize,
) -> GitHubStats {
    let stats = aggregate(&repositories);
    let languages = rank_languages(&repositories, top_languages);
    let streaks = compute_streaks(&calendar, reference);
    let account_age_years = user
        .created_at
        .map(|created| reference.year() - created.year())
        .unwrap_or(0);

    GitHubStats {
        user,
        stats,
        languages,
        account_age_years,
        contributions,
        streaks,
        repositories,
    }
}
