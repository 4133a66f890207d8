use crate::models::{AggregatedStats, RepositoryRecord, VisibilitySplit};

fn add(split: &mut VisibilitySplit, private: bool, value: u32) {
    if private {
        split.private += u64::from(value);
    } else {
        split.public += u64::from(value);
    }
}

/// Reduce the repository collection into visibility-partitioned totals.
/// Each metric is summed separately for the public and private subsets;
/// grand totals are derived from the two halves.
pub fn aggregate(repositories: &[RepositoryRecord]) -> AggregatedStats {
    let mut stats = AggregatedStats::default();

    for repo in repositories {
        add(&mut stats.repos, repo.is_private, 1);
        add(&mut stats.stars, repo.is_private, repo.stars);
        add(&mut stats.forks, repo.is_private, repo.forks);
        add(&mut stats.issues, repo.is_private, repo.issues);
        add(&mut stats.pulls, repo.is_private, repo.pull_requests);
        add(&mut stats.commits, repo.is_private, repo.commits);
    }

    stats
}
