use serde::{Deserialize, Serialize};

/// One repository as delivered by the API, fully decoded. Counts for
/// absent nested fields (no default branch, no history) are 0.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepositoryRecord {
    pub name: String,
    pub is_private: bool,
    pub is_fork: bool,
    pub stars: u32,
    pub forks: u32,
    pub issues: u32,
    pub pull_requests: u32,
    pub commits: u32,
    pub primary_language: Option<String>,
}
