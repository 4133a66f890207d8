use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One day of the contribution calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributionDay {
    pub date: NaiveDate,
    pub count: u32,
}

/// Contribution totals reported alongside the calendar.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ContributionTotals {
    pub commits: u32,
    pub issues: u32,
    pub pull_requests: u32,
    pub reviews: u32,
    pub calendar_total: u32,
}
