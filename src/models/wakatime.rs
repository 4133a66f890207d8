use serde::{Deserialize, Serialize};

/// Envelope for both WakaTime stats endpoints. The upstream payload is
/// already aggregated; only the consumed subset is decoded.
#[derive(Debug, Default, Deserialize)]
pub struct WakaStatsResponse {
    #[serde(default)]
    pub data: WakaStatsData,
}

#[derive(Debug, Default, Deserialize)]
pub struct WakaStatsData {
    #[serde(default)]
    pub total_seconds: f64,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub digital: Option<String>,
    #[serde(default)]
    pub daily_average: f64,
    #[serde(default)]
    pub editors: Vec<WakaUsageEntry>,
    #[serde(default)]
    pub operating_systems: Vec<WakaUsageEntry>,
    #[serde(default)]
    pub machines: Vec<WakaUsageEntry>,
    #[serde(default)]
    pub projects: Vec<WakaUsageEntry>,
    #[serde(default)]
    pub languages: Vec<WakaUsageEntry>,
    #[serde(default)]
    pub categories: Vec<WakaUsageEntry>,
    #[serde(default)]
    pub best_day: Option<WakaBestDay>,
    #[serde(default)]
    pub range: Option<WakaRange>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WakaUsageEntry {
    pub name: String,
    #[serde(default)]
    pub total_seconds: f64,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub percent: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WakaBestDay {
    pub date: String,
    #[serde(default)]
    pub total_seconds: f64,
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WakaRange {
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
}

/// Reshaped coding stats as the card consumes them.
#[derive(Debug, Default, Serialize)]
pub struct WakaTimeSnapshot {
    pub weekly: WeeklyCoding,
    pub all_time: AllTimeCoding,
}

#[derive(Debug, Default, Serialize)]
pub struct WeeklyCoding {
    pub total_seconds: f64,
    pub total_text: Option<String>,
    pub daily_average_seconds: f64,
    pub editor: Option<String>,
    pub operating_system: Option<String>,
    pub machine: Option<String>,
    pub top_projects: Vec<WakaUsageEntry>,
    pub top_languages: Vec<WakaUsageEntry>,
    pub categories: Vec<WakaUsageEntry>,
    pub best_day: Option<WakaBestDay>,
}

#[derive(Debug, Default, Serialize)]
pub struct AllTimeCoding {
    pub total_seconds: f64,
    pub total_text: Option<String>,
    pub digital: Option<String>,
    pub daily_average_seconds: f64,
    pub range_start: Option<String>,
    pub range_end: Option<String>,
}
