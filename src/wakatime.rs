use std::time::Duration;

use futures::join;
use reqwest::Client;

use crate::error::{Error, Result};
use crate::models::{
    AllTimeCoding, WakaStatsData, WakaStatsResponse, WakaTimeSnapshot, WeeklyCoding,
};

const WAKATIME_WEEKLY_URL: &str = "https://wakatime.com/api/v1/users/current/stats/last_7_days";
const WAKATIME_ALL_TIME_URL: &str =
    "https://wakatime.com/api/v1/users/current/all_time_since_today";

/// Reshapes the already-aggregated WakaTime responses for the card. No
/// pagination and no derived metrics of its own.
pub struct WakaTimeService {
    client: Client,
    api_key: Option<String>,
}

impl WakaTimeService {
    pub fn new(api_key: Option<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, api_key })
    }

    /// Fetch both endpoints concurrently and reshape the result. Failures
    /// and a missing API key both degrade to an empty snapshot.
    pub async fn fetch_stats(&self) -> WakaTimeSnapshot {
        let Some(api_key) = self.api_key.as_deref() else {
            tracing::info!("No WakaTime API key configured, skipping coding stats");
            return WakaTimeSnapshot::default();
        };

        let (weekly, all_time) = join!(
            self.call(WAKATIME_WEEKLY_URL, api_key),
            self.call(WAKATIME_ALL_TIME_URL, api_key),
        );

        WakaTimeSnapshot {
            weekly: weekly.map(reshape_weekly).unwrap_or_else(|err| {
                tracing::warn!("WakaTime weekly stats unavailable: {}", err);
                WeeklyCoding::default()
            }),
            all_time: all_time.map(reshape_all_time).unwrap_or_else(|err| {
                tracing::warn!("WakaTime all-time stats unavailable: {}", err);
                AllTimeCoding::default()
            }),
        }
    }

    async fn call(&self, url: &str, api_key: &str) -> Result<WakaStatsData> {
        let response = self
            .client
            .get(url)
            .query(&[("api_key", api_key)])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Error::Upstream(format!(
                "WakaTime returned {}",
                response.status()
            )));
        }

        let body: WakaStatsResponse = response.json().await?;
        Ok(body.data)
    }
}

fn reshape_weekly(data: WakaStatsData) -> WeeklyCoding {
    WeeklyCoding {
        total_seconds: data.total_seconds,
        total_text: data.text,
        daily_average_seconds: data.daily_average,
        editor: data.editors.first().map(|entry| entry.name.clone()),
        operating_system: data
            .operating_systems
            .first()
            .map(|entry| entry.name.clone()),
        machine: data.machines.first().map(|entry| entry.name.clone()),
        top_projects: data.projects.into_iter().take(5).collect(),
        top_languages: data.languages.into_iter().take(5).collect(),
        categories: data.categories,
        best_day: data.best_day,
    }
}

fn reshape_all_time(data: WakaStatsData) -> AllTimeCoding {
    AllTimeCoding {
        total_seconds: data.total_seconds,
        total_text: data.text,
        digital: data.digital,
        daily_average_seconds: data.daily_average,
        range_start: data.range.as_ref().and_then(|range| range.start_date.clone()),
        range_end: data.range.and_then(|range| range.end_date),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::WakaUsageEntry;

    fn entry(name: &str) -> WakaUsageEntry {
        WakaUsageEntry {
            name: name.to_string(),
            total_seconds: 100.0,
            text: None,
            percent: 10.0,
        }
    }

    #[test]
    fn weekly_reshape_truncates_to_top_five() {
        let data = WakaStatsData {
            projects: (0..8).map(|i| entry(&format!("p{}", i))).collect(),
            languages: (0..3).map(|i| entry(&format!("l{}", i))).collect(),
            editors: vec![entry("Neovim"), entry("Zed")],
            ..WakaStatsData::default()
        };

        let weekly = reshape_weekly(data);
        assert_eq!(weekly.top_projects.len(), 5);
        assert_eq!(weekly.top_languages.len(), 3);
        assert_eq!(weekly.editor.as_deref(), Some("Neovim"));
    }

    #[test]
    fn weekly_reshape_handles_empty_breakdowns() {
        let weekly = reshape_weekly(WakaStatsData::default());
        assert_eq!(weekly.editor, None);
        assert_eq!(weekly.operating_system, None);
        assert!(weekly.top_projects.is_empty());
    }

    #[test]
    fn all_time_reshape_carries_range() {
        let data: WakaStatsResponse = serde_json::from_str(
            r#"{
                "data": {
                    "total_seconds": 360000.5,
                    "text": "100 hrs",
                    "daily_average": 3600.0,
                    "range": { "start_date": "2020-01-01", "end_date": "2026-08-07" }
                }
            }"#,
        )
        .unwrap();

        let all_time = reshape_all_time(data.data);
        assert_eq!(all_time.total_seconds, 360000.5);
        assert_eq!(all_time.range_start.as_deref(), Some("2020-01-01"));
        assert_eq!(all_time.range_end.as_deref(), Some("2026-08-07"));
    }
}
