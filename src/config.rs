use crate::error::{Error, Result};
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub github_token: String,
    pub wakatime_api_key: Option<String>,
    pub theme_name: String,
    pub max_repos: usize,
    pub top_languages: usize,
    pub page_size: u32,
    pub request_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let github_token = env::var("GITHUB_TOKEN")
            .map_err(|_| Error::Config("GITHUB_TOKEN environment variable not set".to_string()))?;

        let wakatime_api_key = env::var("WAKATIME_API_KEY").ok().filter(|v| !v.is_empty());

        let theme_name = env::var("THEME_NAME").unwrap_or_else(|_| "Aco".to_string());

        let max_repos = env::var("MAX_REPOS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(1000);

        let top_languages = env::var("TOP_LANGUAGES")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(5);

        let page_size = env::var("PAGE_SIZE")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(100);

        let request_timeout_secs = env::var("REQUEST_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(30);

        Ok(Self {
            github_token,
            wakatime_api_key,
            theme_name,
            max_repos,
            top_languages,
            page_size,
            request_timeout_secs,
        })
    }
}

#[derive(Debug, Clone)]
pub struct StatsConfig {
    pub max_repos: usize,
    pub top_languages: usize,
    pub page_size: u32,
}

impl From<&Config> for StatsConfig {
    fn from(config: &Config) -> Self {
        Self {
            max_repos: config.max_repos,
            top_languages: config.top_languages,
            page_size: config.page_size,
        }
    }
}
