pub mod config;
pub mod error;
pub mod github;
pub mod models;
pub mod stats;
pub mod theme;
pub mod wakatime;

pub use config::{Config, StatsConfig};
pub use error::{Error, Result};
pub use github::{GitHubClient, GitHubStatsService};
pub use theme::ThemeService;
pub use wakatime::WakaTimeService;
