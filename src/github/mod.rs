pub mod client;
pub mod paginator;
pub mod queries;
pub mod response;
pub mod service;

pub use client::GitHubClient;
pub use paginator::{RepositoryFetcher, RepositoryPage, RepositoryPageSource};
pub use service::GitHubStatsService;
