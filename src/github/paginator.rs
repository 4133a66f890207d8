use async_trait::async_trait;

use crate::error::Result;
use crate::models::RepositoryRecord;

/// One page of the repository stream.
#[derive(Debug, Default)]
pub struct RepositoryPage {
    pub records: Vec<RepositoryRecord>,
    pub has_next_page: bool,
    pub end_cursor: Option<String>,
}

/// Source of repository pages, keyed by an opaque cursor.
#[async_trait]
pub trait RepositoryPageSource: Send + Sync {
    async fn fetch_page(
        &self,
        username: &str,
        cursor: Option<&str>,
        page_size: u32,
    ) -> Result<RepositoryPage>;
}

pub struct RepositoryFetcher<'a> {
    source: &'a dyn RepositoryPageSource,
}

impl<'a> RepositoryFetcher<'a> {
    pub fn new(source: &'a dyn RepositoryPageSource) -> Self {
        Self { source }
    }

    /// Drain the repository stream page by page.
    ///
    /// Pages are requested strictly in sequence because each cursor comes
    /// from the previous page. A failed page ends the stream and whatever
    /// has accumulated so far is returned as a valid partial collection.
    /// The final page may overshoot `max_repos` in flight; the result is
    /// truncated to exactly `max_repos` before returning.
    pub async fn fetch_all(
        &self,
        username: &str,
        page_size: u32,
        max_repos: usize,
    ) -> Vec<RepositoryRecord> {
        let mut records: Vec<RepositoryRecord> = Vec::new();
        let mut cursor: Option<String> = None;
        let mut has_next_page = true;

        while has_next_page && records.len() < max_repos {
            let page = match self
                .source
                .fetch_page(username, cursor.as_deref(), page_size)
                .await
            {
                Ok(page) => page,
                Err(err) => {
                    tracing::warn!(
                        "Repository page fetch failed, keeping {} records: {}",
                        records.len(),
                        err
                    );
                    break;
                }
            };

            records.extend(page.records);
            tracing::debug!("Fetched a repository page (total: {})", records.len());

            // A next page without a cursor would loop on the first page.
            has_next_page = page.has_next_page && page.end_cursor.is_some();
            cursor = page.end_cursor;
        }

        records.truncate(max_repos);
        records
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    struct ScriptedSource {
        pages: Mutex<VecDeque<Result<RepositoryPage>>>,
        cursors_seen: Mutex<Vec<Option<String>>>,
    }

    impl ScriptedSource {
        fn new(pages: Vec<Result<RepositoryPage>>) -> Self {
            Self {
                pages: Mutex::new(pages.into()),
                cursors_seen: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl RepositoryPageSource for ScriptedSource {
        async fn fetch_page(
            &self,
            _username: &str,
            cursor: Option<&str>,
            _page_size: u32,
        ) -> Result<RepositoryPage> {
            self.cursors_seen
                .lock()
                .unwrap()
                .push(cursor.map(str::to_string));
            self.pages
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(Error::Upstream("script exhausted".into())))
        }
    }

    fn repo(name: &str) -> RepositoryRecord {
        RepositoryRecord {
            name: name.to_string(),
            is_private: false,
            is_fork: false,
            stars: 0,
            forks: 0,
            issues: 0,
            pull_requests: 0,
            commits: 0,
            primary_language: None,
        }
    }

    fn page(count: usize, end_cursor: Option<&str>) -> RepositoryPage {
        RepositoryPage {
            records: (0..count).map(|i| repo(&format!("repo-{}", i))).collect(),
            has_next_page: end_cursor.is_some(),
            end_cursor: end_cursor.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn drains_all_pages_and_stops_on_last() {
        let source = ScriptedSource::new(vec![
            Ok(page(100, Some("c1"))),
            Ok(page(100, Some("c2"))),
            Ok(page(50, None)),
        ]);

        let records = RepositoryFetcher::new(&source)
            .fetch_all("octocat", 100, 1000)
            .await;

        assert_eq!(records.len(), 250);
        let cursors = source.cursors_seen.lock().unwrap();
        assert_eq!(
            *cursors,
            vec![None, Some("c1".to_string()), Some("c2".to_string())]
        );
    }

    #[tokio::test]
    async fn cap_truncates_to_exact_limit() {
        let source = ScriptedSource::new(vec![
            Ok(page(100, Some("c1"))),
            Ok(page(100, Some("c2"))),
            Ok(page(100, Some("c3"))),
        ]);

        let records = RepositoryFetcher::new(&source)
            .fetch_all("octocat", 100, 150)
            .await;

        assert_eq!(records.len(), 150);
        // The cap was hit after the second page; the third is never requested.
        assert_eq!(source.cursors_seen.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn first_page_failure_yields_empty_collection() {
        let source = ScriptedSource::new(vec![Err(Error::Upstream("boom".into()))]);

        let records = RepositoryFetcher::new(&source)
            .fetch_all("octocat", 100, 1000)
            .await;

        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn mid_stream_failure_keeps_partial_collection() {
        let source = ScriptedSource::new(vec![
            Ok(page(100, Some("c1"))),
            Err(Error::Transport("timed out".into())),
        ]);

        let records = RepositoryFetcher::new(&source)
            .fetch_all("octocat", 100, 1000)
            .await;

        assert_eq!(records.len(), 100);
    }

    #[tokio::test]
    async fn next_page_without_cursor_ends_stream() {
        let mut malformed = page(10, None);
        malformed.has_next_page = true;
        let source = ScriptedSource::new(vec![Ok(malformed), Ok(page(10, None))]);

        let records = RepositoryFetcher::new(&source)
            .fetch_all("octocat", 100, 1000)
            .await;

        assert_eq!(records.len(), 10);
        assert_eq!(source.cursors_seen.lock().unwrap().len(), 1);
    }
}
