use indexmap::IndexMap;

use crate::models::RepositoryRecord;

/// Rank primary languages by how many repositories name them.
///
/// The tally keeps first-seen order, so equal counts stay in encounter
/// order after the stable sort. Repositories without a primary language
/// are skipped rather than counted under a placeholder.
pub fn rank_languages(repositories: &[RepositoryRecord], top_n: usize) -> Vec<String> {
    let mut tally: IndexMap<&str, usize> = IndexMap::new();
    for repo in repositories {
        if let Some(language) = repo.primary_language.as_deref() {
            *tally.entry(language).or_insert(0) += 1;
        }
    }

    let mut ranked: Vec<(&str, usize)> = tally.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.truncate(top_n);
    ranked
        .into_iter()
        .map(|(language, _)| language.to_string())
        .collect()
}
