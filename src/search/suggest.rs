//! "Did you mean" suggestions derived from the top of the ranked list.

use std::collections::HashSet;

use crate::models::SearchResult;
use crate::search::query;

const MAX_SUGGESTIONS: usize = 5;
const TITLE_SOURCES: usize = 5;
const TAG_SOURCES: usize = 3;
const CATEGORY_SOURCES: usize = 3;

/// Build up to five follow-up suggestions from the ranked results.
///
/// The candidate pool is ordered: titles of the top five results, then tags
/// of the top three, then categories of the top three. Duplicates are
/// dropped case-sensitively (first occurrence wins), then candidates must
/// contain the query case-insensitively without being equal to it.
pub fn build_suggestions(results: &[SearchResult], query: &str) -> Vec<String> {
    if !query::is_searchable(query) {
        return Vec::new();
    }

    let mut pool: Vec<String> = Vec::new();
    for result in results.iter().take(TITLE_SOURCES) {
        pool.push(result.title.clone());
    }
    for result in results.iter().take(TAG_SOURCES) {
        if let Some(tags) = &result.tags {
            pool.extend(tags.iter().cloned());
        }
    }
    for result in results.iter().take(CATEGORY_SOURCES) {
        if let Some(category) = &result.category {
            pool.push(category.clone());
        }
    }

    let query_lower = query.to_lowercase();
    let mut seen = HashSet::new();
    pool.into_iter()
        .filter(|candidate| seen.insert(candidate.clone()))
        .filter(|candidate| {
            let lower = candidate.to_lowercase();
            lower.contains(&query_lower) && lower != query_lower
        })
        .take(MAX_SUGGESTIONS)
        .collect()
}
