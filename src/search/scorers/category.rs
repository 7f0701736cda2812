use anyhow::Result;

use crate::models::{EntityType, ResultMetadata, SearchResult};
use crate::search::{contains_ci, eq_ci};
use crate::store::{CategoryRecord, ContentStore};

const NAME_EXACT: f64 = 100.0;
const NAME_PARTIAL: f64 = 80.0;
const DESCRIPTION_MATCH: f64 = 50.0;

/// Fetch category candidates and score them against the query. The
/// category collection is small, so the scan is unconstrained and the
/// aggregator's truncation bounds the response.
pub fn search_categories(store: &dyn ContentStore, query: &str) -> Result<Vec<SearchResult>> {
    let candidates = store.find_categories(query)?;
    Ok(candidates.into_iter().map(|c| to_result(c, query)).collect())
}

fn to_result(category: CategoryRecord, query: &str) -> SearchResult {
    let score = score_category(&category, query);
    SearchResult {
        id: category.id,
        entity: EntityType::Category,
        title: category.name,
        description: category.description,
        avatar: None,
        metadata: ResultMetadata::Category {
            icon: category.icon,
        },
        score,
        category: None,
        tags: None,
    }
}

fn score_category(category: &CategoryRecord, query: &str) -> f64 {
    let mut score = 0.0;

    if eq_ci(&category.name, query) {
        score += NAME_EXACT;
    } else if contains_ci(&category.name, query) {
        score += NAME_PARTIAL;
    }
    if category.description.as_deref().is_some_and(|d| contains_ci(d, query)) {
        score += DESCRIPTION_MATCH;
    }

    score
}
