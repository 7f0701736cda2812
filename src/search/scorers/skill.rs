use anyhow::Result;
use std::collections::HashMap;

use crate::models::{EntityType, ResultMetadata, SearchResult};
use crate::search::{contains_ci, eq_ci};
use crate::store::ContentStore;

/// Skills shorter than this produce too many incidental substring hits.
const MIN_QUERY_LEN: usize = 3;
const BASE: f64 = 70.0;
const EXACT: f64 = 90.0;
const PER_USER: f64 = 5.0;
const COUNT_CAP: f64 = 20.0;

/// Synthesize skill results from the user collection.
///
/// Skills are not a stored entity: every user whose skill list matches the
/// query contributes a tally to each matching skill string. Grouping keys
/// are case-sensitive while matching is case-insensitive, so "Go" and "go"
/// stay distinct results.
pub fn search_skills(store: &dyn ContentStore, query: &str) -> Result<Vec<SearchResult>> {
    if query.chars().count() < MIN_QUERY_LEN {
        return Ok(Vec::new());
    }

    let users = store.users_with_skill(query)?;

    let mut counts: HashMap<String, usize> = HashMap::new();
    for user in &users {
        for skill in &user.skills {
            if contains_ci(skill, query) {
                *counts.entry(skill.clone()).or_insert(0) += 1;
            }
        }
    }

    Ok(counts
        .into_iter()
        .map(|(skill, user_count)| to_result(skill, user_count, query))
        .collect())
}

fn to_result(skill: String, user_count: usize, query: &str) -> SearchResult {
    let base = if eq_ci(&skill, query) { EXACT } else { BASE };
    let score = base + (user_count as f64 * PER_USER).min(COUNT_CAP);
    let id = format!("skill-{}", skill.to_lowercase().replace(' ', "-"));

    SearchResult {
        id,
        entity: EntityType::Skill,
        title: skill,
        description: None,
        avatar: None,
        metadata: ResultMetadata::Skill { user_count },
        score,
        category: None,
        tags: None,
    }
}
