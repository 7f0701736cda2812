use anyhow::Result;

use crate::models::{EntityType, ResultMetadata, SearchResult};
use crate::search::{contains_ci, eq_ci};
use crate::store::{ChallengeRecord, ChallengeStatus, ContentStore};

const TITLE_EXACT: f64 = 100.0;
const TITLE_PARTIAL: f64 = 85.0;
const DESCRIPTION_MATCH: f64 = 40.0;
const CATEGORY_MATCH: f64 = 60.0;
const DIFFICULTY_MATCH: f64 = 30.0;
const FAVORITES_CAP: f64 = 25.0;
const LINKED_PROJECTS_CAP: f64 = 20.0;
const ACTIVE_BOOST: f64 = 25.0;
const FEATURED_BOOST: f64 = 20.0;
const PRIZE_CAP: f64 = 15.0;

/// Fetch challenge candidates and score them against the query.
pub fn search_challenges(
    store: &dyn ContentStore,
    query: &str,
    limit: usize,
) -> Result<Vec<SearchResult>> {
    let candidates = store.find_challenges(query, limit)?;
    Ok(candidates.into_iter().map(|c| to_result(c, query)).collect())
}

fn to_result(challenge: ChallengeRecord, query: &str) -> SearchResult {
    let score = score_challenge(&challenge, query);
    SearchResult {
        id: challenge.id,
        entity: EntityType::Challenge,
        title: challenge.title,
        description: challenge.description,
        avatar: challenge.image,
        metadata: ResultMetadata::Challenge {
            difficulty: challenge.difficulty,
            favorites: challenge.favorites,
            linked_projects: challenge.linked_projects,
            status: challenge.status,
            featured: challenge.featured,
        },
        score,
        category: challenge.category,
        tags: None,
    }
}

fn score_challenge(challenge: &ChallengeRecord, query: &str) -> f64 {
    let mut score = 0.0;

    if eq_ci(&challenge.title, query) {
        score += TITLE_EXACT;
    } else if contains_ci(&challenge.title, query) {
        score += TITLE_PARTIAL;
    }
    if challenge.description.as_deref().is_some_and(|d| contains_ci(d, query)) {
        score += DESCRIPTION_MATCH;
    }
    if challenge.category.as_deref().is_some_and(|c| contains_ci(c, query)) {
        score += CATEGORY_MATCH;
    }
    if challenge.difficulty.as_deref().is_some_and(|d| contains_ci(d, query)) {
        score += DIFFICULTY_MATCH;
    }

    score += (challenge.favorites as f64 * 2.0).min(FAVORITES_CAP);
    score += (challenge.linked_projects as f64 * 3.0).min(LINKED_PROJECTS_CAP);

    if challenge.status == ChallengeStatus::Active {
        score += ACTIVE_BOOST;
    }
    if challenge.featured {
        score += FEATURED_BOOST;
    }
    if let Some(prize) = challenge.prizes.first() {
        score += (prize.value / 1000.0).min(PRIZE_CAP);
    }

    score
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Prize;

    fn challenge(title: &str) -> ChallengeRecord {
        ChallengeRecord {
            id: "d1".to_string(),
            title: title.to_string(),
            description: None,
            category: None,
            difficulty: None,
            image: None,
            favorites: 0,
            linked_projects: 0,
            status: ChallengeStatus::Closed,
            featured: false,
            prizes: Vec::new(),
            created_at: None,
        }
    }

    #[test]
    fn test_exact_title_outscores_partial() {
        let exact = score_challenge(&challenge("Hackathon Web"), "hackathon web");
        let partial = score_challenge(&challenge("Hackathon Web 2024"), "hackathon web");
        assert!((exact - 100.0).abs() < 0.001);
        assert!((partial - 85.0).abs() < 0.001);
    }

    #[test]
    fn test_category_and_difficulty_signals() {
        let mut c = challenge("Desafio Frontend");
        c.category = Some("frontend".to_string());
        c.difficulty = Some("frontend pleno".to_string());
        c.description = Some("Monte uma UI frontend".to_string());
        // 40 (description) + 60 (category) + 30 (difficulty)
        let score = score_challenge(&c, "frontend");
        assert!((score - (85.0 + 40.0 + 60.0 + 30.0)).abs() < 0.001);
    }

    #[test]
    fn test_engagement_and_status_boosts() {
        let mut c = challenge("Hackathon Web");
        c.favorites = 4;
        c.linked_projects = 2;
        c.status = ChallengeStatus::Active;
        c.featured = true;
        // 85 + 8 (favorites) + 6 (linked) + 25 (active) + 20 (featured)
        let score = score_challenge(&c, "hackathon");
        assert!((score - 144.0).abs() < 0.001);
    }

    #[test]
    fn test_first_prize_value_is_capped() {
        let mut c = challenge("Hackathon Web");
        c.prizes = vec![
            Prize { position: 1, value: 50_000.0 },
            Prize { position: 2, value: 5_000.0 },
        ];
        // 85 + min(50, 15)
        let score = score_challenge(&c, "hackathon");
        assert!((score - 100.0).abs() < 0.001);
    }

    #[test]
    fn test_small_prize_contributes_thousands() {
        let mut c = challenge("Hackathon Web");
        c.prizes = vec![Prize { position: 1, value: 3_000.0 }];
        let score = score_challenge(&c, "hackathon");
        assert!((score - 88.0).abs() < 0.001);
    }

    #[test]
    fn test_upcoming_gets_no_active_boost() {
        let mut c = challenge("Hackathon Web");
        c.status = ChallengeStatus::Upcoming;
        let score = score_challenge(&c, "hackathon");
        assert!((score - 85.0).abs() < 0.001);
    }
}
