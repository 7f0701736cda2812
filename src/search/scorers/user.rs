use anyhow::Result;

use crate::models::{EntityType, ResultMetadata, SearchResult};
use crate::search::{contains_ci, eq_ci};
use crate::store::{AccountType, ContentStore, UserRecord};

const NAME_EXACT: f64 = 100.0;
const NAME_PARTIAL: f64 = 90.0;
const SKILL_MATCH: f64 = 80.0;
const BIO_MATCH: f64 = 35.0;
const EXPERIENCE_MATCH: f64 = 40.0;
const FOLLOWERS_CAP: f64 = 30.0;
const FOLLOWING_CAP: f64 = 15.0;
const MENTOR_BOOST: f64 = 10.0;

/// Fetch user candidates and score them against the query. `account_type`
/// scopes the fetch for the `talentos`/`mentores` aliases; results are
/// labeled `user` either way.
pub fn search_users(
    store: &dyn ContentStore,
    query: &str,
    limit: usize,
    account_type: Option<AccountType>,
) -> Result<Vec<SearchResult>> {
    let candidates = store.find_users(query, limit, account_type)?;
    Ok(candidates.into_iter().map(|u| to_result(u, query)).collect())
}

fn to_result(user: UserRecord, query: &str) -> SearchResult {
    let score = score_user(&user, query);
    SearchResult {
        id: user.id,
        entity: EntityType::User,
        title: user.name,
        description: user.bio,
        avatar: user.avatar,
        metadata: ResultMetadata::User {
            followers: user.followers,
            following: user.following,
            account_type: user.account_type,
        },
        score,
        category: None,
        tags: if user.skills.is_empty() {
            None
        } else {
            Some(user.skills)
        },
    }
}

fn score_user(user: &UserRecord, query: &str) -> f64 {
    let mut score = 0.0;

    if eq_ci(&user.name, query) {
        score += NAME_EXACT;
    } else if contains_ci(&user.name, query) {
        score += NAME_PARTIAL;
    }
    if user.skills.iter().any(|s| contains_ci(s, query)) {
        score += SKILL_MATCH;
    }
    if user.bio.as_deref().is_some_and(|b| contains_ci(b, query)) {
        score += BIO_MATCH;
    }
    if user.experience.as_deref().is_some_and(|e| contains_ci(e, query)) {
        score += EXPERIENCE_MATCH;
    }

    score += (user.followers as f64 * 2.0).min(FOLLOWERS_CAP);
    score += (user.following as f64).min(FOLLOWING_CAP);

    if user.account_type == AccountType::Mentor {
        score += MENTOR_BOOST;
    }

    score
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(name: &str) -> UserRecord {
        UserRecord {
            id: "u1".to_string(),
            name: name.to_string(),
            bio: None,
            experience: None,
            skills: Vec::new(),
            avatar: None,
            followers: 0,
            following: 0,
            account_type: AccountType::Talent,
            created_at: None,
        }
    }

    #[test]
    fn test_exact_name_outscores_partial() {
        let exact = score_user(&user("Ana Silva"), "ana silva");
        let partial = score_user(&user("Ana Silva Santos"), "ana silva");
        assert!((exact - 100.0).abs() < 0.001);
        assert!((partial - 90.0).abs() < 0.001);
    }

    #[test]
    fn test_skill_bio_and_experience_signals() {
        let mut u = user("Maria");
        u.skills = vec!["React".to_string()];
        u.bio = Some("Apaixonada por React".to_string());
        u.experience = Some("3 anos com React".to_string());
        // 80 (skill) + 35 (bio) + 40 (experience)
        let score = score_user(&u, "react");
        assert!((score - 155.0).abs() < 0.001);
    }

    #[test]
    fn test_social_reach_is_capped() {
        let mut u = user("Unrelated");
        u.followers = 500;
        u.following = 500;
        let score = score_user(&u, "react");
        assert!((score - (30.0 + 15.0)).abs() < 0.001);
    }

    #[test]
    fn test_mentor_boost() {
        let mut u = user("Ana");
        u.account_type = AccountType::Mentor;
        let score = score_user(&u, "ana");
        assert!((score - 110.0).abs() < 0.001);
    }

    #[test]
    fn test_skills_map_onto_result_tags() {
        let mut u = user("Ana");
        u.skills = vec!["Go".to_string(), "Rust".to_string()];
        let result = to_result(u, "ana");
        assert_eq!(result.entity, EntityType::User);
        assert_eq!(result.tags.as_ref().map(Vec::len), Some(2));
    }
}
