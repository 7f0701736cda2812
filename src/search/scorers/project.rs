use anyhow::Result;

use crate::models::{EntityType, ResultMetadata, SearchResult};
use crate::search::{contains_ci, eq_ci};
use crate::store::{ContentStore, ProjectRecord, ProjectStatus};

const NAME_EXACT: f64 = 100.0;
const NAME_PARTIAL: f64 = 85.0;
const DESCRIPTION_MATCH: f64 = 45.0;
const TECHNOLOGY_MATCH: f64 = 70.0;
const LIKES_CAP: f64 = 20.0;
const FAVORITES_CAP: f64 = 25.0;
const PARTICIPANTS_CAP: f64 = 30.0;
const ACTIVE_BOOST: f64 = 20.0;
const VERIFIED_BOOST: f64 = 15.0;

/// Fetch project candidates and score them against the query.
pub fn search_projects(
    store: &dyn ContentStore,
    query: &str,
    limit: usize,
) -> Result<Vec<SearchResult>> {
    let candidates = store.find_projects(query, limit)?;
    Ok(candidates.into_iter().map(|p| to_result(p, query)).collect())
}

fn to_result(project: ProjectRecord, query: &str) -> SearchResult {
    let score = score_project(&project, query);
    SearchResult {
        id: project.id,
        entity: EntityType::Project,
        title: project.name,
        description: project.description,
        avatar: project.image,
        metadata: ResultMetadata::Project {
            creator_name: project.creator_name,
            likes: project.likes,
            favorites: project.favorites,
            approved_participants: project.approved_participants,
            status: project.status,
            verified: project.verified,
        },
        score,
        category: project.category,
        tags: if project.technologies.is_empty() {
            None
        } else {
            Some(project.technologies)
        },
    }
}

fn score_project(project: &ProjectRecord, query: &str) -> f64 {
    let mut score = 0.0;

    if eq_ci(&project.name, query) {
        score += NAME_EXACT;
    } else if contains_ci(&project.name, query) {
        score += NAME_PARTIAL;
    }
    if project.description.as_deref().is_some_and(|d| contains_ci(d, query)) {
        score += DESCRIPTION_MATCH;
    }
    if project.technologies.iter().any(|t| contains_ci(t, query)) {
        score += TECHNOLOGY_MATCH;
    }

    score += (project.likes as f64 * 2.0).min(LIKES_CAP);
    score += (project.favorites as f64 * 3.0).min(FAVORITES_CAP);
    score += (project.approved_participants as f64 * 5.0).min(PARTICIPANTS_CAP);

    if project.status == ProjectStatus::Active {
        score += ACTIVE_BOOST;
    }
    if project.verified {
        score += VERIFIED_BOOST;
    }

    score
}
