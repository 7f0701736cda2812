use anyhow::Result;

use crate::models::{EntityType, ResultMetadata, SearchResult};
use crate::search::{contains_ci, eq_ci};
use crate::store::{ContentStore, VideoRecord};

const TITLE_EXACT: f64 = 100.0;
const TITLE_PARTIAL: f64 = 80.0;
const DESCRIPTION_MATCH: f64 = 40.0;
const TAG_MATCH: f64 = 60.0;
const CATEGORY_MATCH: f64 = 50.0;
const VIEWS_CAP: f64 = 20.0;
const LIKES_CAP: f64 = 10.0;
const FEATURED_BOOST: f64 = 15.0;

/// Fetch video candidates and score them against the query.
pub fn search_videos(
    store: &dyn ContentStore,
    query: &str,
    limit: usize,
) -> Result<Vec<SearchResult>> {
    let candidates = store.find_videos(query, limit)?;
    Ok(candidates.into_iter().map(|v| to_result(v, query)).collect())
}

fn to_result(video: VideoRecord, query: &str) -> SearchResult {
    let score = score_video(&video, query);
    SearchResult {
        id: video.id,
        entity: EntityType::Video,
        title: video.title,
        description: video.description,
        avatar: video.thumbnail.or(video.channel_avatar),
        metadata: ResultMetadata::Video {
            channel_title: video.channel_title,
            views: video.views,
            likes: video.likes,
            featured: video.featured,
            published_at: video.created_at,
        },
        score,
        category: video.category,
        tags: if video.tags.is_empty() {
            None
        } else {
            Some(video.tags)
        },
    }
}

fn score_video(video: &VideoRecord, query: &str) -> f64 {
    let mut score = 0.0;

    if eq_ci(&video.title, query) {
        score += TITLE_EXACT;
    } else if contains_ci(&video.title, query) {
        score += TITLE_PARTIAL;
    }
    if video.description.as_deref().is_some_and(|d| contains_ci(d, query)) {
        score += DESCRIPTION_MATCH;
    }
    if video.tags.iter().any(|t| contains_ci(t, query)) {
        score += TAG_MATCH;
    }
    if video.category.as_deref().is_some_and(|c| contains_ci(c, query)) {
        score += CATEGORY_MATCH;
    }

    score += (video.views as f64 / 1000.0).min(VIEWS_CAP);
    score += (video.likes as f64 / 100.0).min(LIKES_CAP);
    if video.featured {
        score += FEATURED_BOOST;
    }

    score
}

#[cfg(test)]
mod tests {
    use super::*;

    fn video(title: &str) -> VideoRecord {
        VideoRecord {
            id: "v1".to_string(),
            title: title.to_string(),
            description: None,
            tags: Vec::new(),
            category: None,
            thumbnail: None,
            channel_title: None,
            channel_avatar: None,
            views: 0,
            likes: 0,
            featured: false,
            created_at: None,
        }
    }

    #[test]
    fn test_exact_title_outscores_partial() {
        let exact = score_video(&video("React Basics"), "react basics");
        let partial = score_video(&video("Learn React Basics Today"), "react basics");
        assert!((exact - 100.0).abs() < 0.001);
        assert!((partial - 80.0).abs() < 0.001);
    }

    #[test]
    fn test_reference_popularity_scenario() {
        let mut v = video("React Basics");
        v.views = 1500;
        v.likes = 50;
        // 80 (partial title) + 1.5 (views) + 0.5 (likes)
        let score = score_video(&v, "react");
        assert!((score - 82.0).abs() < 0.001);
    }

    #[test]
    fn test_popularity_boosts_are_capped() {
        let mut v = video("Unrelated");
        v.views = 10_000_000;
        v.likes = 500_000;
        let score = score_video(&v, "react");
        assert!((score - (20.0 + 10.0)).abs() < 0.001);
    }

    #[test]
    fn test_tag_category_and_featured_signals() {
        let mut v = video("Frontend talk");
        v.tags = vec!["react".to_string(), "webdev".to_string()];
        v.category = Some("React Frameworks".to_string());
        v.description = Some("A deep dive into React internals".to_string());
        v.featured = true;
        // 60 (tag) + 50 (category) + 40 (description) + 15 (featured)
        let score = score_video(&v, "react");
        assert!((score - 165.0).abs() < 0.001);
    }

    #[test]
    fn test_tags_map_onto_result() {
        let mut v = video("React Basics");
        v.tags = vec!["react".to_string()];
        v.channel_title = Some("Code TV".to_string());
        let result = to_result(v, "react");
        assert_eq!(result.entity, EntityType::Video);
        assert_eq!(result.tags.as_deref(), Some(&["react".to_string()][..]));
    }
}
