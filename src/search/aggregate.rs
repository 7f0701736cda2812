//! Merging, ranking, and regrouping of scorer outputs.

use std::collections::BTreeMap;

use crate::models::{EntityType, SearchResult};

/// Sort the merged candidate set by score descending and truncate to
/// `limit`. Returns the kept results and the pre-truncation candidate
/// count. Equal scores break on `id` ascending so ranking does not depend
/// on collaborator fetch order.
pub fn merge_and_rank(
    mut candidates: Vec<SearchResult>,
    limit: usize,
) -> (Vec<SearchResult>, usize) {
    let total = candidates.len();
    candidates.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.id.cmp(&b.id))
    });
    candidates.truncate(limit);
    (candidates, total)
}

/// Partition the ranked list by entity type. Buckets keep the ranked
/// order; types with no members are absent from the map.
pub fn group_by_type(results: &[SearchResult]) -> BTreeMap<EntityType, Vec<SearchResult>> {
    let mut grouped: BTreeMap<EntityType, Vec<SearchResult>> = BTreeMap::new();
    for result in results {
        grouped.entry(result.entity).or_default().push(result.clone());
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ResultMetadata;

    fn result(id: &str, entity: EntityType, score: f64) -> SearchResult {
        SearchResult {
            id: id.to_string(),
            entity,
            title: format!("title {id}"),
            description: None,
            avatar: None,
            metadata: ResultMetadata::Category { icon: None },
            score,
            category: None,
            tags: None,
        }
    }

    #[test]
    fn test_sorts_by_score_descending() {
        let (results, total) = merge_and_rank(
            vec![
                result("a", EntityType::Video, 10.0),
                result("b", EntityType::User, 80.0),
                result("c", EntityType::Project, 45.0),
            ],
            10,
        );
        assert_eq!(total, 3);
        let ids: Vec<&str> = results.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "c", "a"]);
    }

    #[test]
    fn test_equal_scores_break_on_id() {
        let (results, _) = merge_and_rank(
            vec![
                result("z", EntityType::Video, 50.0),
                result("a", EntityType::Video, 50.0),
                result("m", EntityType::Video, 50.0),
            ],
            10,
        );
        let ids: Vec<&str> = results.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "m", "z"]);
    }

    #[test]
    fn test_truncates_but_reports_full_total() {
        let candidates: Vec<_> = (0..30)
            .map(|i| result(&format!("id{i:02}"), EntityType::Video, i as f64))
            .collect();
        let (results, total) = merge_and_rank(candidates, 5);
        assert_eq!(results.len(), 5);
        assert_eq!(total, 30);
        // Highest scores survive truncation.
        assert_eq!(results[0].score, 29.0);
    }

    #[test]
    fn test_grouping_preserves_rank_order_and_counts() {
        let (results, _) = merge_and_rank(
            vec![
                result("v1", EntityType::Video, 90.0),
                result("p1", EntityType::Project, 70.0),
                result("v2", EntityType::Video, 50.0),
            ],
            10,
        );
        let grouped = group_by_type(&results);

        assert_eq!(grouped.len(), 2);
        let videos = &grouped[&EntityType::Video];
        assert_eq!(videos.len(), 2);
        assert_eq!(videos[0].id, "v1");
        assert_eq!(videos[1].id, "v2");

        let bucket_total: usize = grouped.values().map(Vec::len).sum();
        assert_eq!(bucket_total, results.len());
    }

    #[test]
    fn test_grouping_omits_empty_types() {
        let grouped = group_by_type(&[result("v1", EntityType::Video, 1.0)]);
        assert!(grouped.contains_key(&EntityType::Video));
        assert!(!grouped.contains_key(&EntityType::User));
    }
}
