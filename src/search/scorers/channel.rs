use anyhow::Result;

use crate::models::{EntityType, ResultMetadata, SearchResult};
use crate::search::{contains_ci, eq_ci};
use crate::store::{ChannelRecord, ContentStore};

const NAME_EXACT: f64 = 100.0;
const NAME_PARTIAL: f64 = 85.0;
const DESCRIPTION_MATCH: f64 = 40.0;
const SUBSCRIBERS_CAP: f64 = 25.0;
const VIDEO_COUNT_CAP: f64 = 20.0;

/// Fetch channel candidates and score them against the query.
pub fn search_channels(
    store: &dyn ContentStore,
    query: &str,
    limit: usize,
) -> Result<Vec<SearchResult>> {
    let candidates = store.find_channels(query, limit)?;
    Ok(candidates.into_iter().map(|c| to_result(c, query)).collect())
}

fn to_result(channel: ChannelRecord, query: &str) -> SearchResult {
    let score = score_channel(&channel, query);
    SearchResult {
        id: channel.id,
        entity: EntityType::Channel,
        title: channel.name,
        description: channel.description,
        avatar: channel.avatar,
        metadata: ResultMetadata::Channel {
            subscribers: channel.subscribers,
            video_count: channel.video_count,
        },
        score,
        category: channel.category,
        tags: None,
    }
}

fn score_channel(channel: &ChannelRecord, query: &str) -> f64 {
    let mut score = 0.0;

    if eq_ci(&channel.name, query) {
        score += NAME_EXACT;
    } else if contains_ci(&channel.name, query) {
        score += NAME_PARTIAL;
    }
    if channel.description.as_deref().is_some_and(|d| contains_ci(d, query)) {
        score += DESCRIPTION_MATCH;
    }

    score += (channel.subscribers as f64 / 10.0).min(SUBSCRIBERS_CAP);
    score += (channel.video_count as f64 * 2.0).min(VIDEO_COUNT_CAP);

    score
}
