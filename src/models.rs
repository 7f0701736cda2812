use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::search::query::SearchScope;
use crate::store::{AccountType, ChallengeStatus, ProjectStatus};

/// Closed set of entity types a search result can belong to.
///
/// The wire names are the platform's: projects and challenges keep their
/// Portuguese labels for frontend compatibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum EntityType {
    #[serde(rename = "video")]
    Video,
    #[serde(rename = "channel")]
    Channel,
    #[serde(rename = "user")]
    User,
    #[serde(rename = "projeto")]
    Project,
    #[serde(rename = "desafio")]
    Challenge,
    #[serde(rename = "category")]
    Category,
    #[serde(rename = "skill")]
    Skill,
}

/// Type-specific metadata bag. One variant per entity type; serialized
/// untagged so each variant reads as a plain key/value object.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum ResultMetadata {
    Video {
        channel_title: Option<String>,
        views: u64,
        likes: u64,
        featured: bool,
        published_at: Option<DateTime<Utc>>,
    },
    Project {
        creator_name: Option<String>,
        likes: u64,
        favorites: u64,
        approved_participants: u64,
        status: ProjectStatus,
        verified: bool,
    },
    Challenge {
        difficulty: Option<String>,
        favorites: u64,
        linked_projects: u64,
        status: ChallengeStatus,
        featured: bool,
    },
    User {
        followers: u64,
        following: u64,
        account_type: AccountType,
    },
    Channel {
        subscribers: u64,
        video_count: u64,
    },
    Category {
        icon: Option<String>,
    },
    Skill {
        user_count: usize,
    },
}

/// A single scored search result. Built once by a scorer from a candidate
/// record and never mutated by later pipeline stages.
#[derive(Debug, Clone, Serialize)]
pub struct SearchResult {
    /// Opaque identifier, unique within its entity type.
    pub id: String,
    #[serde(rename = "type")]
    pub entity: EntityType,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    pub metadata: ResultMetadata,
    /// Additive relevance score. Non-negative and unbounded; weights are
    /// not normalized to a fixed maximum.
    pub score: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

/// Search request parameters for `GET /search`.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
    #[serde(default, rename = "type")]
    pub scope: SearchScope,
    #[serde(default = "default_limit")]
    pub limit: usize,
}

fn default_limit() -> usize {
    20
}

/// Search response envelope.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    /// Score-sorted results, at most `limit` entries.
    pub results: Vec<SearchResult>,
    /// The same truncated list re-keyed by entity type. Types with no
    /// members are absent.
    pub grouped_results: BTreeMap<EntityType, Vec<SearchResult>>,
    /// Up to five deduplicated follow-up query suggestions.
    pub suggestions: Vec<String>,
    /// Size of the merged candidate set before truncation.
    pub total_count: usize,
    /// Normalized echo of the query.
    pub query: String,
    /// Wall-clock pipeline time in milliseconds.
    pub search_time: u64,
}

impl SearchResponse {
    /// The empty-but-successful envelope returned for queries shorter than
    /// two characters.
    pub fn empty(query: String) -> Self {
        Self {
            results: Vec::new(),
            grouped_results: BTreeMap::new(),
            suggestions: Vec::new(),
            total_count: 0,
            query,
            search_time: 0,
        }
    }
}

/// Error envelope for internal failures. Mirrors the success envelope's
/// shape so the UI never has to special-case malformed bodies.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub error: String,
    pub results: Vec<SearchResult>,
    pub grouped_results: BTreeMap<EntityType, Vec<SearchResult>>,
    pub suggestions: Vec<String>,
    pub total_count: usize,
}

impl ErrorResponse {
    pub fn new(error: String) -> Self {
        Self {
            error,
            results: Vec::new(),
            grouped_results: BTreeMap::new(),
            suggestions: Vec::new(),
            total_count: 0,
        }
    }
}
