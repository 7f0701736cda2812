//! Collaborator interface to the platform's persistence layer.
//!
//! Candidate records arrive denormalized: joined display fields (a video's
//! channel title, a project's creator name) are already attached, so the
//! search engine performs no joins of its own. Each `find_*` operation is a
//! case-insensitive substring search over that entity's fixed field set.

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub mod memory;

/// User account tier on the platform.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    #[default]
    Talent,
    Mentor,
}

/// Project lifecycle status. Wire values are the platform's Portuguese
/// strings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectStatus {
    #[serde(rename = "ativo")]
    Active,
    #[default]
    #[serde(rename = "inativo")]
    Inactive,
    #[serde(rename = "concluido")]
    Completed,
}

/// Challenge lifecycle status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChallengeStatus {
    #[serde(rename = "ativo")]
    Active,
    #[serde(rename = "em_breve")]
    Upcoming,
    #[default]
    #[serde(rename = "encerrado")]
    Closed,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoRecord {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub thumbnail: Option<String>,
    /// Joined from the source channel.
    #[serde(default)]
    pub channel_title: Option<String>,
    #[serde(default)]
    pub channel_avatar: Option<String>,
    #[serde(default)]
    pub views: u64,
    #[serde(default)]
    pub likes: u64,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    /// Joined from the creator profile.
    #[serde(default)]
    pub creator_name: Option<String>,
    #[serde(default)]
    pub likes: u64,
    #[serde(default)]
    pub favorites: u64,
    #[serde(default)]
    pub approved_participants: u64,
    #[serde(default)]
    pub status: ProjectStatus,
    #[serde(default)]
    pub verified: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// A challenge prize tier. Only the first prize's value feeds scoring.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prize {
    pub position: u32,
    pub value: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChallengeRecord {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub difficulty: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub favorites: u64,
    #[serde(default)]
    pub linked_projects: u64,
    #[serde(default)]
    pub status: ChallengeStatus,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub prizes: Vec<Prize>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub experience: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub followers: u64,
    #[serde(default)]
    pub following: u64,
    #[serde(default)]
    pub account_type: AccountType,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChannelRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub subscribers: u64,
    #[serde(default)]
    pub video_count: u64,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
}

/// Substring-search capability of the persistence layer, one operation per
/// entity type. Implementations return at most `limit` candidates where a
/// limit applies; category and skill lookups scan their full collections.
///
/// Any error here is fatal for the whole request: a failed scorer would
/// otherwise silently under-represent its entity type in the merged list.
pub trait ContentStore: Send + Sync {
    /// Match on title, description, tags, category, or channel title.
    fn find_videos(&self, pattern: &str, limit: usize) -> Result<Vec<VideoRecord>>;

    /// Match on name, description, technologies, or category.
    fn find_projects(&self, pattern: &str, limit: usize) -> Result<Vec<ProjectRecord>>;

    /// Match on title, description, category, or difficulty.
    fn find_challenges(&self, pattern: &str, limit: usize) -> Result<Vec<ChallengeRecord>>;

    /// Match on name, bio, experience, or skills, optionally scoped to one
    /// account type (the `talentos`/`mentores` aliases).
    fn find_users(
        &self,
        pattern: &str,
        limit: usize,
        account_type: Option<AccountType>,
    ) -> Result<Vec<UserRecord>>;

    /// Match on name or description.
    fn find_channels(&self, pattern: &str, limit: usize) -> Result<Vec<ChannelRecord>>;

    /// Match on name or description. Full-collection scan.
    fn find_categories(&self, pattern: &str) -> Result<Vec<CategoryRecord>>;

    /// Users whose skill list matches the pattern. Full-collection scan,
    /// feeds the derived skill scorer.
    fn users_with_skill(&self, pattern: &str) -> Result<Vec<UserRecord>>;
}

/// Shape of the JSON dataset file consumed by the in-memory store.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub videos: Vec<VideoRecord>,
    #[serde(default)]
    pub projects: Vec<ProjectRecord>,
    #[serde(default)]
    pub challenges: Vec<ChallengeRecord>,
    #[serde(default)]
    pub users: Vec<UserRecord>,
    #[serde(default)]
    pub channels: Vec<ChannelRecord>,
    #[serde(default)]
    pub categories: Vec<CategoryRecord>,
}
