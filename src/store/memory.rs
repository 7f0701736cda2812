//! In-memory store backed by a JSON dataset file loaded at startup.

use anyhow::{Context, Result};
use parking_lot::RwLock;
use std::path::Path;

use crate::search::contains_ci;
use crate::store::{
    AccountType, CategoryRecord, ChallengeRecord, ChannelRecord, ContentStore, Dataset,
    ProjectRecord, UserRecord, VideoRecord,
};

/// In-memory implementation of the collaborator interface. Collections are
/// scanned linearly; the platform's catalogs are small enough that no index
/// is kept.
pub struct MemoryStore {
    data: RwLock<Dataset>,
}

impl MemoryStore {
    /// Load the dataset from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read dataset file {}", path.display()))?;
        let data: Dataset =
            serde_json::from_str(&raw).context("Failed to parse dataset file")?;
        Ok(Self::from_dataset(data))
    }

    pub fn from_dataset(data: Dataset) -> Self {
        Self {
            data: RwLock::new(data),
        }
    }

    pub fn empty() -> Self {
        Self::from_dataset(Dataset::default())
    }

    /// One-line collection summary for startup logging.
    pub fn describe(&self) -> String {
        let data = self.data.read();
        format!(
            "{} videos, {} projects, {} challenges, {} users, {} channels, {} categories",
            data.videos.len(),
            data.projects.len(),
            data.challenges.len(),
            data.users.len(),
            data.channels.len(),
            data.categories.len(),
        )
    }
}

impl ContentStore for MemoryStore {
    fn find_videos(&self, pattern: &str, limit: usize) -> Result<Vec<VideoRecord>> {
        let data = self.data.read();
        Ok(data
            .videos
            .iter()
            .filter(|v| {
                contains_ci(&v.title, pattern)
                    || v.description.as_deref().is_some_and(|d| contains_ci(d, pattern))
                    || v.tags.iter().any(|t| contains_ci(t, pattern))
                    || v.category.as_deref().is_some_and(|c| contains_ci(c, pattern))
                    || v.channel_title.as_deref().is_some_and(|c| contains_ci(c, pattern))
            })
            .take(limit)
            .cloned()
            .collect())
    }

    fn find_projects(&self, pattern: &str, limit: usize) -> Result<Vec<ProjectRecord>> {
        let data = self.data.read();
        Ok(data
            .projects
            .iter()
            .filter(|p| {
                contains_ci(&p.name, pattern)
                    || p.description.as_deref().is_some_and(|d| contains_ci(d, pattern))
                    || p.technologies.iter().any(|t| contains_ci(t, pattern))
                    || p.category.as_deref().is_some_and(|c| contains_ci(c, pattern))
            })
            .take(limit)
            .cloned()
            .collect())
    }

    fn find_challenges(&self, pattern: &str, limit: usize) -> Result<Vec<ChallengeRecord>> {
        let data = self.data.read();
        Ok(data
            .challenges
            .iter()
            .filter(|c| {
                contains_ci(&c.title, pattern)
                    || c.description.as_deref().is_some_and(|d| contains_ci(d, pattern))
                    || c.category.as_deref().is_some_and(|cat| contains_ci(cat, pattern))
                    || c.difficulty.as_deref().is_some_and(|d| contains_ci(d, pattern))
            })
            .take(limit)
            .cloned()
            .collect())
    }

    fn find_users(
        &self,
        pattern: &str,
        limit: usize,
        account_type: Option<AccountType>,
    ) -> Result<Vec<UserRecord>> {
        let data = self.data.read();
        Ok(data
            .users
            .iter()
            .filter(|u| account_type.map_or(true, |t| u.account_type == t))
            .filter(|u| {
                contains_ci(&u.name, pattern)
                    || u.bio.as_deref().is_some_and(|b| contains_ci(b, pattern))
                    || u.experience.as_deref().is_some_and(|e| contains_ci(e, pattern))
                    || u.skills.iter().any(|s| contains_ci(s, pattern))
            })
            .take(limit)
            .cloned()
            .collect())
    }

    fn find_channels(&self, pattern: &str, limit: usize) -> Result<Vec<ChannelRecord>> {
        let data = self.data.read();
        Ok(data
            .channels
            .iter()
            .filter(|c| {
                contains_ci(&c.name, pattern)
                    || c.description.as_deref().is_some_and(|d| contains_ci(d, pattern))
            })
            .take(limit)
            .cloned()
            .collect())
    }

    fn find_categories(&self, pattern: &str) -> Result<Vec<CategoryRecord>> {
        let data = self.data.read();
        Ok(data
            .categories
            .iter()
            .filter(|c| {
                contains_ci(&c.name, pattern)
                    || c.description.as_deref().is_some_and(|d| contains_ci(d, pattern))
            })
            .cloned()
            .collect())
    }

    fn users_with_skill(&self, pattern: &str) -> Result<Vec<UserRecord>> {
        let data = self.data.read();
        Ok(data
            .users
            .iter()
            .filter(|u| u.skills.iter().any(|s| contains_ci(s, pattern)))
            .cloned()
            .collect())
    }
}
