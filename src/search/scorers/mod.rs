//! Per-entity relevance scorers.
//!
//! Each scorer fetches a bounded candidate set from the collaborator store
//! and maps every candidate to a [`crate::models::SearchResult`] with an
//! additive weighted score. Weight tables are file-local constants; scores
//! are unbounded and never negative. The skill scorer is derived from the
//! user collection rather than backed by a stored entity.

pub mod category;
pub mod challenge;
pub mod channel;
pub mod project;
pub mod skill;
pub mod user;
pub mod video;
