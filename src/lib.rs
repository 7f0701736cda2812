//! # talent-search
//!
//! Cross-entity search and relevance ranking for a talent/content platform.
//! A single free-text query is matched against six structurally different
//! record types plus one derived pseudo-entity, scored with type-specific
//! weighted heuristics, and merged into one ranked list.
//!
//! ## Pipeline
//!
//! ```text
//!                        ┌─────────────┐
//!                        │  Raw Query   │
//!                        └──────┬───────┘
//!                               │ trim, length >= 2
//!                               ▼
//!                     ┌──────────────────┐
//!                     │ QueryNormalizer  │── short query ──► empty envelope
//!                     └────────┬─────────┘
//!                              │ fan-out (per-type candidate caps)
//!    ┌───────┬─────────┬───────┼───────┬─────────┬──────────┐
//!    ▼       ▼         ▼       ▼       ▼         ▼          ▼
//!  Video  Project  Challenge  User  Channel  Category     Skill
//!   30%     25%       20%     15%     10%    full scan   (derived
//!    │       │         │       │       │         │      from users)
//!    └───────┴─────────┴───────┼───────┴─────────┴──────────┘
//!                              ▼
//!                  ┌─────────────────────┐
//!                  │  ResultAggregator   │  sort by score desc,
//!                  │  truncate to limit  │  tie-break on id
//!                  └──────────┬──────────┘
//!                 ┌───────────┴───────────┐
//!                 ▼                       ▼
//!     ┌─────────────────────┐   ┌─────────────────────┐
//!     │ SuggestionGenerator │   │   ResponseGrouper   │
//!     │ top titles/tags/    │   │ bucket by entity    │
//!     │ categories, <= 5    │   │ type                │
//!     └──────────┬──────────┘   └──────────┬──────────┘
//!                └───────────┬─────────────┘
//!                            ▼
//!                  ┌───────────────────┐
//!                  │ Response Envelope │
//!                  └───────────────────┘
//! ```
//!
//! ## Module Overview
//!
//! - [`config`] - Environment-based configuration for the server and dataset
//! - [`models`] - Wire types: `EntityType`, `SearchResult`, response envelopes
//! - [`search::query`] - Query normalization and scope parsing
//! - [`search::scorers`] - The seven per-entity relevance scorers
//! - [`search::aggregate`] - Merge, rank, truncate, and group by type
//! - [`search::suggest`] - "Did you mean" suggestions from top results
//! - [`store`] - Collaborator interface to the persistence layer and the
//!   in-memory JSON-backed implementation
//! - [`api`] - Axum HTTP handler for `GET /search`
//! - [`state`] - Shared application state

pub mod api;
pub mod config;
pub mod models;
pub mod search;
pub mod state;
pub mod store;
