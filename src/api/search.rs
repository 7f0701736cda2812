use std::time::Instant;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::models::{ErrorResponse, SearchParams, SearchResponse, SearchResult};
use crate::search::query::{self, SearchScope};
use crate::search::scorers::{category, challenge, channel, project, skill, user, video};
use crate::search::{
    aggregate, fanout_cap, suggest, CHALLENGE_SHARE, CHANNEL_SHARE, PROJECT_SHARE, USER_SHARE,
    VIDEO_SHARE,
};
use crate::state::AppState;
use crate::store::{AccountType, ContentStore};

/// GET /search - Cross-entity search pipeline:
///   1. Normalize the query (short queries return the empty envelope)
///   2. Fan out to the per-entity scorers
///   3. Merge, rank, and truncate
///   4. Derive suggestions and group by entity type
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchResponse>, SearchFailure> {
    let started = Instant::now();

    let mut response =
        run_search(state.store.as_ref(), &params.q, params.scope, params.limit).map_err(|e| {
            tracing::error!("Search failed for {:?}: {e:#}", params.q);
            SearchFailure(format!("{e:#}"))
        })?;
    response.search_time = started.elapsed().as_millis() as u64;

    tracing::info!(
        "Search {:?} scope={:?}: {} of {} results in {}ms",
        response.query,
        params.scope,
        response.results.len(),
        response.total_count,
        response.search_time
    );

    Ok(Json(response))
}

/// Internal failure mapped to the 500 envelope the UI expects. A failure in
/// any one scorer fails the whole request; partial results would silently
/// under-represent entity types.
#[derive(Debug)]
pub struct SearchFailure(String);

impl IntoResponse for SearchFailure {
    fn into_response(self) -> Response {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::new(self.0)),
        )
            .into_response()
    }
}

/// Run the full pipeline against a collaborator store. Factored out of the
/// handler so tests can drive it without the HTTP layer.
pub fn run_search(
    store: &dyn ContentStore,
    raw_query: &str,
    scope: SearchScope,
    limit: usize,
) -> anyhow::Result<SearchResponse> {
    let normalized = query::normalize(raw_query);
    if !query::is_searchable(&normalized) {
        return Ok(SearchResponse::empty(normalized));
    }

    let candidates = collect_candidates(store, &normalized, scope, limit)?;
    let (results, total_count) = aggregate::merge_and_rank(candidates, limit);
    let suggestions = suggest::build_suggestions(&results, &normalized);
    let grouped_results = aggregate::group_by_type(&results);

    Ok(SearchResponse {
        results,
        grouped_results,
        suggestions,
        total_count,
        query: normalized,
        search_time: 0,
    })
}

fn collect_candidates(
    store: &dyn ContentStore,
    query: &str,
    scope: SearchScope,
    limit: usize,
) -> anyhow::Result<Vec<SearchResult>> {
    let mut candidates = Vec::new();

    match scope {
        SearchScope::All => {
            candidates.extend(video::search_videos(
                store,
                query,
                fanout_cap(limit, VIDEO_SHARE),
            )?);
            candidates.extend(project::search_projects(
                store,
                query,
                fanout_cap(limit, PROJECT_SHARE),
            )?);
            candidates.extend(challenge::search_challenges(
                store,
                query,
                fanout_cap(limit, CHALLENGE_SHARE),
            )?);
            candidates.extend(user::search_users(
                store,
                query,
                fanout_cap(limit, USER_SHARE),
                None,
            )?);
            candidates.extend(channel::search_channels(
                store,
                query,
                fanout_cap(limit, CHANNEL_SHARE),
            )?);
            candidates.extend(category::search_categories(store, query)?);
            candidates.extend(skill::search_skills(store, query)?);
        }
        SearchScope::Video => {
            candidates.extend(video::search_videos(store, query, limit)?);
        }
        SearchScope::Projeto => {
            candidates.extend(project::search_projects(store, query, limit)?);
        }
        SearchScope::Desafio => {
            candidates.extend(challenge::search_challenges(store, query, limit)?);
        }
        SearchScope::User => {
            candidates.extend(user::search_users(store, query, limit, None)?);
        }
        SearchScope::Talentos => {
            candidates.extend(user::search_users(
                store,
                query,
                limit,
                Some(AccountType::Talent),
            )?);
        }
        SearchScope::Mentores => {
            candidates.extend(user::search_users(
                store,
                query,
                limit,
                Some(AccountType::Mentor),
            )?);
        }
        SearchScope::Channel => {
            candidates.extend(channel::search_channels(store, query, limit)?);
        }
        SearchScope::Category => {
            candidates.extend(category::search_categories(store, query)?);
        }
        SearchScope::Skill => {
            candidates.extend(skill::search_skills(store, query)?);
        }
    }

    Ok(candidates)
}
