use crate::store::Match;
use crate::MockAppData;
use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;

#[derive(Deserialize)]
pub struct MatchListRequest {
    // Compared against the serialized status so an unknown value filters
    // everything out instead of rejecting the request
    pub status: Option<String>,
    pub limit: Option<usize>,
}

pub async fn match_list_action(
    State(state): State<MockAppData>,
    Query(params): Query<MatchListRequest>,
) -> Response {
    let guard = state.store.read().await;

    let matches: Vec<&Match> = guard
        .matches
        .iter()
        .filter(|m| {
            params
                .status
                .as_deref()
                .is_none_or(|status| m.status.as_str() == status)
        })
        .take(params.limit.unwrap_or(usize::MAX))
        .collect();

    Json(&matches).into_response()
}
