use crate::{ApiError, ApiResult, MockAppData};
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;

#[derive(Deserialize)]
pub struct MatchGetRequest {
    pub match_id: String,
}

pub async fn match_get_action(
    State(state): State<MockAppData>,
    Path(route_params): Path<MatchGetRequest>,
) -> ApiResult<Response> {
    // A non-numeric segment is a plain "not found", a numeric one that
    // matches nothing is "match not found"
    let match_id: u32 = route_params
        .match_id
        .parse()
        .map_err(|_| ApiError::NotFound("not found".to_string()))?;

    let guard = state.store.read().await;

    let found = guard
        .match_by_id(match_id)
        .ok_or_else(|| ApiError::NotFound("match not found".to_string()))?;

    Ok(Json(found).into_response())
}
