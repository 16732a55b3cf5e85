use crate::common::lenient_json;
use crate::store::{Match, MatchStatus};
use crate::{ApiResult, MockAppData};
use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use log::info;
use serde::Deserialize;
use std::collections::BTreeMap;

#[derive(Deserialize)]
pub struct MatchCreateRequest {
    #[serde(default)]
    pub teams: Vec<String>,
    #[serde(default)]
    pub status: MatchStatus,
}

pub async fn match_create_action(
    State(state): State<MockAppData>,
    body: Bytes,
) -> ApiResult<Response> {
    let request: MatchCreateRequest = serde_json::from_value(lenient_json(&body))?;

    let mut guard = state.store.write().await;

    let created = Match {
        id: guard.next_match_id(),
        teams: request.teams,
        status: request.status,
        score: BTreeMap::new(),
    };

    guard.matches.push(created.clone());

    info!("match created: id {}", created.id);

    Ok((StatusCode::CREATED, Json(created)).into_response())
}
