use crate::common::lenient_json;
use crate::store::{Player, Team};
use crate::{ApiResult, MockAppData};
use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use log::info;
use serde::Deserialize;

#[derive(Deserialize)]
pub struct TeamRegisterRequest {
    #[serde(default = "default_team_name")]
    pub name: String,
    #[serde(default = "default_sport")]
    pub sport: String,
    #[serde(default)]
    pub captain: String,
    #[serde(default)]
    pub players: Vec<Player>,
}

fn default_team_name() -> String {
    "Team".to_string()
}

fn default_sport() -> String {
    "cricket".to_string()
}

pub async fn team_register_action(
    State(state): State<MockAppData>,
    body: Bytes,
) -> ApiResult<Response> {
    let request: TeamRegisterRequest = serde_json::from_value(lenient_json(&body))?;

    let mut guard = state.store.write().await;

    let registered = Team {
        id: guard.next_team_id(),
        name: request.name,
        sport: request.sport,
        captain: request.captain,
        players: request.players,
    };

    guard.teams.push(registered.clone());

    info!(
        "team registered: id {}, name '{}', {} players",
        registered.id,
        registered.name,
        registered.players.len()
    );

    Ok((StatusCode::CREATED, Json(registered)).into_response())
}
