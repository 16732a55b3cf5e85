use crate::store::Team;
use crate::MockAppData;
use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;

#[derive(Deserialize)]
pub struct TeamListRequest {
    pub sport: Option<String>,
}

pub async fn team_list_action(
    State(state): State<MockAppData>,
    Query(params): Query<TeamListRequest>,
) -> Response {
    let guard = state.store.read().await;

    let teams: Vec<&Team> = guard
        .teams
        .iter()
        .filter(|t| params.sport.as_deref().is_none_or(|sport| t.sport == sport))
        .collect();

    Json(&teams).into_response()
}
