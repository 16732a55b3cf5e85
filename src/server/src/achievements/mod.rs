use crate::MockAppData;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};

pub fn achievement_routes() -> Router<MockAppData> {
    Router::new().route("/api/achievements", get(achievement_list_action))
}

pub async fn achievement_list_action(State(state): State<MockAppData>) -> Response {
    let guard = state.store.read().await;

    Json(&guard.achievements).into_response()
}
