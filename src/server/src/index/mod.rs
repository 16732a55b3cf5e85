use crate::MockAppData;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

pub fn index_routes() -> Router<MockAppData> {
    Router::new()
        .route("/", get(index_action))
        .route("/api", get(index_action))
}

#[derive(Serialize)]
pub struct IndexViewModel {
    pub message: &'static str,
    pub endpoints: [&'static str; 7],
    pub frontend: &'static str,
}

/// Friendly root info to help browsing the mock API in a browser
pub async fn index_action() -> impl IntoResponse {
    Json(IndexViewModel {
        message: "Mock API root - available endpoints",
        endpoints: [
            "/api/matches",
            "/api/matches/<id>",
            "/api/teams",
            "/api/teams/register (POST)",
            "/api/achievements",
            "/api/matches (POST to create)",
            "/api/matches/<id>/score (POST to update)",
        ],
        frontend: "http://localhost:8080",
    })
}
