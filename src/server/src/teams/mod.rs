pub mod list;
pub mod register;

use crate::MockAppData;
use axum::routing::{get, post};
use axum::Router;

pub fn team_routes() -> Router<MockAppData> {
    Router::new()
        .route("/api/teams", get(list::team_list_action))
        .route("/api/teams/register", post(register::team_register_action))
}
