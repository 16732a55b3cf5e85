use crate::matches::create::match_create_action;
use crate::matches::get::match_get_action;
use crate::matches::list::match_list_action;
use crate::MockAppData;
use axum::routing::get;
use axum::Router;

pub fn match_routes() -> Router<MockAppData> {
    Router::new()
        .route("/api/matches", get(match_list_action).post(match_create_action))
        .route("/api/matches/{match_id}", get(match_get_action))
}
