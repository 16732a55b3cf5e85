use crate::achievements::achievement_routes;
use crate::common::default_handler::default_handler;
use crate::index::index_routes;
use crate::matches::routes::match_routes;
use crate::teams::team_routes;
use crate::MockAppData;
use axum::http::header::CONTENT_TYPE;
use axum::http::Method;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

pub struct ServerRoutes;

impl ServerRoutes {
    pub fn create() -> Router<MockAppData> {
        Router::<MockAppData>::new()
            .merge(index_routes())
            .merge(match_routes())
            .merge(team_routes())
            .merge(achievement_routes())
            // Unrouted requests (and wrong-method requests) fall through to the
            // mock-update echo / 404 logic instead of axum's plain 405
            .fallback(default_handler)
            .method_not_allowed_fallback(default_handler)
            .layer(
                CorsLayer::new()
                    .allow_origin(Any)
                    .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                    .allow_headers([CONTENT_TYPE]),
            )
    }
}
