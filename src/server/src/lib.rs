mod achievements;
mod common;
mod error;
mod index;
mod matches;
mod routes;
mod store;
mod teams;

pub use error::{ApiError, ApiResult};
pub use routes::ServerRoutes;
pub use store::{Achievement, Match, MatchStatus, Player, SampleStore, Team};

use axum::response::IntoResponse;
use log::{error, info};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::RwLock;
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;

pub struct MockApiServer {
    data: MockAppData,
}

impl MockApiServer {
    pub fn new(data: MockAppData) -> Self {
        MockApiServer { data }
    }

    pub async fn run(&self) {
        let app = ServerRoutes::create()
            .layer(
                ServiceBuilder::new()
                    // Catch panics in handlers and convert them to 500 errors
                    .layer(CatchPanicLayer::custom(|_err| {
                        (
                            axum::http::StatusCode::INTERNAL_SERVER_ERROR,
                            "Internal server error - handler panicked".to_string(),
                        ).into_response()
                    }))
            )
            .with_state(self.data.clone());

        let addr = SocketAddr::from(([0, 0, 0, 0], 8000));

        let listener = match TcpListener::bind(addr).await {
            Ok(listener) => listener,
            Err(e) => {
                error!("Failed to bind to address {}: {}", addr, e);
                panic!("Cannot start server without binding to port");
            }
        };

        info!("mock api listening at: http://localhost:8000");

        if let Err(e) = axum::serve(listener, app).await {
            error!("Server error: {}", e);
        }
    }
}

pub struct MockAppData {
    pub store: Arc<RwLock<SampleStore>>,
}

impl Clone for MockAppData {
    fn clone(&self) -> Self {
        MockAppData {
            store: Arc::clone(&self.store),
        }
    }
}
