use crate::common::lenient_json;
use crate::ApiError;
use axum::body::Bytes;
use axum::http::{Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::Json;
use log::debug;
use serde_json::json;

const MOCK_UPDATE_SUFFIXES: [&str; 3] = ["/score", "/toss", "/complete"];

/// Catch-all for requests no explicit route claims.
///
/// POSTs ending in `/score`, `/toss` or `/complete` are mock updates: the body
/// is acknowledged and echoed back, stored data stays untouched. Everything
/// else is a 404 with the method-specific error message the frontend keys on.
pub async fn default_handler(method: Method, uri: Uri, body: Bytes) -> Response {
    let path = uri.path();

    // Non-preflight OPTIONS (preflight is answered by the CORS layer)
    if method == Method::OPTIONS {
        return StatusCode::OK.into_response();
    }

    if method == Method::POST {
        if MOCK_UPDATE_SUFFIXES.iter().any(|suffix| path.ends_with(suffix)) {
            debug!("mock update acknowledged: {}", path);

            let data = lenient_json(&body);

            return Json(json!({
                "status": "ok",
                "data": data,
            }))
            .into_response();
        }

        return ApiError::NotFound("unknown POST endpoint".to_string()).into_response();
    }

    ApiError::NotFound("unknown endpoint".to_string()).into_response()
}
