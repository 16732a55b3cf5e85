pub mod default_handler;

use axum::body::Bytes;
use serde_json::{json, Value};

/// Request bodies are parsed leniently: empty or malformed JSON becomes an
/// empty object, never an error.
pub fn lenient_json(body: &Bytes) -> Value {
    if body.is_empty() {
        return json!({});
    }

    serde_json::from_slice(body).unwrap_or_else(|_| json!({}))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_body_becomes_empty_object() {
        assert_eq!(lenient_json(&Bytes::new()), json!({}));
    }

    #[test]
    fn malformed_body_becomes_empty_object() {
        assert_eq!(lenient_json(&Bytes::from_static(b"{not json")), json!({}));
    }

    #[test]
    fn valid_body_is_passed_through() {
        let body = Bytes::from_static(b"{\"runs\": 6}");
        assert_eq!(lenient_json(&body), json!({"runs": 6}));
    }
}
