use std::collections::BTreeMap;

use serde::Serialize;

pub const CONTENT_TYPE_JSON: &str = "application/json";

/// The response handed back to the routing layer.
///
/// `body` is a JSON document encoded as a string, as API Gateway expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HandlerResponse {
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    pub body: String,
}

impl HandlerResponse {
    /// Encode `payload` as the JSON body of a response.
    pub fn json<T: Serialize + ?Sized>(status_code: u16, payload: &T) -> Self {
        match serde_json::to_string(payload) {
            Ok(body) => Self::with_body(status_code, body),
            Err(_) => Self::message(500, "Internal server error"),
        }
    }

    /// A `{"message": ...}` envelope.
    pub fn message(status_code: u16, message: impl Into<String>) -> Self {
        let message: String = message.into();
        let body = serde_json::json!({ "message": message }).to_string();
        Self::with_body(status_code, body)
    }

    fn with_body(status_code: u16, body: String) -> Self {
        let mut headers = BTreeMap::new();
        headers.insert("Content-Type".to_string(), CONTENT_TYPE_JSON.to_string());
        Self {
            status_code,
            headers,
            body,
        }
    }

    /// Decode the body back into JSON.
    pub fn body_json(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::from_str(&self.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_envelope() {
        let response = HandlerResponse::message(404, "User not found");

        assert_eq!(response.status_code, 404);
        assert_eq!(response.body, r#"{"message":"User not found"}"#);
        assert_eq!(
            response.headers.get("Content-Type").map(String::as_str),
            Some(CONTENT_TYPE_JSON)
        );
    }

    #[test]
    fn test_json_array_body() {
        let response = HandlerResponse::json(200, &["a", "b"]);

        assert_eq!(response.status_code, 200);
        assert_eq!(response.body_json().unwrap(), serde_json::json!(["a", "b"]));
    }

    #[test]
    fn test_serializes_as_proxy_response() {
        let response = HandlerResponse::message(200, "ok");
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["statusCode"], 200);
        assert_eq!(json["headers"]["Content-Type"], "application/json");
        assert_eq!(json["body"], r#"{"message":"ok"}"#);
    }
}
