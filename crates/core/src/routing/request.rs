use std::collections::HashMap;

use serde::Deserialize;

/// An inbound routed request.
///
/// Field names follow the API Gateway HTTP API payload, so a Lambda event
/// deserializes directly into this type. Unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutedRequest {
    /// `METHOD /path/{param}`, e.g. `GET /mechanics/{id}`.
    pub route_key: String,
    #[serde(default)]
    pub path_parameters: Option<HashMap<String, String>>,
    #[serde(default)]
    pub body: Option<String>,
}

impl RoutedRequest {
    /// Create a request for the given route key, without parameters or body.
    pub fn new(route_key: impl Into<String>) -> Self {
        Self {
            route_key: route_key.into(),
            path_parameters: None,
            body: None,
        }
    }

    /// Add a path parameter.
    pub fn with_path_parameter(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.path_parameters
            .get_or_insert_with(HashMap::new)
            .insert(name.into(), value.into());
        self
    }

    /// Set the raw body.
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Looks up a path parameter. Blank values count as absent.
    pub fn path_parameter(&self, name: &str) -> Option<&str> {
        self.path_parameters
            .as_ref()?
            .get(name)
            .map(String::as_str)
            .filter(|value| !value.trim().is_empty())
    }

    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_api_gateway_event() {
        let event = r#"{
            "version": "2.0",
            "routeKey": "GET /mechanics/{id}",
            "rawPath": "/mechanics/abc",
            "pathParameters": {"id": "abc"},
            "isBase64Encoded": false
        }"#;

        let request: RoutedRequest = serde_json::from_str(event).unwrap();

        assert_eq!(request.route_key, "GET /mechanics/{id}");
        assert_eq!(request.path_parameter("id"), Some("abc"));
        assert_eq!(request.body(), None);
    }

    #[test]
    fn test_null_path_parameters() {
        let event = r#"{"routeKey": "GET /users", "pathParameters": null, "body": null}"#;
        let request: RoutedRequest = serde_json::from_str(event).unwrap();

        assert_eq!(request.path_parameter("UserId"), None);
    }

    #[test]
    fn test_blank_path_parameter_is_absent() {
        let request = RoutedRequest::new("DELETE /users/{UserId}").with_path_parameter("UserId", "");
        assert_eq!(request.path_parameter("UserId"), None);
    }

    #[test]
    fn test_builder() {
        let request = RoutedRequest::new("POST /users").with_body("{}");

        assert_eq!(request.route_key, "POST /users");
        assert_eq!(request.body(), Some("{}"));
        assert!(request.path_parameters.is_none());
    }
}
