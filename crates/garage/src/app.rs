//! Local HTTP adapter.
//!
//! Serves both handlers behind one axum router so the service can be run and
//! exercised without API Gateway. Every method is accepted on every path and
//! turned into a route key; the handlers decide what is supported.

use std::collections::HashMap;
use std::time::Duration;

use axum::{
    extract::{Path, State},
    http::{header, HeaderName, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::any,
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use garage_core::routing::{HandlerResponse, RoutedRequest};

use crate::{handlers::RouteHandler, state::AppState};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState, request_timeout: Duration) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/mechanics", any(mechanics_collection))
        .route("/mechanics/{id}", any(mechanic_item))
        .route("/users", any(users_collection))
        .route("/users/{UserId}", any(user_item))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            request_timeout,
        ))
        .with_state(state)
}

async fn mechanics_collection(
    State(state): State<AppState>,
    method: Method,
    body: String,
) -> Response {
    let request = routed(&method, "/mechanics", HashMap::new(), body);
    serve(state.mechanics.as_ref(), request).await
}

async fn mechanic_item(
    State(state): State<AppState>,
    method: Method,
    Path(params): Path<HashMap<String, String>>,
    body: String,
) -> Response {
    let request = routed(&method, "/mechanics/{id}", params, body);
    serve(state.mechanics.as_ref(), request).await
}

async fn users_collection(
    State(state): State<AppState>,
    method: Method,
    body: String,
) -> Response {
    let request = routed(&method, "/users", HashMap::new(), body);
    serve(state.users.as_ref(), request).await
}

async fn user_item(
    State(state): State<AppState>,
    method: Method,
    Path(params): Path<HashMap<String, String>>,
    body: String,
) -> Response {
    let request = routed(&method, "/users/{UserId}", params, body);
    serve(state.users.as_ref(), request).await
}

/// Builds the request API Gateway would have routed for this call.
fn routed(
    method: &Method,
    template: &str,
    params: HashMap<String, String>,
    body: String,
) -> RoutedRequest {
    RoutedRequest {
        route_key: format!("{method} {template}"),
        path_parameters: (!params.is_empty()).then_some(params),
        body: (!body.is_empty()).then_some(body),
    }
}

async fn serve(handler: &dyn RouteHandler, request: RoutedRequest) -> Response {
    into_http_response(handler.handle(&request).await)
}

fn into_http_response(response: HandlerResponse) -> Response {
    let HandlerResponse {
        status_code,
        headers,
        body,
    } = response;

    let status = StatusCode::from_u16(status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let mut http_response = (status, body).into_response();

    for (name, value) in headers {
        match (
            HeaderName::from_bytes(name.as_bytes()),
            HeaderValue::from_str(&value),
        ) {
            (Ok(name), Ok(value)) => {
                http_response.headers_mut().insert(name, value);
            }
            _ => tracing::warn!(header = %name, "Dropping invalid response header"),
        }
    }

    http_response
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    const USER_BODY: &str = r#"{
        "Name": "Asha",
        "ContactNumber": "5550100",
        "Address": "4 Lake View",
        "City": "Pune",
        "Password": "hunter2"
    }"#;

    fn app() -> Router {
        create_app(AppState::in_memory(), Duration::from_secs(10))
    }

    async fn send(app: &Router, method: &str, uri: &str, body: &str) -> (StatusCode, serde_json::Value) {
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        assert_eq!(
            response.headers().get("content-type").unwrap(),
            "application/json"
        );
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_list_users_empty() {
        let app = app();

        let (status, body) = send(&app, "GET", "/users", "").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_user_lifecycle() {
        let app = app();

        let (status, body) = send(&app, "POST", "/users", USER_BODY).await;
        assert_eq!(status, StatusCode::OK);
        let id = body["UserId"].as_str().unwrap().to_string();

        let (status, body) = send(&app, "GET", &format!("/users/{id}"), "").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["Name"], "Asha");
        assert_eq!(body["Password"], "********");

        let (status, _) = send(&app, "DELETE", &format!("/users/{id}"), "").await;
        assert_eq!(status, StatusCode::OK);

        let (status, body) = send(&app, "GET", &format!("/users/{id}"), "").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "User not found");
    }

    #[tokio::test]
    async fn test_mechanic_get_missing() {
        let app = app();

        let (status, body) = send(&app, "GET", "/mechanics/unknown", "").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "MechanicID Not Found");
    }

    #[tokio::test]
    async fn test_unsupported_method() {
        let app = app();

        let (status, body) = send(&app, "PUT", "/mechanics/abc", "{}").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Unsupported method");

        let (status, body) = send(&app, "PATCH", "/users", "").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Unsupported route: PATCH /users");
    }

    #[tokio::test]
    async fn test_create_mechanic_without_body() {
        let app = app();

        let (status, body) = send(&app, "POST", "/mechanics", "").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Request body is required");
    }

    #[test]
    fn test_routed_request() {
        let params = HashMap::from([("id".to_string(), "abc".to_string())]);
        let request = routed(&Method::DELETE, "/mechanics/{id}", params, String::new());

        assert_eq!(request.route_key, "DELETE /mechanics/{id}");
        assert_eq!(request.path_parameter("id"), Some("abc"));
        assert_eq!(request.body(), None);
    }
}
