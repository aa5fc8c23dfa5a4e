//! User account handler.
//!
//! Serves `/users` route keys against a [`UserRepository`]. Stored password
//! digests are masked on every read path.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;

use garage_core::routing::{HandlerResponse, RoutedRequest, UserRoute, USER_ID_PARAM};
use garage_core::storage::UserRepository;
use garage_core::user::{CreateUserRequest, User};

use super::{HandlerError, RouteHandler};

const MISSING_ID: &str = "User ID not provided";
const NOT_FOUND: &str = "User not found";

pub struct UserHandler {
    repo: Arc<dyn UserRepository>,
}

impl UserHandler {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    async fn dispatch(&self, request: &RoutedRequest) -> Result<HandlerResponse, HandlerError> {
        let route = UserRoute::from_route_key(&request.route_key).ok_or_else(|| {
            HandlerError::UnsupportedRoute(format!("Unsupported route: {}", request.route_key))
        })?;

        match route {
            UserRoute::Create => self.create(request.body()).await,
            UserRoute::Delete => self.delete(require_id(request)?).await,
            UserRoute::List => self.list().await,
            UserRoute::Get => self.get(require_id(request)?).await,
        }
    }

    async fn create(&self, body: Option<&str>) -> Result<HandlerResponse, HandlerError> {
        let registration = CreateUserRequest::from_body(body)?.validate()?;
        let user = User::register(registration);

        self.repo.put_user(&user).await?;

        tracing::info!(user_id = %user.user_id, "Created user");
        Ok(HandlerResponse::json(
            200,
            &json!({
                "message": "User data Created",
                "UserId": user.user_id,
            }),
        ))
    }

    async fn delete(&self, id: &str) -> Result<HandlerResponse, HandlerError> {
        self.repo.delete_user(id).await?;

        tracing::info!(user_id = %id, "Deleted user");
        Ok(HandlerResponse::message(200, format!("Deleted user {id}")))
    }

    async fn list(&self) -> Result<HandlerResponse, HandlerError> {
        let users: Vec<User> = self
            .repo
            .scan_users()
            .await?
            .into_iter()
            .map(User::masked)
            .collect();

        tracing::debug!(count = users.len(), "Listed users");
        Ok(HandlerResponse::json(200, &users))
    }

    async fn get(&self, id: &str) -> Result<HandlerResponse, HandlerError> {
        let user = self
            .repo
            .get_user(id)
            .await?
            .ok_or(HandlerError::NotFound(NOT_FOUND))?;

        Ok(HandlerResponse::json(200, &user.masked()))
    }
}

fn require_id(request: &RoutedRequest) -> Result<&str, HandlerError> {
    request
        .path_parameter(USER_ID_PARAM)
        .ok_or(HandlerError::MissingParameter(MISSING_ID))
}

#[async_trait]
impl RouteHandler for UserHandler {
    async fn handle(&self, request: &RoutedRequest) -> HandlerResponse {
        tracing::debug!(route_key = %request.route_key, "Handling users request");

        match self.dispatch(request).await {
            Ok(response) => response,
            Err(err) => err.into_response(),
        }
    }
}
