//! Mechanic registration handler.
//!
//! Serves `/mechanics` route keys against a [`MechanicRepository`].

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;

use garage_core::mechanic::{CreateMechanicRequest, Mechanic};
use garage_core::routing::{HandlerResponse, MechanicRoute, RoutedRequest, MECHANIC_ID_PARAM};
use garage_core::storage::MechanicRepository;

use super::{HandlerError, RouteHandler};

const MISSING_ID: &str = "Mechanic ID not provided";
const NOT_FOUND: &str = "MechanicID Not Found";
const UNSUPPORTED: &str = "Unsupported method";

pub struct MechanicHandler {
    repo: Arc<dyn MechanicRepository>,
}

impl MechanicHandler {
    pub fn new(repo: Arc<dyn MechanicRepository>) -> Self {
        Self { repo }
    }

    async fn dispatch(&self, request: &RoutedRequest) -> Result<HandlerResponse, HandlerError> {
        let route = MechanicRoute::from_route_key(&request.route_key)
            .ok_or_else(|| HandlerError::UnsupportedRoute(UNSUPPORTED.to_string()))?;

        match route {
            MechanicRoute::Create => self.create(request.body()).await,
            MechanicRoute::Delete => self.delete(require_id(request)?).await,
            MechanicRoute::List => self.list().await,
            MechanicRoute::Get => self.get(require_id(request)?).await,
        }
    }

    async fn create(&self, body: Option<&str>) -> Result<HandlerResponse, HandlerError> {
        let registration = CreateMechanicRequest::from_body(body)?.validate()?;
        let mechanic = Mechanic::register(registration);

        self.repo.put_mechanic(&mechanic).await?;

        tracing::info!(
            mechanic_id = %mechanic.mechanic_id,
            geohash = %mechanic.location_geohash,
            "Registered mechanic"
        );

        Ok(HandlerResponse::json(
            200,
            &json!({
                "message": "Successfully Registered",
                "MechanicId": mechanic.mechanic_id,
            }),
        ))
    }

    async fn delete(&self, id: &str) -> Result<HandlerResponse, HandlerError> {
        self.repo.delete_mechanic(id).await?;

        tracing::info!(mechanic_id = %id, "Deleted mechanic");
        Ok(HandlerResponse::message(
            200,
            "Mechanic details deleted successfully",
        ))
    }

    async fn list(&self) -> Result<HandlerResponse, HandlerError> {
        let mechanics = self.repo.scan_mechanics().await?;

        tracing::debug!(count = mechanics.len(), "Listed mechanics");
        Ok(HandlerResponse::json(200, &mechanics))
    }

    async fn get(&self, id: &str) -> Result<HandlerResponse, HandlerError> {
        let mechanic = self
            .repo
            .get_mechanic(id)
            .await?
            .ok_or(HandlerError::NotFound(NOT_FOUND))?;

        Ok(HandlerResponse::json(200, &mechanic))
    }
}

fn require_id(request: &RoutedRequest) -> Result<&str, HandlerError> {
    request
        .path_parameter(MECHANIC_ID_PARAM)
        .ok_or(HandlerError::MissingParameter(MISSING_ID))
}

#[async_trait]
impl RouteHandler for MechanicHandler {
    async fn handle(&self, request: &RoutedRequest) -> HandlerResponse {
        tracing::debug!(route_key = %request.route_key, "Handling mechanics request");

        match self.dispatch(request).await {
            Ok(response) => response,
            Err(err) => err.into_response(),
        }
    }
}
