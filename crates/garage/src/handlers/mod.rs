//! Route handlers.
//!
//! Each handler owns one table and turns a [`RoutedRequest`] into a
//! [`HandlerResponse`]. Failures never escape a handler: they are rendered as
//! status codes with a `{"message": ...}` body.

mod error;
mod mechanics;
mod users;

use async_trait::async_trait;

use garage_core::routing::{HandlerResponse, RoutedRequest};

pub use error::HandlerError;
pub use mechanics::MechanicHandler;
pub use users::UserHandler;

/// Something that can serve a routed request.
///
/// Implemented by both handlers so the Lambda and local adapters can share
/// one dispatch path.
#[async_trait]
pub trait RouteHandler: Send + Sync {
    async fn handle(&self, request: &RoutedRequest) -> HandlerResponse;
}
