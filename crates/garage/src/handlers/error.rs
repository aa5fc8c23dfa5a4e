use thiserror::Error;

use garage_core::routing::HandlerResponse;
use garage_core::storage::{repository_error_to_status_code, RepositoryError};
use garage_core::validation::ValidationError;

/// Everything a route handler can fail with.
///
/// Each variant maps to one status code and a `{"message": ...}` body.
#[derive(Debug, Error)]
pub enum HandlerError {
    /// A required path parameter is absent or blank.
    #[error("{0}")]
    MissingParameter(&'static str),
    /// The requested record does not exist.
    #[error("{0}")]
    NotFound(&'static str),
    /// No operation matches the route key. Carries the client-facing message.
    #[error("{0}")]
    UnsupportedRoute(String),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl HandlerError {
    pub fn status_code(&self) -> u16 {
        match self {
            Self::MissingParameter(_) | Self::UnsupportedRoute(_) | Self::Validation(_) => 400,
            Self::NotFound(_) => 404,
            Self::Repository(err) => repository_error_to_status_code(err),
        }
    }

    /// Renders the error as a response. Server-side failures never leak
    /// their details to the client.
    pub fn into_response(self) -> HandlerResponse {
        let status = self.status_code();

        match &self {
            Self::Repository(err) => {
                tracing::error!(status, error = %err, "Table operation failed");
            }
            Self::Validation(err) => {
                tracing::warn!(status, error = %err, "Rejected request body");
            }
            other => {
                tracing::debug!(status, message = %other, "Request not served");
            }
        }

        if status >= 500 {
            HandlerResponse::message(status, "Internal server error")
        } else {
            HandlerResponse::message(status, self.to_string())
        }
    }
}
