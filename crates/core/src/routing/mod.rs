//! Routed events and the route tables of both handlers.
//!
//! A routed event is what the HTTP routing layer hands to a handler: the
//! matched route key, the extracted path parameters and the raw body. The
//! handler answers with a [`HandlerResponse`] whose body is already JSON
//! encoded.

mod request;
mod response;
mod routes;

pub use request::RoutedRequest;
pub use response::{HandlerResponse, CONTENT_TYPE_JSON};
pub use routes::{MechanicRoute, UserRoute, MECHANIC_ID_PARAM, USER_ID_PARAM};
