//! Lambda adapter.
//!
//! Runs one handler behind the Lambda runtime. API Gateway supplies the
//! route key and path parameters; the handler's response is returned as a
//! proxy response.

use std::collections::HashMap;
use std::sync::Arc;

use lambda_http::request::RequestContext;
use lambda_http::{service_fn, Body, Error, Request, RequestExt, Response};

use garage_core::routing::{HandlerResponse, RoutedRequest};
use garage_core::validation::ValidationError;

use crate::handlers::{HandlerError, RouteHandler};

/// Serves Lambda invocations with `handler` until the runtime shuts down.
pub async fn run(handler: Arc<dyn RouteHandler>) -> anyhow::Result<()> {
    lambda_http::run(service_fn(move |event: Request| {
        let handler = Arc::clone(&handler);
        async move { invoke(handler.as_ref(), event).await }
    }))
    .await
    .map_err(|e| anyhow::anyhow!(e))
}

async fn invoke(handler: &dyn RouteHandler, event: Request) -> Result<Response<Body>, Error> {
    let response = match routed_request(&event) {
        Ok(request) => {
            tracing::info!(route_key = %request.route_key, "Lambda invocation");
            handler.handle(&request).await
        }
        Err(err) => HandlerError::from(err).into_response(),
    };

    into_lambda_response(response)
}

/// Extracts the route key, path parameters and body from an API Gateway event.
///
/// Binary bodies must be UTF-8 text.
fn routed_request(event: &Request) -> Result<RoutedRequest, ValidationError> {
    let route_key = match event.request_context_ref() {
        Some(RequestContext::ApiGatewayV2(ctx)) => ctx.route_key.clone(),
        Some(RequestContext::ApiGatewayV1(ctx)) => ctx
            .resource_path
            .as_ref()
            .map(|resource| format!("{} {}", event.method(), resource)),
        _ => None,
    }
    .unwrap_or_else(|| format!("{} {}", event.method(), event.uri().path()));

    let params: HashMap<String, String> = event
        .path_parameters_ref()
        .map(|params| {
            params
                .iter()
                .map(|(name, value)| (name.to_string(), value.to_string()))
                .collect()
        })
        .unwrap_or_default();

    let body = match event.body() {
        Body::Empty => None,
        Body::Text(text) => Some(text.clone()),
        Body::Binary(bytes) => Some(String::from_utf8(bytes.clone()).map_err(|_| {
            ValidationError::MalformedBody("body is not valid UTF-8".to_string())
        })?),
    };

    Ok(RoutedRequest {
        route_key,
        path_parameters: (!params.is_empty()).then_some(params),
        body,
    })
}

fn into_lambda_response(response: HandlerResponse) -> Result<Response<Body>, Error> {
    let mut builder = Response::builder().status(response.status_code);
    for (name, value) in &response.headers {
        builder = builder.header(name.as_str(), value.as_str());
    }

    Ok(builder.body(Body::Text(response.body))?)
}
