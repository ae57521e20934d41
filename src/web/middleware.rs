use crate::types::errors::internal_failure_body;
use axum::{
    http::{header, Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use std::any::Any;
use tower_http::cors::{Any as AnyOrigin, CorsLayer};

pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AnyOrigin)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
}

/// Turns a handler panic into the same 500 body as any other internal failure.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic payload"
    };
    tracing::error!("[HTTP] Handler panicked: {}", detail);

    (StatusCode::INTERNAL_SERVER_ERROR, Json(internal_failure_body())).into_response()
}
