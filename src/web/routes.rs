use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};

pub fn create_routes(state: AppState) -> Router {
    Router::new()
        // Assistant
        .route("/api/chat", post(super::handlers::chat::send_message))

        // Catalog
        .route("/api/products", get(super::handlers::catalog::list_products))
        .route("/api/products/{id}", get(super::handlers::catalog::get_product))

        // Health and status
        .route("/api/health", get(super::handlers::health::health_check))
        .route("/api/status", get(super::handlers::status::get_status))

        .with_state(state)
}
