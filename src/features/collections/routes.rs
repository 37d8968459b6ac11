use std::sync::Arc;

use axum::{
    routing::{get, patch, post},
    Router,
};

use crate::features::collections::handlers;
use crate::features::collections::services::CollectionService;

/// Create routes for collection assignment and pickup
pub fn routes(service: Arc<CollectionService>) -> Router {
    Router::new()
        .route(
            "/api/wastes/{id}/assign",
            post(handlers::assign_collection),
        )
        .route("/api/collections", get(handlers::list_collections))
        .route(
            "/api/collections/{id}/pickup",
            patch(handlers::mark_picked_up),
        )
        .with_state(service)
}
