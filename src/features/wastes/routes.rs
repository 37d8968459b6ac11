use std::sync::Arc;

use axum::{
    routing::{get, patch},
    Router,
};

use crate::features::wastes::handlers;
use crate::features::wastes::services::WasteService;

/// Create routes for the waste registry
pub fn routes(service: Arc<WasteService>) -> Router {
    Router::new()
        .route(
            "/api/wastes",
            get(handlers::list_wastes).post(handlers::register_waste),
        )
        .route(
            "/api/wastes/{id}",
            get(handlers::get_waste).delete(handlers::delete_waste),
        )
        .route(
            "/api/wastes/{id}/status",
            patch(handlers::update_waste_status),
        )
        .with_state(service)
}
