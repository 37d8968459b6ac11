use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::recycling_centers::handlers;
use crate::features::recycling_centers::services::RecyclingCenterService;

/// Create routes for the recycling center directory
pub fn routes(service: Arc<RecyclingCenterService>) -> Router {
    Router::new()
        .route(
            "/api/recycling-centers",
            get(handlers::list_recycling_centers),
        )
        .with_state(service)
}
