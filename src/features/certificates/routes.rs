use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::certificates::handlers;
use crate::features::certificates::services::CertificateService;

/// Create routes for certificate downloads
pub fn routes(service: Arc<CertificateService>) -> Router {
    Router::new()
        .route(
            "/api/wastes/{id}/certificate",
            get(handlers::download_certificate),
        )
        .with_state(service)
}
