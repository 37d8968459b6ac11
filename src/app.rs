//! Service wiring and the HTTP router.

use std::sync::Arc;

use axum::{extract::DefaultBodyLimit, middleware::from_fn, Router};
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use crate::core::config::{Config, StorageBackend, SwaggerConfig, WorkflowConfig};
use crate::core::middleware;
use crate::core::openapi::{ApiDoc, SwaggerInfoModifier};
use crate::features::certificates::{routes as certificates_routes, CertificateService};
use crate::features::collections::{routes as collections_routes, CollectionService};
use crate::features::recycling_centers::{
    routes as recycling_centers_routes, RecyclingCenterService,
};
use crate::features::wastes::{routes as wastes_routes, WasteService};
use crate::modules::storage::{FileKvStore, KeyValueStore, MemoryKvStore, Storage, StorageError};

/// Every service the router needs
pub struct AppServices {
    pub wastes: Arc<WasteService>,
    pub collections: Arc<CollectionService>,
    pub certificates: Arc<CertificateService>,
    pub recycling_centers: Arc<RecyclingCenterService>,
}

impl AppServices {
    pub fn new(storage: Arc<Storage>, workflow: &WorkflowConfig) -> Self {
        let wastes = Arc::new(WasteService::new(
            Arc::clone(&storage),
            workflow.delete_policy,
        ));
        let collections = Arc::new(CollectionService::new(
            storage,
            workflow.pickup_lead_time_hours,
        ));
        let certificates = Arc::new(CertificateService::new(Arc::clone(&wastes)));
        let recycling_centers = Arc::new(RecyclingCenterService::new());

        Self {
            wastes,
            collections,
            certificates,
            recycling_centers,
        }
    }
}

/// Open the configured key-value backend
pub async fn open_storage(config: &Config) -> Result<Arc<Storage>, StorageError> {
    let kv: Arc<dyn KeyValueStore> = match config.storage.backend {
        StorageBackend::File => {
            let store = FileKvStore::open(&config.storage.data_dir).await?;
            tracing::info!("File storage opened at {}", store.dir().display());
            Arc::new(store)
        }
        StorageBackend::Memory => {
            tracing::warn!("In-memory storage selected, data is lost on restart");
            Arc::new(MemoryKvStore::new())
        }
    };
    Ok(Arc::new(Storage::new(kv)))
}

async fn health_check() -> axum::http::StatusCode {
    axum::http::StatusCode::OK
}

/// Feature routes plus health check, without docs or outer layers
pub fn api_routes(services: &AppServices) -> Router {
    Router::new()
        .merge(wastes_routes::routes(Arc::clone(&services.wastes)))
        .merge(collections_routes::routes(Arc::clone(&services.collections)))
        .merge(certificates_routes::routes(Arc::clone(
            &services.certificates,
        )))
        .merge(recycling_centers_routes::routes(Arc::clone(
            &services.recycling_centers,
        )))
        .route("/health", axum::routing::get(health_check))
}

fn swagger_routes(config: &SwaggerConfig) -> Router {
    let swagger_modifier = SwaggerInfoModifier {
        title: config.title.clone(),
        version: config.version.clone(),
        description: config.description.clone(),
    };

    let mut openapi = ApiDoc::openapi();
    swagger_modifier.modify(&mut openapi);

    let swagger =
        Router::new().merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi));

    if let Some(credentials) = config.credentials() {
        tracing::info!("Swagger UI basic auth enabled");
        swagger.layer(from_fn(middleware::basic_auth_middleware(Arc::new(
            credentials,
        ))))
    } else {
        tracing::info!("Swagger UI basic auth disabled (no credentials configured)");
        swagger
    }
}

/// Full application router with docs, CORS, tracing and request ids
pub fn build_router(services: &AppServices, config: &Config) -> Router {
    Router::new()
        .merge(swagger_routes(&config.swagger))
        .merge(api_routes(services))
        .layer(DefaultBodyLimit::max(config.app.max_request_body_size))
        .layer(middleware::cors_layer(
            config.app.cors_allowed_origins.clone(),
        ))
        // Propagate X-Request-Id to response headers
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(middleware::MakeSpanWithRequestId)
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        // Generate X-Request-Id using UUID v7 (or use client-provided one)
        .layer(SetRequestIdLayer::x_request_id(middleware::MakeRequestUuid))
}
