use utoipa::{Modify, OpenApi};

use crate::features::certificates::{dtos as certificates_dtos, handlers as certificates_handlers};
use crate::features::collections::{dtos as collections_dtos, handlers as collections_handlers};
use crate::features::recycling_centers::{
    dtos as recycling_centers_dtos, handlers as recycling_centers_handlers,
};
use crate::features::wastes::{dtos as wastes_dtos, handlers as wastes_handlers};
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Wastes
        wastes_handlers::register_waste,
        wastes_handlers::list_wastes,
        wastes_handlers::get_waste,
        wastes_handlers::delete_waste,
        wastes_handlers::update_waste_status,
        // Collections
        collections_handlers::assign_collection,
        collections_handlers::list_collections,
        collections_handlers::mark_picked_up,
        // Certificates
        certificates_handlers::download_certificate,
        // Recycling centers
        recycling_centers_handlers::list_recycling_centers,
    ),
    components(
        schemas(
            // Shared
            Meta,
            // Wastes
            wastes_dtos::RegisterWasteDto,
            wastes_dtos::WasteOwnerDto,
            wastes_dtos::WasteResponseDto,
            wastes_dtos::RegisteredWasteDto,
            wastes_dtos::WasteAction,
            wastes_dtos::WasteRowDto,
            wastes_dtos::EmptyStateDto,
            wastes_dtos::WasteDashboardDto,
            wastes_dtos::UpdateWasteStatusDto,
            wastes_dtos::DeleteWasteResponseDto,
            ApiResponse<wastes_dtos::RegisteredWasteDto>,
            ApiResponse<wastes_dtos::WasteDashboardDto>,
            ApiResponse<wastes_dtos::WasteResponseDto>,
            ApiResponse<wastes_dtos::DeleteWasteResponseDto>,
            // Collections
            collections_dtos::TransporterDto,
            collections_dtos::CollectionResponseDto,
            collections_dtos::PickupResponseDto,
            collections_dtos::CollectionAction,
            collections_dtos::CollectionRowDto,
            collections_dtos::CollectionListDto,
            ApiResponse<collections_dtos::CollectionResponseDto>,
            ApiResponse<collections_dtos::CollectionListDto>,
            ApiResponse<collections_dtos::PickupResponseDto>,
            // Certificates
            certificates_dtos::CertificateDto,
            // Recycling centers
            recycling_centers_dtos::RecyclingCenterResponseDto,
            ApiResponse<Vec<recycling_centers_dtos::RecyclingCenterResponseDto>>,
        )
    ),
    tags(
        (name = "wastes", description = "Waste item registration and dashboard"),
        (name = "collections", description = "Simulated pickup assignment and completion"),
        (name = "certificates", description = "Demo disposal certificates (not legally valid)"),
        (name = "recycling-centers", description = "Static recycling center directory"),
    ),
    info(
        title = "ECO-TECH API",
        version = "0.1.0",
        description = "Electronic waste registration and collection tracking",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
