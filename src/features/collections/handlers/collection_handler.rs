use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::core::error::Result;
use crate::features::collections::dtos::{
    CollectionListDto, CollectionResponseDto, PickupResponseDto,
};
use crate::features::collections::services::CollectionService;
use crate::shared::types::{ApiResponse, Meta};

/// Assign a pickup collection to a pending waste item
#[utoipa::path(
    post,
    path = "/api/wastes/{id}/assign",
    params(
        ("id" = String, Path, description = "Waste item id")
    ),
    responses(
        (status = 201, description = "Collection scheduled", body = ApiResponse<CollectionResponseDto>),
        (status = 404, description = "Waste item not found"),
        (status = 409, description = "Waste item is not pending")
    ),
    tag = "collections"
)]
pub async fn assign_collection(
    State(service): State<Arc<CollectionService>>,
    Path(waste_id): Path<String>,
) -> Result<(StatusCode, Json<ApiResponse<CollectionResponseDto>>)> {
    let record = service.assign(&waste_id).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(record.into()),
            Some("Recolección asignada. Ver panel de transportadores.".to_string()),
            None,
        )),
    ))
}

/// Transporter view of all collections, newest first
#[utoipa::path(
    get,
    path = "/api/collections",
    responses(
        (status = 200, description = "Collection rows", body = ApiResponse<CollectionListDto>),
    ),
    tag = "collections"
)]
pub async fn list_collections(
    State(service): State<Arc<CollectionService>>,
) -> Result<Json<ApiResponse<CollectionListDto>>> {
    let rows = service.list_rows().await?;
    let total = rows.len();
    Ok(Json(ApiResponse::success(
        Some(CollectionListDto::new(rows)),
        None,
        Some(Meta::total(total)),
    )))
}

/// Mark a collection as picked up
#[utoipa::path(
    patch,
    path = "/api/collections/{id}/pickup",
    params(
        ("id" = String, Path, description = "Collection id")
    ),
    responses(
        (status = 200, description = "Collection picked up", body = ApiResponse<PickupResponseDto>),
        (status = 404, description = "Collection not found")
    ),
    tag = "collections"
)]
pub async fn mark_picked_up(
    State(service): State<Arc<CollectionService>>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<PickupResponseDto>>> {
    let outcome = service.mark_picked_up(&id).await?;
    let dto = PickupResponseDto {
        collection: outcome.collection.into(),
        waste: outcome.waste.map(Into::into),
    };

    Ok(Json(ApiResponse::success(
        Some(dto),
        Some("Recolección marcada como recogida. Estado actualizado.".to_string()),
        None,
    )))
}
