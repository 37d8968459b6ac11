use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::wastes::dtos::{
    DeleteWasteQuery, DeleteWasteResponseDto, RegisterWasteDto, RegisteredWasteDto,
    UpdateWasteStatusDto, WasteDashboardDto, WasteResponseDto,
};
use crate::features::wastes::services::WasteService;
use crate::shared::constants::DASHBOARD_PATH;
use crate::shared::types::{ApiResponse, Meta};

/// Delay before the client moves on to the dashboard after registering
const REDIRECT_DELAY_MS: u64 = 900;

/// Register a waste item
#[utoipa::path(
    post,
    path = "/api/wastes",
    request_body = RegisterWasteDto,
    responses(
        (status = 201, description = "Waste registered", body = ApiResponse<RegisteredWasteDto>),
        (status = 400, description = "Missing required fields")
    ),
    tag = "wastes"
)]
pub async fn register_waste(
    State(service): State<Arc<WasteService>>,
    AppJson(dto): AppJson<RegisterWasteDto>,
) -> Result<(StatusCode, Json<ApiResponse<RegisteredWasteDto>>)> {
    let waste = service.register(dto).await?;
    let body = RegisteredWasteDto {
        waste: waste.into(),
        redirect_to: DASHBOARD_PATH.to_string(),
        redirect_delay_ms: REDIRECT_DELAY_MS,
    };

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(body),
            Some("Residuo registrado correctamente. Redirigiendo al panel...".to_string()),
            None,
        )),
    ))
}

/// Dashboard of registered waste items, newest first
#[utoipa::path(
    get,
    path = "/api/wastes",
    responses(
        (status = 200, description = "Dashboard rows", body = ApiResponse<WasteDashboardDto>),
    ),
    tag = "wastes"
)]
pub async fn list_wastes(
    State(service): State<Arc<WasteService>>,
) -> Result<Json<ApiResponse<WasteDashboardDto>>> {
    let items = service.list().await?;
    let total = items.len();
    let dashboard = WasteDashboardDto::render(&items);

    Ok(Json(ApiResponse::success(
        Some(dashboard),
        None,
        Some(Meta::total(total)),
    )))
}

/// Get a waste item by id
#[utoipa::path(
    get,
    path = "/api/wastes/{id}",
    params(
        ("id" = String, Path, description = "Waste item id")
    ),
    responses(
        (status = 200, description = "Waste item found", body = ApiResponse<WasteResponseDto>),
        (status = 404, description = "Waste item not found")
    ),
    tag = "wastes"
)]
pub async fn get_waste(
    State(service): State<Arc<WasteService>>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<WasteResponseDto>>> {
    let waste = service.get(&id).await?;
    Ok(Json(ApiResponse::success(Some(waste.into()), None, None)))
}

/// Delete a waste item
///
/// Requires `confirm=true`. Deleting an unknown id succeeds with `removed: false`.
#[utoipa::path(
    delete,
    path = "/api/wastes/{id}",
    params(
        ("id" = String, Path, description = "Waste item id"),
        ("confirm" = bool, Query, description = "Must be true")
    ),
    responses(
        (status = 200, description = "Removal processed", body = ApiResponse<DeleteWasteResponseDto>),
        (status = 400, description = "Confirmation missing"),
        (status = 409, description = "Blocked by linked collections")
    ),
    tag = "wastes"
)]
pub async fn delete_waste(
    State(service): State<Arc<WasteService>>,
    Path(id): Path<String>,
    Query(query): Query<DeleteWasteQuery>,
) -> Result<Json<ApiResponse<DeleteWasteResponseDto>>> {
    if !query.confirm {
        return Err(AppError::BadRequest(
            "Confirma la eliminación de este registro (confirm=true)".to_string(),
        ));
    }

    let outcome = service.remove(&id).await?;
    let message = if outcome.removed {
        "Registro eliminado."
    } else {
        "El registro no existe."
    };

    Ok(Json(ApiResponse::success(
        Some(DeleteWasteResponseDto {
            removed: outcome.removed,
            removed_collections: outcome.removed_collections,
        }),
        Some(message.to_string()),
        None,
    )))
}

/// Advance a delivered item to received or processed
#[utoipa::path(
    patch,
    path = "/api/wastes/{id}/status",
    params(
        ("id" = String, Path, description = "Waste item id")
    ),
    request_body = UpdateWasteStatusDto,
    responses(
        (status = 200, description = "Status updated", body = ApiResponse<WasteResponseDto>),
        (status = 404, description = "Waste item not found"),
        (status = 409, description = "Transition not allowed")
    ),
    tag = "wastes"
)]
pub async fn update_waste_status(
    State(service): State<Arc<WasteService>>,
    Path(id): Path<String>,
    AppJson(dto): AppJson<UpdateWasteStatusDto>,
) -> Result<Json<ApiResponse<WasteResponseDto>>> {
    let waste = service.advance_status(&id, &dto.status).await?;
    let message = format!("Estado actualizado: {}", waste.status.label());
    Ok(Json(ApiResponse::success(
        Some(waste.into()),
        Some(message),
        None,
    )))
}
