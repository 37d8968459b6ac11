use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::Result;
use crate::features::recycling_centers::dtos::RecyclingCenterResponseDto;
use crate::features::recycling_centers::services::RecyclingCenterService;
use crate::shared::types::{ApiResponse, Meta};

/// List recycling centers
#[utoipa::path(
    get,
    path = "/api/recycling-centers",
    responses(
        (status = 200, description = "List of recycling centers", body = ApiResponse<Vec<RecyclingCenterResponseDto>>),
    ),
    tag = "recycling-centers"
)]
pub async fn list_recycling_centers(
    State(service): State<Arc<RecyclingCenterService>>,
) -> Result<Json<ApiResponse<Vec<RecyclingCenterResponseDto>>>> {
    let centers = service.list();
    let total = centers.len();
    Ok(Json(ApiResponse::success(
        Some(centers),
        None,
        Some(Meta::total(total)),
    )))
}
