use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::header,
    response::IntoResponse,
};

use crate::core::error::{AppError, Result};
use crate::features::certificates::dtos::CertificateDto;
use crate::features::certificates::services::CertificateService;

/// Download a certificate for a waste item
///
/// Returns the certificate as a pretty-printed JSON attachment. Nothing is stored.
#[utoipa::path(
    get,
    path = "/api/wastes/{id}/certificate",
    params(
        ("id" = String, Path, description = "Waste item id")
    ),
    responses(
        (status = 200, description = "Certificate file", body = CertificateDto, content_type = "application/json"),
        (status = 404, description = "Waste item not found")
    ),
    tag = "certificates"
)]
pub async fn download_certificate(
    State(service): State<Arc<CertificateService>>,
    Path(waste_id): Path<String>,
) -> Result<impl IntoResponse> {
    let certificate = service.generate(&waste_id).await?;
    let body = serde_json::to_string_pretty(&certificate)
        .map_err(|e| AppError::Internal(format!("Failed to serialize certificate: {}", e)))?;
    let disposition = format!("attachment; filename=\"{}\"", certificate.file_name());

    Ok((
        [
            (header::CONTENT_TYPE, "application/json".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        body,
    ))
}
