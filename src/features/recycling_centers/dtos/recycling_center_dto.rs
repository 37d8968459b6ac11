use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::recycling_centers::models::RecyclingCenter;

/// Response DTO for a recycling center
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecyclingCenterResponseDto {
    pub id: String,
    pub name: String,
    pub address: String,
    pub certified: bool,
    /// "Certificado" for certified centers
    pub certification_label: Option<String>,
}

impl From<&RecyclingCenter> for RecyclingCenterResponseDto {
    fn from(c: &RecyclingCenter) -> Self {
        Self {
            id: c.id.to_string(),
            name: c.name.to_string(),
            address: c.address.to_string(),
            certified: c.certified,
            certification_label: c.certified.then(|| "Certificado".to_string()),
        }
    }
}
