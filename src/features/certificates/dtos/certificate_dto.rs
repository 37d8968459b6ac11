use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::wastes::dtos::WasteOwnerDto;
use crate::features::wastes::models::WasteItem;
use crate::shared::constants::{CERTIFICATE_ID_PREFIX, CERTIFICATE_NOTE};
use crate::shared::format::generate_id;

/// Point-in-time certificate for a waste item; never persisted
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CertificateDto {
    pub certificate_id: String,
    pub waste_id: String,
    pub user: WasteOwnerDto,
    #[serde(rename = "type")]
    pub waste_type: String,
    pub weight_kg: f64,
    pub condition: Option<String>,
    pub status: String,
    pub generated_at: DateTime<Utc>,
    pub note: String,
}

impl CertificateDto {
    /// Snapshot `waste` under a fresh certificate id
    pub fn snapshot(waste: &WasteItem) -> Self {
        Self {
            certificate_id: generate_id(CERTIFICATE_ID_PREFIX),
            waste_id: waste.id.clone(),
            user: WasteOwnerDto {
                name: waste.user.name.clone(),
                email: waste.user.email.clone(),
            },
            waste_type: waste.waste_type.clone(),
            weight_kg: waste.weight_kg,
            condition: waste.condition.clone().map(String::from),
            status: waste.status.clone().into(),
            generated_at: Utc::now(),
            note: CERTIFICATE_NOTE.to_string(),
        }
    }

    /// Download name, derived from the waste item id only
    pub fn file_name(&self) -> String {
        certificate_file_name(&self.waste_id)
    }
}

pub fn certificate_file_name(waste_id: &str) -> String {
    format!("certificado_ecotech_{}.json", waste_id)
}
