use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::collections::models::CollectionRecord;
use crate::features::wastes::dtos::WasteResponseDto;
use crate::features::wastes::models::WasteItem;
use crate::shared::constants::NOT_AVAILABLE;
use crate::shared::format::capitalize;

const SCHEDULE_LABEL_FORMAT: &str = "%d/%m/%Y %H:%M";

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TransporterDto {
    pub id: String,
    pub name: String,
}

/// Response DTO for a collection record
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CollectionResponseDto {
    pub id: String,
    pub waste_id: String,
    pub transporter: TransporterDto,
    pub scheduled_at: DateTime<Utc>,
    pub picked_at: Option<DateTime<Utc>>,
    pub status: String,
}

impl From<CollectionRecord> for CollectionResponseDto {
    fn from(c: CollectionRecord) -> Self {
        Self {
            id: c.id,
            waste_id: c.waste_id,
            transporter: TransporterDto {
                id: c.transporter.id,
                name: c.transporter.name,
            },
            scheduled_at: c.scheduled_at,
            picked_at: c.picked_at,
            status: c.status.into(),
        }
    }
}

/// Result of marking a collection as picked up
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PickupResponseDto {
    pub collection: CollectionResponseDto,
    /// The linked waste item after the cascade, absent if it was removed
    pub waste: Option<WasteResponseDto>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum CollectionAction {
    MarkPickedUp,
}

/// One row of the transporter view
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CollectionRowDto {
    pub id: String,
    pub waste_id: String,
    /// `Recolección: <Type>`
    pub title: String,
    pub user_name: String,
    pub transporter_name: String,
    pub scheduled_at: DateTime<Utc>,
    pub scheduled_label: String,
    pub picked_at: Option<DateTime<Utc>>,
    pub status: String,
    pub status_label: String,
    pub actions: Vec<CollectionAction>,
}

impl CollectionRowDto {
    /// Project a record; `waste` is `None` when the linked item no longer exists
    pub fn render(c: &CollectionRecord, waste: Option<&WasteItem>) -> Self {
        let (waste_type, user_name) = match waste {
            Some(w) => (capitalize(&w.waste_type), w.user.name.clone()),
            None => (NOT_AVAILABLE.to_string(), NOT_AVAILABLE.to_string()),
        };

        Self {
            id: c.id.clone(),
            waste_id: c.waste_id.clone(),
            title: format!("Recolección: {}", waste_type),
            user_name,
            transporter_name: c.transporter.name.clone(),
            scheduled_at: c.scheduled_at,
            scheduled_label: c.scheduled_at.format(SCHEDULE_LABEL_FORMAT).to_string(),
            picked_at: c.picked_at,
            status: c.status.code().to_string(),
            status_label: c.status.label().to_string(),
            actions: vec![CollectionAction::MarkPickedUp],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CollectionListDto {
    pub rows: Vec<CollectionRowDto>,
    /// Set when there is nothing scheduled
    pub empty_message: Option<String>,
}

impl CollectionListDto {
    pub fn new(rows: Vec<CollectionRowDto>) -> Self {
        let empty_message = rows
            .is_empty()
            .then(|| "No hay recolecciones programadas.".to_string());
        Self {
            rows,
            empty_message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::collections::models::{CollectionStatus, Transporter};
    use crate::features::wastes::models::{PickupPoint, WasteOwner, WasteStatus};
    use chrono::TimeZone;

    fn record() -> CollectionRecord {
        CollectionRecord {
            id: "c_1".to_string(),
            waste_id: "w_1".to_string(),
            transporter: Transporter::demo(),
            scheduled_at: Utc.with_ymd_and_hms(2025, 3, 2, 9, 5, 0).unwrap(),
            picked_at: None,
            status: CollectionStatus::Scheduled,
        }
    }

    #[test]
    fn test_render_with_waste() {
        let waste = WasteItem {
            id: "w_1".to_string(),
            user: WasteOwner {
                name: "Ana".to_string(),
                email: "a@x.com".to_string(),
            },
            waste_type: "laptop".to_string(),
            weight_kg: 2.5,
            condition: None,
            pickup_point: PickupPoint {
                address: "Calle 1".to_string(),
            },
            description: String::new(),
            status: WasteStatus::Assigned,
            created_at: Utc::now(),
        };

        let row = CollectionRowDto::render(&record(), Some(&waste));
        assert_eq!(row.title, "Recolección: Laptop");
        assert_eq!(row.user_name, "Ana");
        assert_eq!(row.transporter_name, "Transportadora Demo");
        assert_eq!(row.scheduled_label, "02/03/2025 09:05");
        assert_eq!(row.status_label, "Programada");
    }

    #[test]
    fn test_render_orphan() {
        let row = CollectionRowDto::render(&record(), None);
        assert_eq!(row.title, "Recolección: N/D");
        assert_eq!(row.user_name, "N/D");
    }

    #[test]
    fn test_empty_list_message() {
        assert!(CollectionListDto::new(vec![]).empty_message.is_some());
        let row = CollectionRowDto::render(&record(), None);
        assert!(CollectionListDto::new(vec![row]).empty_message.is_none());
    }
}
