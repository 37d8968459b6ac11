use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::wastes::models::{NewWaste, WasteCondition, WasteItem, WasteStatus};
use crate::shared::constants::{DESCRIPTION_LABEL_MAX_CHARS, REGISTER_PATH};
use crate::shared::format::{capitalize, truncate_chars};
use crate::shared::validation::{parse_leading_number, sanitize_weight};

/// Weight as submitted by a form: a JSON number, free text, or anything else
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WeightInput {
    Number(f64),
    Text(String),
    /// Booleans, objects and arrays count as 0
    Other(serde_json::Value),
}

impl WeightInput {
    pub fn to_kg(&self) -> f64 {
        match self {
            WeightInput::Number(n) => sanitize_weight(Some(*n)),
            WeightInput::Text(s) => sanitize_weight(parse_leading_number(s)),
            WeightInput::Other(_) => 0.0,
        }
    }
}

/// Request DTO for registering a waste item.
///
/// Field aliases match the registration form's input ids.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterWasteDto {
    #[serde(default, alias = "userName")]
    pub name: Option<String>,

    #[serde(default, alias = "userEmail")]
    pub email: Option<String>,

    /// Waste category, e.g. "laptop", "celular"
    #[serde(default, rename = "type", alias = "wasteType")]
    pub waste_type: Option<String>,

    /// Number or text; unparsable values count as 0
    #[serde(default, alias = "weightKg")]
    #[schema(value_type = Option<f64>)]
    pub weight: Option<WeightInput>,

    /// funciona | no_funciona | parcial
    #[serde(default)]
    pub condition: Option<String>,

    #[serde(default, alias = "pickupAddress")]
    pub address: Option<String>,

    #[serde(default)]
    pub description: Option<String>,
}

/// Trimmed registration input, checked before anything is stored
#[derive(Debug, Clone, Validate)]
pub struct RegisterWasteCommand {
    #[validate(length(min = 1, message = "El nombre es obligatorio"))]
    pub name: String,

    #[validate(length(min = 1, message = "El correo es obligatorio"))]
    pub email: String,

    #[validate(length(min = 1, message = "El tipo de residuo es obligatorio"))]
    pub waste_type: String,

    #[validate(length(min = 1, message = "La dirección de recogida es obligatoria"))]
    pub address: String,

    pub weight_kg: f64,
    pub condition: Option<WasteCondition>,
    pub description: String,
}

fn trimmed(value: Option<String>) -> String {
    value.map(|s| s.trim().to_string()).unwrap_or_default()
}

impl From<RegisterWasteDto> for RegisterWasteCommand {
    fn from(dto: RegisterWasteDto) -> Self {
        let condition = dto
            .condition
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty())
            .map(WasteCondition::from);

        Self {
            name: trimmed(dto.name),
            email: trimmed(dto.email),
            waste_type: trimmed(dto.waste_type),
            address: trimmed(dto.address),
            weight_kg: dto.weight.map(|w| w.to_kg()).unwrap_or(0.0),
            condition,
            description: trimmed(dto.description),
        }
    }
}

impl From<RegisterWasteCommand> for NewWaste {
    fn from(cmd: RegisterWasteCommand) -> Self {
        Self {
            name: cmd.name,
            email: cmd.email,
            waste_type: cmd.waste_type,
            weight_kg: cmd.weight_kg,
            condition: cmd.condition,
            address: cmd.address,
            description: cmd.description,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct WasteOwnerDto {
    pub name: String,
    pub email: String,
}

/// Response DTO for a waste item
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WasteResponseDto {
    pub id: String,
    pub user: WasteOwnerDto,
    #[serde(rename = "type")]
    pub waste_type: String,
    pub weight_kg: f64,
    pub condition: Option<String>,
    pub pickup_address: String,
    pub description: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl From<WasteItem> for WasteResponseDto {
    fn from(w: WasteItem) -> Self {
        Self {
            id: w.id,
            user: WasteOwnerDto {
                name: w.user.name,
                email: w.user.email,
            },
            waste_type: w.waste_type,
            weight_kg: w.weight_kg,
            condition: w.condition.map(String::from),
            pickup_address: w.pickup_point.address,
            description: w.description,
            status: w.status.into(),
            created_at: w.created_at,
        }
    }
}

/// Returned after a successful registration
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisteredWasteDto {
    pub waste: WasteResponseDto,
    /// Where the client should navigate next
    pub redirect_to: String,
    pub redirect_delay_ms: u64,
}

/// Action a dashboard row may offer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum WasteAction {
    Assign,
    Certificate,
    Delete,
}

/// One dashboard row
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WasteRowDto {
    pub id: String,
    /// `Type (description…)`
    pub title: String,
    pub description_label: String,
    pub user_label: String,
    /// Weight with two decimals
    pub weight_label: String,
    pub condition_label: String,
    pub status: String,
    pub status_label: String,
    pub created_at: DateTime<Utc>,
    pub actions: Vec<WasteAction>,
}

const CONDITION_UNSPECIFIED: &str = "Sin especificar";

impl WasteRowDto {
    pub fn render(w: &WasteItem) -> Self {
        let description_label = truncate_chars(&w.description, DESCRIPTION_LABEL_MAX_CHARS);

        let mut actions = Vec::with_capacity(3);
        if w.status == WasteStatus::Pending {
            actions.push(WasteAction::Assign);
        }
        actions.push(WasteAction::Certificate);
        actions.push(WasteAction::Delete);

        Self {
            id: w.id.clone(),
            title: format!("{} ({})", capitalize(&w.waste_type), description_label),
            description_label,
            user_label: format!("{} — {}", w.user.name, w.user.email),
            weight_label: format!("{:.2}", w.weight_kg),
            condition_label: w
                .condition
                .as_ref()
                .map(|c| c.label().to_string())
                .unwrap_or_else(|| CONDITION_UNSPECIFIED.to_string()),
            status: w.status.code().to_string(),
            status_label: w.status.label().to_string(),
            created_at: w.created_at,
            actions,
        }
    }
}

/// Shown in place of rows when nothing is registered
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmptyStateDto {
    pub message: String,
    pub action_label: String,
    pub action_href: String,
}

impl EmptyStateDto {
    pub fn no_wastes() -> Self {
        Self {
            message: "No hay residuos registrados aún.".to_string(),
            action_label: "Registrar ahora".to_string(),
            action_href: REGISTER_PATH.to_string(),
        }
    }
}

/// Dashboard view of the waste registry
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WasteDashboardDto {
    pub rows: Vec<WasteRowDto>,
    pub empty_state: Option<EmptyStateDto>,
}

impl WasteDashboardDto {
    pub fn render(items: &[WasteItem]) -> Self {
        let empty_state = items.is_empty().then(EmptyStateDto::no_wastes);
        Self {
            rows: items.iter().map(WasteRowDto::render).collect(),
            empty_state,
        }
    }
}

/// Request DTO for advancing a waste item's status
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateWasteStatusDto {
    /// recibido | procesado
    pub status: String,
}

/// Query params for deleting a waste item
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DeleteWasteQuery {
    /// Must be true; removal is never implicit
    #[serde(default)]
    pub confirm: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeleteWasteResponseDto {
    pub removed: bool,
    /// Collection records removed alongside (cascade policy only)
    pub removed_collections: usize,
}
